use crate::commands::helpers::{open_session, summary};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::ProgressStore;

pub fn run<S: ProgressStore>(store: &S) -> Result<CmdResult> {
    let session = open_session(store)?;
    Ok(CmdResult::default().with_summary(summary(&session, store)))
}
