use crate::commands::helpers::{open_session, summary};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ProgressStore;

pub fn run<S: ProgressStore>(store: &mut S) -> Result<CmdResult> {
    let mut session = open_session(&*store)?;
    let cleared = session.state().len();
    session.reset_all(store);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Cleared {} acquired gifts",
        cleared
    )));
    let summary = summary(&session, &*store);
    Ok(result.with_summary(summary))
}
