use crate::commands::helpers::{gift_entries, open_session};
use crate::commands::{CmdMessage, CmdResult, OrderRow};
use crate::error::Result;
use crate::store::ProgressStore;

/// The acquisition order, with each entry marked acquired or not.
/// Rows without priority groups are skipped but keep their number.
pub fn run<S: ProgressStore>(store: &S) -> Result<CmdResult> {
    let session = open_session(store)?;

    let rows: Vec<OrderRow> = session
        .plan()
        .acquisition_order()
        .iter()
        .enumerate()
        .filter(|(_, step)| !step.priorities.is_empty())
        .map(|(i, step)| OrderRow {
            number: i + 1,
            groups: step
                .priorities
                .iter()
                .map(|group| gift_entries(&session, group))
                .collect(),
        })
        .collect();

    let mut result = CmdResult::default();
    if rows.is_empty() {
        result.add_message(CmdMessage::info("This plan has no acquisition order"));
    }
    Ok(result.with_order(rows))
}
