use crate::commands::helpers::summary;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::session::PlanSession;
use crate::store::ProgressStore;
use crate::transport::{decode_plan_text, PlanSource};

/// Decodes `text` (any supported transport), makes it the current plan and
/// restores its saved progress.
pub fn run<S: ProgressStore>(store: &mut S, text: &str) -> Result<CmdResult> {
    let (doc, source) = decode_plan_text(text)?;
    store.save_current_plan(&doc)?;

    let session = PlanSession::load(doc, &*store);
    let summary = summary(&session, &*store);

    let mut result = CmdResult::default();
    let via = match source {
        PlanSource::Clipboard => "clipboard payload",
        PlanSource::ProtocolUrl => "planner link",
        PlanSource::Json => "JSON",
    };
    result.add_message(CmdMessage::success(format!(
        "Loaded plan {} from {}",
        summary.name.as_deref().unwrap_or("(unnamed)"),
        via
    )));
    if !session.state().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "Restored progress: {}/{} gifts acquired",
            summary.progress.acquired, summary.progress.total
        )));
    }
    if session.plan().all_gifts().is_empty() {
        result.add_message(CmdMessage::warning("Plan has no gifts"));
    }

    Ok(result.with_summary(summary))
}
