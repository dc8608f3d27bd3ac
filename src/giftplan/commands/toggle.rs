use crate::acquisition::Toggle;
use crate::commands::helpers::{gift_entry, open_session, summary};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::ProgressStore;

/// Toggles each target in order. Targets are gift ids or catalog names;
/// ones that do not resolve are reported and skipped.
pub fn run<S: ProgressStore, T: AsRef<str>>(store: &mut S, targets: &[T]) -> Result<CmdResult> {
    let mut session = open_session(&*store)?;
    let mut result = CmdResult::default();
    let mut touched = Vec::new();

    for target in targets {
        let raw = target.as_ref();
        let (outcome, _) = session.toggle_raw(store, raw);
        match outcome {
            Toggle::Ignored => {
                result.add_message(CmdMessage::warning(format!("No gift matches {}", raw)));
            }
            outcome => {
                let id = session.plan().resolve(raw);
                let gift = id.and_then(|id| session.plan().gift(id));
                let label = gift.map(|g| g.name.as_str()).unwrap_or(raw);
                let verb = if outcome == Toggle::Acquired {
                    "Acquired"
                } else {
                    "Released"
                };
                let cascade = id
                    .filter(|id| session.plan().is_synthesis(*id))
                    .map(|id| session.plan().ingredients(id).len())
                    .unwrap_or(0);
                let message = if cascade > 0 {
                    format!("{}: {} (+{} ingredients)", verb, label, cascade)
                } else {
                    format!("{}: {}", verb, label)
                };
                result.add_message(CmdMessage::success(message));
                if let Some(gift) = gift {
                    touched.push(gift.clone());
                }
            }
        }
    }

    let entries = touched.iter().map(|g| gift_entry(&session, g)).collect();
    let summary = summary(&session, &*store);
    Ok(result.with_listed_gifts(entries).with_summary(summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::open_session;
    use crate::store::memory::fixtures::{sample_document, StoreFixture};
    use std::collections::BTreeSet;

    #[test]
    fn toggles_by_id_and_name() {
        let mut fixture = StoreFixture::new().with_current_plan(sample_document());

        let result = run(&mut fixture.store, &["100", "Tremor Bell"]).unwrap();

        assert_eq!(result.messages.len(), 2);
        assert!(result.messages[0].content.contains("+2 ingredients"));
        let session = open_session(&fixture.store).unwrap();
        let expected: BTreeSet<u32> = [1, 2, 3, 100].into_iter().collect();
        assert_eq!(session.state().acquired(), &expected);
    }

    #[test]
    fn unresolvable_targets_warn() {
        let mut fixture = StoreFixture::new().with_current_plan(sample_document());

        let result = run(&mut fixture.store, &["nope"]).unwrap();

        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("No gift matches"));
        assert!(open_session(&fixture.store).unwrap().state().is_empty());
    }

    #[test]
    fn toggling_twice_in_one_call_cancels_out() {
        let mut fixture = StoreFixture::new().with_current_plan(sample_document());
        run(&mut fixture.store, &["200", "200"]).unwrap();
        assert!(open_session(&fixture.store).unwrap().state().is_empty());
    }
}
