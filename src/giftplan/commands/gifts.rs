use crate::commands::helpers::{gift_entries, open_session};
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::filter::FilterState;
use crate::store::ProgressStore;

/// Lists the catalog gifts visible under `filter`, in plan order.
pub fn run<S: ProgressStore>(store: &S, filter: FilterState) -> Result<CmdResult> {
    let mut session = open_session(store)?;
    *session.filter_mut() = filter;

    let total = session.plan().all_gifts().len();
    let entries = gift_entries(&session, session.visible_gifts());

    let mut result = CmdResult::default();
    if !session.filter().is_empty() {
        result.add_message(CmdMessage::info(format!(
            "{} of {} gifts match",
            entries.len(),
            total
        )));
    }
    Ok(result.with_listed_gifts(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::toggle;
    use crate::store::memory::fixtures::{sample_document, StoreFixture};

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_gifts
            .iter()
            .map(|e| e.gift.name.as_str())
            .collect()
    }

    #[test]
    fn unfiltered_lists_whole_catalog() {
        let fixture = StoreFixture::new().with_current_plan(sample_document());
        let result = run(&fixture.store, FilterState::new()).unwrap();
        assert_eq!(result.listed_gifts.len(), 5);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn filters_combine() {
        let fixture = StoreFixture::new().with_current_plan(sample_document());

        let result = run(
            &fixture.store,
            FilterState::new().with_keyword("화상").with_tier("EX"),
        )
        .unwrap();
        assert_eq!(names(&result), vec!["Forge Core"]);

        let result = run(&fixture.store, FilterState::new().with_search("ember")).unwrap();
        assert_eq!(names(&result), vec!["Ember Heart"]);
    }

    #[test]
    fn entries_reflect_progress() {
        let mut fixture = StoreFixture::new().with_current_plan(sample_document());
        toggle::run(&mut fixture.store, &["Ember Heart"]).unwrap();

        let result = run(&fixture.store, FilterState::new().with_keyword("화상")).unwrap();
        let acquired: Vec<bool> = result.listed_gifts.iter().map(|e| e.acquired).collect();
        assert_eq!(acquired, vec![true, false, false]);
    }
}
