//! # Plan Session
//!
//! Everything the viewer knows about the plan on screen: the normalized
//! [`Plan`], the acquisition progress, the active filters and the current
//! page. A new session is built from scratch on every load, so nothing from a
//! previous plan can leak into the next one.
//!
//! Engine operations never fail. Storage errors are logged and the session
//! keeps working in memory.

use crate::acquisition::{AcquisitionState, Toggle};
use crate::filter::FilterState;
use crate::model::{Gift, GiftId, PlanDocument};
use crate::plan::{Page, Plan};
use crate::store::ProgressStore;

#[derive(Debug, Clone)]
pub struct PlanSession {
    plan: Plan,
    state: AcquisitionState,
    filter: FilterState,
    page: Page,
}

impl PlanSession {
    /// Builds a session for `doc`, restoring progress saved under its key.
    pub fn load<S: ProgressStore>(doc: PlanDocument, store: &S) -> Self {
        let plan = Plan::from_document(doc);
        let state = match store.load_snapshot(plan.key()) {
            Ok(Some(snapshot)) => AcquisitionState::from(snapshot),
            Ok(None) => AcquisitionState::new(),
            Err(e) => {
                log::warn!("could not read progress for {}: {}", plan.key(), e);
                AcquisitionState::new()
            }
        };
        log::info!(
            "loaded plan {} ({} gifts, {} acquired)",
            plan.key(),
            plan.all_gifts().len(),
            state.len()
        );

        Self {
            plan,
            state,
            filter: FilterState::new(),
            page: Page::Starting,
        }
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn state(&self) -> &AcquisitionState {
        &self.state
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut FilterState {
        &mut self.filter
    }

    pub fn page(&self) -> Page {
        self.page
    }

    /// Moves `delta` pages. Out-of-range moves leave the page unchanged.
    pub fn step_page(&mut self, delta: i64) -> Page {
        if let Some(page) = self.plan.step_page(self.page, delta) {
            self.page = page;
        }
        self.page
    }

    /// Toggles `id` and saves the result. Returns what happened together
    /// with the state after the toggle.
    pub fn toggle<S: ProgressStore>(
        &mut self,
        store: &mut S,
        id: GiftId,
    ) -> (Toggle, &AcquisitionState) {
        let outcome = self.state.toggle(&self.plan, id);
        if outcome != Toggle::Ignored {
            self.persist(store);
        }
        (outcome, &self.state)
    }

    /// Toggles a gift given as an id or a catalog name.
    pub fn toggle_raw<S: ProgressStore>(
        &mut self,
        store: &mut S,
        raw: &str,
    ) -> (Toggle, &AcquisitionState) {
        match self.plan.resolve(raw) {
            Some(id) => self.toggle(store, id),
            None => {
                log::debug!("toggle ignored: {:?} does not resolve to a gift", raw);
                (Toggle::Ignored, &self.state)
            }
        }
    }

    pub fn reset_all<S: ProgressStore>(&mut self, store: &mut S) -> &AcquisitionState {
        self.state.clear();
        if let Err(e) = store.remove_snapshot(self.plan.key()) {
            log::warn!("could not remove progress for {}: {}", self.plan.key(), e);
        }
        log::info!("reset progress for {}", self.plan.key());
        &self.state
    }

    pub fn visible_gifts(&self) -> impl Iterator<Item = &Gift> {
        self.filter.visible(self.plan.all_gifts())
    }

    fn persist<S: ProgressStore>(&self, store: &mut S) {
        if let Err(e) = store.save_snapshot(self.plan.key(), &self.state.to_snapshot()) {
            log::warn!("could not save progress for {}: {}", self.plan.key(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::{sample_document, StoreFixture};
    use crate::store::memory::InMemoryStore;
    use std::collections::BTreeSet;

    fn set(ids: &[GiftId]) -> BTreeSet<GiftId> {
        ids.iter().copied().collect()
    }

    #[test]
    fn load_restores_saved_progress() {
        let key = Plan::from_document(sample_document()).key().clone();
        let fixture = StoreFixture::new().with_snapshot(&key, &[1, 2, 100], &[100]);

        let session = PlanSession::load(sample_document(), &fixture.store);

        assert_eq!(session.state().acquired(), &set(&[1, 2, 100]));
        assert_eq!(session.state().manual(), &set(&[100]));
        assert_eq!(session.page(), Page::Starting);
        assert!(session.filter().is_empty());
    }

    #[test]
    fn load_ignores_progress_of_other_plans() {
        let fixture =
            StoreFixture::new().with_snapshot(&"limbus_selection_other_normal_5".into(), &[1], &[1]);
        let session = PlanSession::load(sample_document(), &fixture.store);
        assert!(session.state().is_empty());
    }

    #[test]
    fn toggle_persists_after_each_change() {
        let mut store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);

        session.toggle(&mut store, 100);

        let saved = store.load_snapshot(session.plan().key()).unwrap().unwrap();
        assert_eq!(AcquisitionState::from(saved), session.state().clone());

        let reloaded = PlanSession::load(sample_document(), &store);
        assert_eq!(reloaded.state(), session.state());
    }

    #[test]
    fn toggle_returns_the_state_after_the_change() {
        let mut store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);

        session.toggle(&mut store, 1);
        let (outcome, state) = session.toggle(&mut store, 100);
        assert_eq!(outcome, Toggle::Acquired);
        assert_eq!(state.acquired(), &set(&[1, 2, 100]));
        assert_eq!(state.manual(), &set(&[1, 100]));

        let (outcome, state) = session.toggle(&mut store, 100);
        assert_eq!(outcome, Toggle::Released);
        assert_eq!(state.acquired(), &set(&[1]));
        assert_eq!(state.manual(), &set(&[1]));

        let (outcome, state) = session.toggle(&mut store, 999);
        assert_eq!(outcome, Toggle::Ignored);
        assert_eq!(state.acquired(), &set(&[1]));
    }

    #[test]
    fn ignored_toggle_does_not_write() {
        let mut store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);

        assert_eq!(session.toggle(&mut store, 999).0, Toggle::Ignored);
        assert_eq!(session.toggle_raw(&mut store, "  ").0, Toggle::Ignored);
        assert!(store.load_snapshot(session.plan().key()).unwrap().is_none());
    }

    #[test]
    fn toggle_raw_resolves_names() {
        let mut store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);

        let (outcome, state) = session.toggle_raw(&mut store, "Forge Core");
        assert_eq!(outcome, Toggle::Acquired);
        assert_eq!(state.acquired(), &set(&[1, 2, 100]));
    }

    #[test]
    fn reset_clears_state_and_snapshot() {
        let mut store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);
        session.toggle(&mut store, 200);
        session.toggle(&mut store, 1);

        let state = session.reset_all(&mut store);
        assert!(state.is_empty());
        assert!(state.manual().is_empty());
        assert!(store.load_snapshot(session.plan().key()).unwrap().is_none());
    }

    #[test]
    fn failing_store_degrades_to_memory() {
        let mut store = InMemoryStore::failing();
        let mut session = PlanSession::load(sample_document(), &store);

        assert_eq!(session.toggle(&mut store, 100).0, Toggle::Acquired);
        assert_eq!(session.state().acquired(), &set(&[1, 2, 100]));

        session.reset_all(&mut store);
        assert!(session.state().is_empty());
    }

    #[test]
    fn reload_starts_from_clean_filter_and_page() {
        let store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);
        session.filter_mut().set_search("ember");
        session.step_page(1);

        let session = PlanSession::load(sample_document(), &store);
        assert!(session.filter().is_empty());
        assert_eq!(session.page(), Page::Starting);
    }

    #[test]
    fn step_page_clamps() {
        let store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);

        assert_eq!(session.step_page(-1), Page::Starting);
        assert_eq!(session.step_page(1), Page::Floor(0));
        assert_eq!(session.step_page(1), Page::Floor(1));
        assert_eq!(session.step_page(1), Page::Floor(1));
    }

    #[test]
    fn visible_gifts_follow_filter() {
        let store = InMemoryStore::new();
        let mut session = PlanSession::load(sample_document(), &store);
        session.filter_mut().toggle_tier("EX");

        let names: Vec<&str> = session.visible_gifts().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Forge Core"]);
    }
}
