use super::ProgressStore;
use crate::acquisition::Snapshot;
use crate::error::{GiftPlanError, Result};
use crate::model::PlanDocument;
use crate::plan::PlanKey;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    snapshots: HashMap<PlanKey, Snapshot>,
    current_plan: Option<PlanDocument>,
    failing: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, for exercising degraded paths.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            return Err(GiftPlanError::Store("store unavailable".to_string()));
        }
        Ok(())
    }
}

impl ProgressStore for InMemoryStore {
    fn load_snapshot(&self, key: &PlanKey) -> Result<Option<Snapshot>> {
        self.check()?;
        Ok(self.snapshots.get(key).cloned())
    }

    fn save_snapshot(&mut self, key: &PlanKey, snapshot: &Snapshot) -> Result<()> {
        self.check()?;
        self.snapshots.insert(key.clone(), snapshot.clone());
        Ok(())
    }

    fn remove_snapshot(&mut self, key: &PlanKey) -> Result<()> {
        self.check()?;
        self.snapshots.remove(key);
        Ok(())
    }

    fn load_current_plan(&self) -> Result<Option<PlanDocument>> {
        self.check()?;
        Ok(self.current_plan.clone())
    }

    fn save_current_plan(&mut self, doc: &PlanDocument) -> Result<()> {
        self.check()?;
        self.current_plan = Some(doc.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{AcquisitionStep, Floor, Gift};

    /// A two-floor plan with five catalog gifts:
    ///
    /// - 1 Ember Heart, 2 Cinder Shard, 3 Tremor Bell: plain gifts
    /// - 100 Forge Core: synthesis of 1 + 2 (floor 1)
    /// - 200 Grand Forge: synthesis of 3 + 100 (general gifts)
    pub fn sample_document() -> PlanDocument {
        let ember = Gift::new(1, "Ember Heart").with_tier("3").with_keyword("화상");
        let cinder = Gift::new(2, "Cinder Shard").with_tier("2").with_keyword("화상");
        let tremor = Gift::new(3, "Tremor Bell").with_tier("1").with_keyword("진동");
        let forge = Gift::new(100, "Forge Core")
            .with_tier("ex")
            .with_keyword("화상")
            .with_ingredients(vec![1, 2]);
        let grand = Gift::new(200, "Grand Forge")
            .with_tier("4")
            .with_ingredients(vec![3, 100]);

        PlanDocument {
            name: Some("화상 덱".to_string()),
            difficulty: Some("hard".to_string()),
            description: Some("Burn first, forge later.".to_string()),
            floor_targets: vec![
                Floor {
                    number: 1,
                    pack_name: Some("Fire Pack".to_string()),
                    gifts: vec![ember.clone(), cinder.clone()],
                    synthesis_gifts: vec![forge.clone()],
                    memo: Some("Buy the shard first".to_string()),
                    ..Floor::default()
                },
                Floor {
                    number: 2,
                    gifts: vec![tremor.clone()],
                    ..Floor::default()
                },
            ],
            starting_gifts: vec![cinder.clone()],
            general_gifts: vec![grand.clone()],
            all_gifts: vec![ember.clone(), cinder, tremor, forge, grand],
            synthesis_ids: vec![100, 200],
            acquisition_order: vec![AcquisitionStep {
                priorities: vec![
                    vec![
                        ember,
                        Gift {
                            name: "Cinder Shard".to_string(),
                            keyword: Some("화상".to_string()),
                            ..Gift::default()
                        },
                    ],
                    vec![Gift::new(100, "Forge Core")],
                ],
            }],
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_current_plan(mut self, doc: PlanDocument) -> Self {
            self.store.save_current_plan(&doc).unwrap();
            self
        }

        pub fn with_snapshot(mut self, key: &PlanKey, acquired: &[u32], manual: &[u32]) -> Self {
            let snapshot = Snapshot {
                acquired: acquired.to_vec(),
                manual: manual.to_vec(),
                saved_at: None,
            };
            self.store.save_snapshot(key, &snapshot).unwrap();
            self
        }
    }
}
