//! # Plan Model
//!
//! A [`Plan`] is the normalized, read-only form of a [`PlanDocument`]. It is
//! built once per load and never mutated afterwards; acquisition progress
//! lives in [`crate::acquisition::AcquisitionState`] instead.
//!
//! Normalization does three things:
//! - fills in defaults for every missing field, so nothing downstream deals
//!   with absent collections
//! - indexes synthesis gifts and their ingredient lists
//! - derives the [`PlanKey`] progress is stored under

use crate::model::{AcquisitionStep, Floor, Gift, GiftId, PlanDocument};
use std::collections::{HashMap, HashSet};
use std::fmt;

const KEY_PREFIX: &str = "limbus_selection";
const DEFAULT_NAME: &str = "unnamed";
const DEFAULT_DIFFICULTY: &str = "normal";

/// Storage key for a plan's progress.
///
/// Derived from the plan's name, difficulty and catalog size. Two plans that
/// agree on all three share a key and therefore share progress.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlanKey(String);

impl PlanKey {
    pub fn new(name: &str, difficulty: &str, gift_count: usize) -> Self {
        Self(format!(
            "{}_{}_{}_{}",
            KEY_PREFIX,
            sanitize_name(name),
            difficulty,
            gift_count
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlanKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlanKey {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ('가'..='힣').contains(&c)
}

// Keys written by the desktop viewer replaced each UTF-16 unit, so characters
// outside the BMP become two underscores.
fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if is_key_char(c) {
            out.push(c);
        } else {
            for _ in 0..c.len_utf16() {
                out.push('_');
            }
        }
    }
    out
}

/// A viewer page: the starting gifts, or one floor (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Starting,
    Floor(usize),
}

impl Page {
    fn ordinal(self) -> i64 {
        match self {
            Page::Starting => -1,
            Page::Floor(i) => i as i64,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Plan {
    name: Option<String>,
    difficulty: Option<String>,
    description: Option<String>,
    floors: Vec<Floor>,
    starting_gifts: Vec<Gift>,
    general_gifts: Vec<Gift>,
    all_gifts: Vec<Gift>,
    acquisition_order: Vec<AcquisitionStep>,
    synthesis_ids: HashSet<GiftId>,
    ingredients: HashMap<GiftId, Vec<GiftId>>,
    key: PlanKey,
}

impl Plan {
    pub fn from_document(doc: PlanDocument) -> Self {
        let ingredients = build_ingredient_map(&doc);
        let key = PlanKey::new(
            doc.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(DEFAULT_NAME),
            doc.difficulty
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(DEFAULT_DIFFICULTY),
            doc.all_gifts.len(),
        );

        let synthesis_ids = doc.synthesis_ids.iter().copied().collect();

        Self {
            name: doc.name,
            difficulty: doc.difficulty,
            description: doc.description,
            floors: doc.floor_targets,
            starting_gifts: doc.starting_gifts,
            general_gifts: doc.general_gifts,
            all_gifts: doc.all_gifts,
            acquisition_order: doc.acquisition_order,
            synthesis_ids,
            ingredients,
            key,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn difficulty(&self) -> &str {
        self.difficulty
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DIFFICULTY)
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn starting_gifts(&self) -> &[Gift] {
        &self.starting_gifts
    }

    pub fn all_gifts(&self) -> &[Gift] {
        &self.all_gifts
    }

    pub fn acquisition_order(&self) -> &[AcquisitionStep] {
        &self.acquisition_order
    }

    pub fn key(&self) -> &PlanKey {
        &self.key
    }

    pub fn is_synthesis(&self, id: GiftId) -> bool {
        self.synthesis_ids.contains(&id)
    }

    pub fn ingredients(&self, id: GiftId) -> &[GiftId] {
        self.ingredients.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    fn every_gift(&self) -> impl Iterator<Item = &Gift> {
        self.all_gifts
            .iter()
            .chain(self.starting_gifts.iter())
            .chain(self.general_gifts.iter())
            .chain(
                self.floors
                    .iter()
                    .flat_map(|f| f.gifts.iter().chain(f.synthesis_gifts.iter())),
            )
    }

    /// True when `id` names anything in this plan.
    pub fn contains(&self, id: GiftId) -> bool {
        self.synthesis_ids.contains(&id)
            || self.ingredients.contains_key(&id)
            || self.ingredients.values().any(|ids| ids.contains(&id))
            || self.every_gift().any(|g| g.id == Some(id))
    }

    pub fn gift(&self, id: GiftId) -> Option<&Gift> {
        self.every_gift().find(|g| g.id == Some(id))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Gift> {
        self.all_gifts.iter().find(|g| g.name == name)
    }

    /// Resolves user input to a gift id: a numeric id known to the plan, or
    /// the exact name of a catalog gift.
    pub fn resolve(&self, raw: &str) -> Option<GiftId> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Ok(id) = raw.parse::<GiftId>() {
            return self.contains(id).then_some(id);
        }
        self.find_by_name(raw).and_then(|g| g.id)
    }

    /// Id of an acquisition-order entry. Entries without an id are matched
    /// against the catalog by name.
    pub fn order_entry_id(&self, entry: &Gift) -> Option<GiftId> {
        entry
            .id
            .or_else(|| self.find_by_name(&entry.name).and_then(|g| g.id))
    }

    pub fn floor(&self, page: Page) -> Option<&Floor> {
        match page {
            Page::Starting => None,
            Page::Floor(i) => self.floors.get(i),
        }
    }

    /// Moves `delta` pages from `page`, or `None` if that leaves the plan.
    pub fn step_page(&self, page: Page, delta: i64) -> Option<Page> {
        let next = page.ordinal() + delta;
        if next < -1 || next >= self.floors.len() as i64 {
            return None;
        }
        Some(if next == -1 {
            Page::Starting
        } else {
            Page::Floor(next as usize)
        })
    }
}

fn build_ingredient_map(doc: &PlanDocument) -> HashMap<GiftId, Vec<GiftId>> {
    let floor_synthesis = doc.floor_targets.iter().flat_map(|f| f.synthesis_gifts.iter());
    let mut map = HashMap::new();
    for gift in floor_synthesis.chain(doc.general_gifts.iter()) {
        if let Some(id) = gift.id {
            if !gift.ingredients.is_empty() {
                map.insert(id, gift.ingredients.clone());
            }
        }
    }
    log::debug!("built ingredient map with {} synthesis entries", map.len());
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_document;

    #[test]
    fn key_is_derived_from_name_difficulty_and_count() {
        let plan = Plan::from_document(sample_document());
        assert_eq!(plan.key().as_str(), "limbus_selection_화상_덱_hard_5");
    }

    #[test]
    fn key_defaults_missing_fields() {
        let plan = Plan::from_document(PlanDocument::default());
        assert_eq!(plan.key().as_str(), "limbus_selection_unnamed_normal_0");
    }

    #[test]
    fn key_sanitizes_per_utf16_unit() {
        assert_eq!(
            PlanKey::new("A b-😀", "normal", 2).as_str(),
            "limbus_selection_A_b____normal_2"
        );
    }

    #[test]
    fn plans_with_same_identity_collide() {
        let mut other = sample_document();
        other.description = Some("different".into());
        other.all_gifts.reverse();
        assert_eq!(
            Plan::from_document(sample_document()).key(),
            Plan::from_document(other).key()
        );
    }

    #[test]
    fn ingredient_map_reads_floors_and_general_gifts() {
        let plan = Plan::from_document(sample_document());
        assert_eq!(plan.ingredients(100), &[1, 2]);
        assert_eq!(plan.ingredients(200), &[3, 100]);
        assert!(plan.ingredients(1).is_empty());
    }

    #[test]
    fn ingredient_map_later_source_overwrites() {
        let mut doc = sample_document();
        doc.general_gifts
            .push(Gift::new(100, "Dup").with_ingredients(vec![7]));
        let plan = Plan::from_document(doc);
        assert_eq!(plan.ingredients(100), &[7]);
    }

    #[test]
    fn resolve_by_id_and_name() {
        let plan = Plan::from_document(sample_document());
        assert_eq!(plan.resolve(" 1 "), Some(1));
        assert_eq!(plan.resolve("Ember Heart"), Some(1));
        assert_eq!(plan.resolve("999"), None);
        assert_eq!(plan.resolve(""), None);
        assert_eq!(plan.resolve("nope"), None);
    }

    #[test]
    fn order_entries_without_id_match_by_name() {
        let plan = Plan::from_document(sample_document());
        let entry = Gift {
            name: "Ember Heart".into(),
            ..Gift::default()
        };
        assert_eq!(plan.order_entry_id(&entry), Some(1));
    }

    #[test]
    fn paging_stays_within_bounds() {
        let plan = Plan::from_document(sample_document());
        assert_eq!(plan.floors().len(), 2);
        assert_eq!(plan.step_page(Page::Starting, -1), None);
        assert_eq!(plan.step_page(Page::Starting, 1), Some(Page::Floor(0)));
        assert_eq!(plan.step_page(Page::Floor(0), -1), Some(Page::Starting));
        assert_eq!(plan.step_page(Page::Floor(1), 1), None);
    }
}
