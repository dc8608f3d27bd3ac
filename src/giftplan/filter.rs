use crate::model::Gift;
use std::collections::BTreeSet;

/// Visibility filter over the gift catalog.
///
/// Categories combine with AND; values within a category combine with OR.
/// An empty category does not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub keywords: BTreeSet<String>,
    pub tiers: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.insert(keyword.into());
        self
    }

    pub fn with_tier(mut self, tier: impl Into<String>) -> Self {
        self.tiers.insert(tier.into());
        self
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Flips a keyword filter on or off. Returns whether it is now active.
    pub fn toggle_keyword(&mut self, keyword: &str) -> bool {
        flip(&mut self.keywords, keyword)
    }

    /// Flips a tier filter on or off. Returns whether it is now active.
    pub fn toggle_tier(&mut self, tier: &str) -> bool {
        flip(&mut self.tiers, tier)
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.keywords.clear();
        self.tiers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.keywords.is_empty() && self.tiers.is_empty()
    }

    pub fn is_visible(&self, gift: &Gift) -> bool {
        self.matches_search(gift) && self.matches_keywords(gift) && self.matches_tiers(gift)
    }

    pub fn visible<'a, I>(&'a self, gifts: I) -> impl Iterator<Item = &'a Gift> + 'a
    where
        I: IntoIterator<Item = &'a Gift>,
        I::IntoIter: 'a,
    {
        gifts.into_iter().filter(move |g| self.is_visible(g))
    }

    fn matches_search(&self, gift: &Gift) -> bool {
        self.search.is_empty()
            || gift
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    fn matches_keywords(&self, gift: &Gift) -> bool {
        self.keywords.is_empty() || gift.keywords().iter().any(|k| self.keywords.contains(*k))
    }

    // Tier filters may have been stored as `EX` or `ex`; accept either the raw
    // label or its canonical form.
    fn matches_tiers(&self, gift: &Gift) -> bool {
        if self.tiers.is_empty() {
            return true;
        }
        match &gift.tier {
            Some(tier) => self.tiers.contains(tier.raw()) || self.tiers.contains(&tier.canonical()),
            None => false,
        }
    }
}

fn flip(set: &mut BTreeSet<String>, value: &str) -> bool {
    if set.remove(value) {
        false
    } else {
        set.insert(value.to_string());
        true
    }
}
