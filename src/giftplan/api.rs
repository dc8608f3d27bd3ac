//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Every client
//! (the CLI here) goes through it.
//!
//! It dispatches to `commands/*.rs`, turns loose user input (page numbers,
//! filter flags) into typed values, and returns `Result<CmdResult>`. It does
//! not print, and it holds no plan state of its own: each call rebuilds the
//! session for the current plan from the store.
//!
//! ## Generic Over ProgressStore
//!
//! - Production: `GiftPlanApi<FileStore>`
//! - Testing: `GiftPlanApi<InMemoryStore>`

use crate::assets::AssetUrls;
use crate::commands;
use crate::error::{GiftPlanError, Result};
use crate::filter::FilterState;
use crate::plan::Page;
use crate::store::ProgressStore;
use std::path::PathBuf;

pub struct GiftPlanApi<S: ProgressStore> {
    store: S,
    data_dir: PathBuf,
    assets: AssetUrls,
}

impl<S: ProgressStore> GiftPlanApi<S> {
    pub fn new(store: S, data_dir: PathBuf) -> Self {
        Self {
            store,
            data_dir,
            assets: AssetUrls::default(),
        }
    }

    pub fn with_assets(mut self, assets: AssetUrls) -> Self {
        self.assets = assets;
        self
    }

    pub fn load_plan(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.store, text)
    }

    pub fn toggle<I: AsRef<str>>(&mut self, targets: &[I]) -> Result<commands::CmdResult> {
        commands::toggle::run(&mut self.store, targets)
    }

    pub fn reset_all(&mut self) -> Result<commands::CmdResult> {
        commands::reset::run(&mut self.store)
    }

    pub fn gifts(&self, filter: FilterState) -> Result<commands::CmdResult> {
        commands::gifts::run(&self.store, filter)
    }

    pub fn floor(&self, page: &str) -> Result<commands::CmdResult> {
        let page = parse_page(page)?;
        commands::floor::run(&self.store, page, &self.assets)
    }

    pub fn order(&self) -> Result<commands::CmdResult> {
        commands::order::run(&self.store)
    }

    pub fn status(&self) -> Result<commands::CmdResult> {
        commands::status::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn assets(&self) -> &AssetUrls {
        &self.assets
    }
}

/// `start` (or `0`) is the starting-gifts page; `N` is the N-th floor.
pub fn parse_page(input: &str) -> Result<Page> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("start") {
        return Ok(Page::Starting);
    }
    match input.parse::<usize>() {
        Ok(0) => Ok(Page::Starting),
        Ok(n) => Ok(Page::Floor(n - 1)),
        Err(_) => Err(GiftPlanError::Api(format!(
            "Invalid page: {} (use `start` or a floor number)",
            input
        ))),
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    CmdMessage, CmdResult, GiftEntry, MessageLevel, OrderRow, PageView, PlanSummary,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::sample_document;
    use crate::store::memory::InMemoryStore;

    fn api() -> GiftPlanApi<InMemoryStore> {
        let dir = std::env::temp_dir().join("giftplan_api_test_unused");
        GiftPlanApi::new(InMemoryStore::new(), dir)
    }

    #[test]
    fn parses_pages() {
        assert_eq!(parse_page("start").unwrap(), Page::Starting);
        assert_eq!(parse_page("0").unwrap(), Page::Starting);
        assert_eq!(parse_page("00").unwrap(), Page::Starting);
        assert_eq!(parse_page("+0").unwrap(), Page::Starting);
        assert_eq!(parse_page("+2").unwrap(), Page::Floor(1));
        assert_eq!(parse_page("2").unwrap(), Page::Floor(1));
        assert!(parse_page("two").is_err());
    }

    #[test]
    fn commands_need_a_loaded_plan() {
        let api = api();
        assert!(matches!(api.status(), Err(GiftPlanError::NoPlan)));
        assert!(matches!(api.order(), Err(GiftPlanError::NoPlan)));
    }

    #[test]
    fn load_then_toggle_then_list() {
        let mut api = api();
        let json = serde_json::to_string(&sample_document()).unwrap();
        api.load_plan(&json).unwrap();

        api.toggle(&["Forge Core"]).unwrap();
        let listed = api.gifts(FilterState::new()).unwrap().listed_gifts;
        assert_eq!(listed.iter().filter(|e| e.acquired).count(), 3);

        let floor = api.floor("1").unwrap().page.unwrap();
        assert!(floor.targets.iter().all(|e| e.acquired));

        api.reset_all().unwrap();
        assert_eq!(api.status().unwrap().summary.unwrap().progress.acquired, 0);
    }
}
