use crate::acquisition::Progress;
use crate::config::ViewerConfig;
use crate::model::Gift;
use crate::plan::{Page, PlanKey};
use chrono::{DateTime, Utc};

pub mod config;
pub mod floor;
pub mod gifts;
pub mod helpers;
pub mod load;
pub mod order;
pub mod reset;
pub mod status;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A gift together with its acquisition flags, ready for display.
#[derive(Debug, Clone)]
pub struct GiftEntry {
    pub gift: Gift,
    pub acquired: bool,
    pub manual: bool,
    pub synthesis: bool,
}

#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub name: Option<String>,
    pub difficulty: String,
    pub description: Option<String>,
    pub key: PlanKey,
    pub floors: usize,
    pub progress: Progress,
    pub saved_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PageView {
    pub page: Page,
    pub floor_number: Option<u32>,
    pub pack_name: Option<String>,
    pub pack_image_url: Option<String>,
    pub targets: Vec<GiftEntry>,
    pub synthesis: Vec<GiftEntry>,
    pub memo: Option<String>,
    pub total_floors: usize,
}

/// One acquisition-order row; each inner list is a priority group.
#[derive(Debug, Clone)]
pub struct OrderRow {
    pub number: usize,
    pub groups: Vec<Vec<GiftEntry>>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub summary: Option<PlanSummary>,
    pub listed_gifts: Vec<GiftEntry>,
    pub page: Option<PageView>,
    pub order: Vec<OrderRow>,
    pub config: Option<ViewerConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_summary(mut self, summary: PlanSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_listed_gifts(mut self, gifts: Vec<GiftEntry>) -> Self {
        self.listed_gifts = gifts;
        self
    }

    pub fn with_page(mut self, page: PageView) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_order(mut self, order: Vec<OrderRow>) -> Self {
        self.order = order;
        self
    }

    pub fn with_config(mut self, config: ViewerConfig) -> Self {
        self.config = Some(config);
        self
    }
}
