use console::Style;
use giftplan::model::Tier;
use once_cell::sync::Lazy;

static TIER_LOW: Lazy<Style> = Lazy::new(|| Style::new().color256(250));
static TIER_MID: Lazy<Style> = Lazy::new(|| Style::new().cyan());
static TIER_HIGH: Lazy<Style> = Lazy::new(|| Style::new().magenta().bold());
static TIER_EX: Lazy<Style> = Lazy::new(|| Style::new().yellow().bold());
static TIER_UNKNOWN: Lazy<Style> = Lazy::new(|| Style::new().dim());

pub static ACQUIRED: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static KEYWORD: Lazy<Style> = Lazy::new(|| Style::new().color256(180));
pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold().underlined());

pub fn tier_style(tier: Option<&Tier>) -> &'static Style {
    match tier {
        Some(t) if t.is_ex() => &*TIER_EX,
        Some(t) => match t.raw() {
            "1" | "2" => &*TIER_LOW,
            "3" => &*TIER_MID,
            "4" | "5" => &*TIER_HIGH,
            _ => &*TIER_UNKNOWN,
        },
        None => &*TIER_UNKNOWN,
    }
}
