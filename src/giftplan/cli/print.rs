use super::styles::{tier_style, ACQUIRED, HEADING, KEYWORD};
use chrono::{DateTime, Utc};
use colored::Colorize;
use giftplan::api::{CmdMessage, GiftEntry, MessageLevel, OrderRow, PageView, PlanSummary};
use giftplan::assets::AssetUrls;
use giftplan::config::{ViewMode, ViewerConfig};
use giftplan::plan::Page;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_LINE_WIDTH: usize = 100;
const TIER_WIDTH: usize = 4;
const BAR_WIDTH: usize = 20;
const MANUAL_MARKER: &str = "✓";
const DERIVED_MARKER: &str = "+";

/// How gift lines are rendered for this invocation.
pub(super) struct GiftDisplay<'a> {
    pub mode: ViewMode,
    pub assets: &'a AssetUrls,
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_gifts(entries: &[GiftEntry], display: &GiftDisplay) {
    if entries.is_empty() {
        println!("No gifts found.");
        return;
    }
    let width = line_width();
    for entry in entries {
        println!("{}", format_gift_line(entry, display, width));
        if display.mode == ViewMode::Both {
            if let Some(url) = image_url(entry, display.assets) {
                println!("{}{}", " ".repeat(TIER_WIDTH + 7), url.dimmed());
            }
        }
    }
}

pub(super) fn print_page(view: &PageView, display: &GiftDisplay) {
    let title = match view.page {
        Page::Starting => "Starting gifts".to_string(),
        Page::Floor(index) => {
            let number = view.floor_number.unwrap_or(index as u32 + 1);
            match &view.pack_name {
                Some(pack) => format!("Floor {} · {}", number, pack),
                None => format!("Floor {}", number),
            }
        }
    };
    let position = match view.page {
        Page::Starting => format!("start/{}", view.total_floors),
        Page::Floor(index) => format!("{}/{}", index + 1, view.total_floors),
    };
    println!("{}  {}", HEADING.apply_to(title), position.dimmed());
    if display.mode != ViewMode::Name {
        if let Some(url) = &view.pack_image_url {
            println!("{}", url.dimmed());
        }
    }

    println!();
    print_gifts(&view.targets, display);

    if !view.synthesis.is_empty() {
        println!();
        println!("{}", "Synthesis".bold());
        print_gifts(&view.synthesis, display);
    }

    if let Some(memo) = &view.memo {
        println!();
        println!("{} {}", "Memo:".bold(), memo);
    }
}

pub(super) fn print_order(rows: &[OrderRow]) {
    for row in rows {
        let groups: Vec<String> = row
            .groups
            .iter()
            .map(|group| {
                let names: Vec<String> = group.iter().map(order_name).collect();
                format!("[{}]", names.join(", "))
            })
            .collect();
        println!(
            "{:>3}. {}",
            row.number.to_string().yellow(),
            groups.join(" → ")
        );
    }
}

fn order_name(entry: &GiftEntry) -> String {
    if entry.acquired {
        ACQUIRED.apply_to(format!("{} {}", MANUAL_MARKER, entry.gift.name)).to_string()
    } else {
        entry.gift.name.clone()
    }
}

pub(super) fn print_summary(summary: &PlanSummary) {
    let name = summary.name.as_deref().unwrap_or("(unnamed plan)");
    println!(
        "{} {}",
        HEADING.apply_to(name),
        format!("({})", summary.difficulty).dimmed()
    );
    if let Some(description) = summary.description.as_deref().filter(|d| !d.is_empty()) {
        println!("{}", description);
    }

    let progress = summary.progress;
    println!(
        "{}  {}/{} acquired  {}",
        progress_bar(progress.acquired, progress.total),
        progress.acquired,
        progress.total,
        format!("{} floors", summary.floors).dimmed()
    );
    if let Some(saved_at) = summary.saved_at {
        println!("{}", format!("Saved {}", format_time_ago(saved_at)).dimmed());
    }
}

pub(super) fn print_config(config: &ViewerConfig) {
    for key in ViewerConfig::KEYS {
        if let Ok(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn image_url(entry: &GiftEntry, assets: &AssetUrls) -> Option<String> {
    entry
        .gift
        .image
        .as_deref()
        .and_then(|image| assets.gift_image(image))
}

fn format_gift_line(entry: &GiftEntry, display: &GiftDisplay, width: usize) -> String {
    let marker = match (entry.acquired, entry.manual) {
        (true, true) => ACQUIRED.apply_to(MANUAL_MARKER).to_string(),
        (true, false) => ACQUIRED.apply_to(DERIVED_MARKER).to_string(),
        (false, _) => " ".to_string(),
    };

    let tier = entry.gift.tier.as_ref();
    let numeral = tier.map(|t| t.numeral()).unwrap_or("-");
    let tier_text = format!("{:>w$}", numeral, w = TIER_WIDTH);
    let tier_colored = tier_style(tier).apply_to(tier_text);

    let id = entry
        .gift
        .id
        .map(|id| format!("#{}", id))
        .unwrap_or_default();
    let keywords = entry.gift.keywords().join(" ");
    let synthesis = if entry.synthesis { " ⚗" } else { "" };

    let label = match display.mode {
        ViewMode::Image => image_url(entry, display.assets).unwrap_or_else(|| entry.gift.name.clone()),
        ViewMode::Both | ViewMode::Name => entry.gift.name.clone(),
    };

    // "  [x] " + tier + " " ... then keywords and id on the right
    let fixed = 6 + TIER_WIDTH + 1 + synthesis.width() + 2 + keywords.width() + 2 + id.width();
    let available = width.saturating_sub(fixed).max(8);
    let label = truncate_to_width(&label, available);
    let padding = available.saturating_sub(label.width());

    format!(
        "  [{}] {} {}{}{}  {}  {}",
        marker,
        tier_colored,
        label,
        synthesis,
        " ".repeat(padding),
        KEYWORD.apply_to(keywords),
        id.dimmed()
    )
}

fn progress_bar(acquired: usize, total: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        (acquired * BAR_WIDTH / total).min(BAR_WIDTH)
    };
    format!(
        "{}{}",
        "█".repeat(filled).green(),
        "░".repeat(BAR_WIDTH - filled).dimmed()
    )
}

fn line_width() -> usize {
    console::Term::stdout()
        .size_checked()
        .map(|(_, cols)| cols as usize)
        .unwrap_or(MAX_LINE_WIDTH)
        .min(MAX_LINE_WIDTH)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use giftplan::model::Gift;

    fn entry(gift: Gift, acquired: bool, manual: bool) -> GiftEntry {
        GiftEntry {
            gift,
            acquired,
            manual,
            synthesis: false,
        }
    }

    #[test]
    fn truncates_by_display_width() {
        assert_eq!(truncate_to_width("Ember Heart", 20), "Ember Heart");
        // Hangul syllables are two columns wide
        assert_eq!(truncate_to_width("화상화상화상", 5), "화상…");
    }

    #[test]
    fn progress_bar_is_empty_for_empty_plans() {
        colored::control::set_override(false);
        assert_eq!(progress_bar(0, 0), "░".repeat(BAR_WIDTH));
        assert_eq!(progress_bar(5, 5), "█".repeat(BAR_WIDTH));
        colored::control::unset_override();
    }

    #[test]
    fn gift_line_shows_tier_name_and_markers() {
        let assets = AssetUrls::default();
        let display = GiftDisplay {
            mode: ViewMode::Name,
            assets: &assets,
        };
        let gift = Gift::new(1, "Ember Heart")
            .with_tier("3")
            .with_keyword("화상");

        let line = format_gift_line(&entry(gift.clone(), true, true), &display, 80);
        assert!(line.contains("III"));
        assert!(line.contains("Ember Heart"));
        assert!(line.contains("화상"));
        assert!(line.contains(MANUAL_MARKER));

        let line = format_gift_line(&entry(gift, true, false), &display, 80);
        assert!(line.contains(DERIVED_MARKER));
        assert!(!line.contains(MANUAL_MARKER));
    }

    #[test]
    fn image_mode_shows_image_url() {
        let assets = AssetUrls::default();
        let display = GiftDisplay {
            mode: ViewMode::Image,
            assets: &assets,
        };
        let mut gift = Gift::new(1, "Ember");
        gift.image = Some("ember.webp".into());

        let line = format_gift_line(&entry(gift, false, false), &display, 200);
        assert!(line.contains("ember.webp"));
        assert!(!line.contains("Ember "));
    }
}
