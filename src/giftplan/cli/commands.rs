//! # CLI Layer
//!
//! The only place that reads the terminal, the clipboard and stdin, and the
//! only place that prints. Everything else goes through [`GiftPlanApi`].
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API and configuration
//! - `handle_*()`: Per-command handlers that call API and format output

use super::print::{
    print_config, print_gifts, print_messages, print_order, print_page, print_summary,
    GiftDisplay,
};
use super::setup::{Cli, Commands};
use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use giftplan::api::{ConfigAction, GiftPlanApi};
use giftplan::clipboard::{clear_clipboard, looks_like_plan, read_clipboard};
use giftplan::config::ViewerConfig;
use giftplan::error::{GiftPlanError, Result};
use giftplan::filter::FilterState;
use giftplan::store::fs::FileStore;
use giftplan::version::is_newer_version;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

struct AppContext {
    api: GiftPlanApi<FileStore>,
    config: ViewerConfig,
}

impl AppContext {
    fn display(&self) -> GiftDisplay<'_> {
        GiftDisplay {
            mode: self.config.view_mode,
            assets: self.api.assets(),
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Load {
            text,
            file,
            clipboard,
        }) => handle_load(&mut ctx, text, file, clipboard),
        Some(Commands::Toggle { targets }) => handle_toggle(&mut ctx, targets),
        Some(Commands::Reset { yes }) => handle_reset(&mut ctx, yes),
        Some(Commands::Gifts {
            search,
            keywords,
            tiers,
        }) => handle_gifts(&ctx, search, keywords, tiers),
        Some(Commands::Floor { page }) => handle_floor(&ctx, &page),
        Some(Commands::Order) => handle_order(&ctx),
        Some(Commands::Status) | None => handle_status(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Version { latest }) => handle_version(latest),
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "giftplan", "giftplan")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| GiftPlanError::Api("Could not determine data directory".into()))?,
    };
    log::debug!("data directory: {}", data_dir.display());

    let config = ViewerConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config: {}", e);
        ViewerConfig::default()
    });

    let store = FileStore::new(data_dir.clone());
    let api = GiftPlanApi::new(store, data_dir)
        .with_assets(giftplan::assets::AssetUrls::new(&config.image_base_url));

    Ok(AppContext { api, config })
}

fn handle_load(
    ctx: &mut AppContext,
    text: Option<String>,
    file: Option<PathBuf>,
    clipboard: bool,
) -> Result<()> {
    let text = if clipboard {
        let content = read_clipboard()?;
        if !looks_like_plan(&content) {
            return Err(GiftPlanError::Api(
                "The clipboard does not contain a plan".into(),
            ));
        }
        content
    } else if let Some(path) = file {
        std::fs::read_to_string(&path)?
    } else if let Some(text) = text {
        text
    } else if !std::io::stdin().is_terminal() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        return Err(GiftPlanError::Api(
            "Nothing to load: pass a plan, --file or --clipboard".into(),
        ));
    };

    let result = ctx.api.load_plan(&text)?;

    if clipboard && ctx.config.clear_clipboard_after_import {
        if let Err(e) = clear_clipboard() {
            log::warn!("could not clear the clipboard: {}", e);
        }
    }

    print_messages(&result.messages);
    if let Some(summary) = &result.summary {
        println!();
        print_summary(summary);
    }
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, targets: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle(&targets)?;
    print_messages(&result.messages);
    if let Some(summary) = &result.summary {
        let progress = summary.progress;
        println!(
            "{}",
            format!("{}/{} acquired", progress.acquired, progress.total).dimmed()
        );
    }
    Ok(())
}

fn handle_reset(ctx: &mut AppContext, yes: bool) -> Result<()> {
    if !yes {
        let status = ctx.api.status()?;
        if let Some(summary) = &status.summary {
            println!(
                "{}",
                format!(
                    "This clears {} acquired gifts for {}. Re-run with --yes to confirm.",
                    summary.progress.acquired,
                    summary.name.as_deref().unwrap_or("the current plan")
                )
                .yellow()
            );
        }
        return Ok(());
    }

    let result = ctx.api.reset_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_gifts(
    ctx: &AppContext,
    search: Option<String>,
    keywords: Vec<String>,
    tiers: Vec<String>,
) -> Result<()> {
    let mut filter = FilterState::new();
    if let Some(search) = search {
        filter.set_search(search);
    }
    for keyword in keywords {
        filter = filter.with_keyword(keyword);
    }
    // filter values are the labels the planner shows: 1-5 and EX
    for tier in tiers {
        filter = filter.with_tier(tier.to_uppercase());
    }

    let result = ctx.api.gifts(filter)?;
    print_gifts(&result.listed_gifts, &ctx.display());
    print_messages(&result.messages);
    Ok(())
}

fn handle_floor(ctx: &AppContext, page: &str) -> Result<()> {
    let result = ctx.api.floor(page)?;
    if let Some(view) = &result.page {
        print_page(view, &ctx.display());
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_order(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.order()?;
    print_order(&result.order);
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.status()?;
    if let Some(summary) = &result.summary {
        print_summary(summary);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    print_messages(&result.messages);
    if let Some(config) = &result.config {
        print_config(config);
    }
    Ok(())
}

fn handle_version(latest: Option<String>) -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("giftplan {}", current);
    if let Some(latest) = latest {
        if is_newer_version(&latest, current) {
            println!("{}", format!("Version {} is available", latest).yellow());
        } else {
            println!("{}", "Up to date".green());
        }
    }
    Ok(())
}
