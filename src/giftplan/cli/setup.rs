use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "giftplan", bin_name = "giftplan", version)]
#[command(about = "Follow a gift plan while you play", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory for progress, the current plan and config
    #[arg(long, global = true, env = "GIFTPLAN_HOME", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a plan and make it the current one
    Load {
        /// Clipboard payload, planner link or plan JSON
        #[arg(conflicts_with_all = ["file", "clipboard"])]
        text: Option<String>,

        /// Read the plan from a file
        #[arg(short, long, conflicts_with = "clipboard")]
        file: Option<PathBuf>,

        /// Read the plan from the system clipboard
        #[arg(short, long)]
        clipboard: bool,
    },

    /// Mark gifts as acquired, or release them
    #[command(alias = "t")]
    Toggle {
        /// Gift ids or names
        #[arg(required = true, num_args = 1..)]
        targets: Vec<String>,
    },

    /// Clear all progress for the current plan
    Reset {
        /// Skip the confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// List the plan's gifts
    #[command(alias = "ls")]
    Gifts {
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,

        /// Keep gifts with any of these keywords
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Keep gifts with any of these tiers (1-5, EX)
        #[arg(short, long = "tier")]
        tiers: Vec<String>,
    },

    /// Show a floor page (`start` for the starting gifts)
    #[command(alias = "f")]
    Floor {
        #[arg(default_value = "start")]
        page: String,
    },

    /// Show the acquisition order
    Order,

    /// Show the current plan and progress
    Status,

    /// Get or set configuration
    Config {
        /// Configuration key (image-base-url, view-mode, clear-clipboard)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the version, optionally comparing it with a release tag
    Version {
        /// Latest published release (e.g. v0.4.0)
        latest: Option<String>,
    },
}
