//! # CLI Behavior
//!
//! This is **one possible UI client** for giftplan. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the library documentation.
//!
//! ## Loading plans
//!
//! `giftplan load` accepts a plan in any form the planner hands out:
//!
//! 1. **Argument**: `giftplan load 'LIMBUS_PLAN:...'` or a `limbus-planner://` link
//! 2. **File**: `giftplan load --file plan.json`
//! 3. **Clipboard**: `giftplan load --clipboard`. The clipboard is emptied
//!    afterwards unless `clear-clipboard` is turned off.
//!
//! With none of these, piped stdin is read.
//!
//! ## Naked Execution (`giftplan`)
//!
//! Running `giftplan` with no subcommand prints the status of the current plan.
//!
//! ## Module Structure
//!
//! - `setup`: Argument parsing via clap
//! - `commands`: Context wiring and per-command handlers
//! - `print`: Output formatting (gift lines, pages, progress)
//! - `styles`: Terminal styling constants

mod commands;
mod print;
mod setup;
mod styles;

pub use commands::run;
