//! # Giftplan Architecture
//!
//! Giftplan is a **UI-agnostic plan companion library**: it takes a plan from
//! the planner (floors of gifts to collect), tracks which gifts have been
//! acquired, filters the catalog, and remembers progress per plan. The CLI in
//! `main.rs` is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, cli/)                                  │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) → Command Layer (commands/*.rs)         │
//! │  - Rebuild the session for the current plan, run one op     │
//! │  - Return structured `CmdResult`s, never print              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (plan.rs, acquisition.rs, filter.rs, session.rs)      │
//! │  - Plan normalization, toggle cascade, visibility filter    │
//! │  - Total functions: bad input is a no-op, not an error      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - ProgressStore trait                                      │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Acquisition rules
//!
//! Toggling a synthesis gift cascades to its ingredients one level deep.
//! Direct picks are remembered as *manual*, and releasing a synthesis gift
//! leaves manual picks alone. See [`acquisition`].
//!
//! ## Progress keys
//!
//! Progress is stored under a key built from the plan's name, difficulty and
//! gift count (see [`plan::PlanKey`]). Plans that agree on all three share
//! progress.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`session`]: The plan on screen plus its progress, filters and page
//! - [`plan`]: Plan normalization, keys and lookups
//! - [`acquisition`]: Acquired/manual sets and the toggle cascade
//! - [`filter`]: Search, keyword and tier filters
//! - [`model`]: Plan document types (`PlanDocument`, `Gift`, `Floor`)
//! - [`store`]: Storage abstraction and implementations
//! - [`transport`]: Decoding plans from clipboard payloads, links and JSON
//! - [`clipboard`]: Cross-platform clipboard access
//! - [`assets`]: Image URLs on the planner site
//! - [`version`]: Release version comparison
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod acquisition;
pub mod api;
pub mod assets;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod plan;
pub mod session;
pub mod store;
pub mod transport;
pub mod version;
