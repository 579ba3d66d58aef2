//! # Core Application Logic
//!
//! This module contains Cockpit's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure logic.     │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`menu`]: Static navigation tree and role filtering
//! - [`breadcrumb`]: Path → breadcrumb trail and page title
//! - [`loading`]: Reference-counted loading gate
//! - [`table`]: Sorting and pagination for the data table
//! - [`auth`]: Mock sign-in and the route gate
//! - [`profile`]: Sealed profile persistence
//! - [`config`]: Config file loading and resolution
//! - [`demo`]: Mock user rows for the table demo

pub mod action;
pub mod auth;
pub mod breadcrumb;
pub mod config;
pub mod demo;
pub mod loading;
pub mod menu;
pub mod profile;
pub mod state;
pub mod table;
