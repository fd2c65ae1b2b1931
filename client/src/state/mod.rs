//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `articles`, `editor`, `ui`) so pages
//! depend on small focused models whose transitions can be tested without a
//! browser.

pub mod articles;
pub mod auth;
pub mod editor;
pub mod ui;
