//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome, cards, dialogs, and the article form
//! pieces while pages own fetching and state transitions.

pub mod article_card;
pub mod article_fields;
pub mod confirm_dialog;
pub mod layout;
pub mod rich_text_editor;
pub mod spinner;
