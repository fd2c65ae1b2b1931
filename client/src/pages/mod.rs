//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and state transitions and delegates
//! rendering details to `components`.

pub mod articles;
pub mod new_article;
pub mod sign_in;
pub mod sign_up;
pub mod update_article;
