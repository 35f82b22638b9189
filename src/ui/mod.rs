//! UI rendering modules for the Parlor client.
//!
//! - `sidebar`: user roster panel with search filter
//! - `messages`: conversation message area and empty state
//! - `toasts`: auto-expiring status toasts
//! - `theme`: colors, avatars and visuals

pub mod messages;
pub mod sidebar;
pub mod theme;
pub mod toasts;
