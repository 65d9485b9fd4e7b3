//! Terminal input module.
//!
//! Maps `crossterm` key events into the per-screen action enums from
//! [`crate::types`]. Each screen has its own map because the same key means
//! different things on different screens (digits drop pieces in a game but are
//! typed into fields on the settings screen).

pub mod map;

pub use connect_four_types as types;

pub use map::{
    map_classic_key, map_history_key, map_menu_key, map_settings_key, map_speed_key,
    should_quit,
};
