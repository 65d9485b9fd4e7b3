//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer. It avoids widget toolkits and
//! instead renders each screen into a plain framebuffer that is flushed to the
//! terminal by a diffing renderer.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Views are pure functions from state to framebuffer
//! - Control the aspect ratio directly (2 columns per board cell)

pub mod fb;
pub mod game_view;
pub mod render_throttle;
pub mod renderer;
pub mod screens;
pub mod speed_view;

pub use connect_four_core as core;
pub use connect_four_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{status_text, AnchorY, ClassicHud, GameView, Viewport};
pub use render_throttle::RenderThrottle;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screens::{render_history_into, render_menu_into, render_settings_into};
pub use speed_view::SpeedView;
