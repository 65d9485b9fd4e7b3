//! Connect Four (workspace facade crate).
//!
//! Re-exports the member crates as `connect_four::{core,input,term,types}` and
//! hosts the screen router used by the binary.

pub mod app;

pub use connect_four_core as core;
pub use connect_four_input as input;
pub use connect_four_term as term;
pub use connect_four_types as types;

pub use app::{App, Screen};
