//! Ports (trait boundaries) between the game core and its surroundings.
//!
//! The turn loop depends only on these traits; the minimax bot, console
//! input and terminal rendering are adapters implementing them.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
