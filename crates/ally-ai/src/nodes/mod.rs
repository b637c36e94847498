//! Ally-specific behavior tree nodes.
//!
//! - `conditions`: Nodes that check the snapshot (Success/Failure only)
//! - `actions`: Nodes that record the ally's decision

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
