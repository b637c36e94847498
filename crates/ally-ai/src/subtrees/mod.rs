//! Reusable behavior tree subtrees.
//!
//! Subtrees are organized into two layers:
//!
//! - **Layer 1 (Patterns)**: guarded steps combining a condition with an action
//! - **Layer 2 (Tactics)**: one full priority chain per [`Tactic`]
//!
//! ```text
//! tactics::follow_me()
//!     ├─ yield_when_blocking()   ← Layer 1
//!     ├─ rejoin_when_leashed()   ← Layer 1
//!     ├─ AttackAdjacentEnemy     ← node
//!     ├─ engage_nearby_enemy()   ← Layer 1
//!     ├─ idle_when_close()       ← Layer 1
//!     └─ ...
//! ```
//!
//! Trees hold no per-tick state, so they are rebuilt cheaply for every
//! decision.

pub mod patterns;
pub mod tactics;

use behavior_tree::Node;
use game_core::{AiConfig, Tactic};

use crate::context::TacticContext;

/// Type alias for ally behavior trees.
pub type BehaviorTree<'a> = Node<'a, TacticContext<'a>>;

/// Builds the priority chain for `tactic`.
pub fn tree_for<'a>(tactic: Tactic, config: &AiConfig) -> BehaviorTree<'a> {
    match tactic {
        Tactic::FollowMe => tactics::follow_me(config),
        Tactic::GoAfterFoes => tactics::go_after_foes(config),
        Tactic::StayHere => tactics::stay_here(),
        Tactic::Scatter => tactics::scatter(),
    }
}
