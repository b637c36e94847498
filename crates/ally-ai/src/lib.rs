//! Decision engine for companion allies.
//!
//! Each tick, for each ally, the engine answers two questions:
//!
//! 1. **Where to move and whom to attack**: the [`TacticDispatcher`] builds a
//!    behavior tree for the ally's [`Tactic`](game_core::Tactic) and runs it
//!    against a [`TacticContext`] snapshot, calling the bounded [`Pathfinder`]
//!    when it needs to close distance.
//! 2. **Which skill to use**: the [`SkillSelector`] weighs healing, buffing and
//!    type-effective damage for the chosen attack target.
//!
//! [`PartyTurn`] drives both for a whole party, applying each ally's move
//! before the next ally decides.
//!
//! Every function is a pure computation over an immutable snapshot. All
//! randomness is drawn from an injected `rand::RngCore`.

pub mod context;
pub mod dispatcher;
pub mod error;
pub mod nodes;
pub mod party;
pub mod pathfinder;
pub mod skills;
pub mod subtrees;

pub use context::{Decision, TacticContext, World};
pub use dispatcher::TacticDispatcher;
pub use error::MoveError;
pub use party::{AllyTurn, PartyState, PartyTurn};
pub use pathfinder::Pathfinder;
pub use skills::{SkillQuery, SkillSelector};
