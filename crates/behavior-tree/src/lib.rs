//! Priority-chain behavior trees for turn-stepped decision making.
//!
//! A companion's tactic is a fixed priority list: "yield if blocking, else
//! attack if adjacent, else chase, else idle". This crate expresses such
//! lists as small trees that are rebuilt and evaluated from scratch every
//! tick:
//!
//! - **Stateless**: nodes hold configuration only, never progress
//! - **No Running state**: every node succeeds or fails within the tick
//! - **Borrowing contexts**: trees are generic over a lifetime so the
//!   blackboard may borrow the world snapshot it reasons about
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - [`builder`]: shorthands for assembling priority chains

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use status::Status;
