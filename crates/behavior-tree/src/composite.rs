//! Composite behavior nodes.
//!
//! [`Sequence`] is a guarded step ("if all of these hold, do that") and
//! [`Selector`] is a priority chain ("first branch that succeeds wins").
//! Companion tactics are a `Selector` of guarded `Sequence`s.

use crate::{Behavior, Node, Status};

/// Executes children left to right until one fails (short-circuit AND).
///
/// - A `Failure` stops the sequence immediately and is returned
/// - If every child succeeds, the sequence succeeds
pub struct Sequence<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Sequence<'n, C> {
    /// Creates a new sequence with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Sequence<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Executes children left to right until one succeeds (short-circuit OR).
///
/// - A `Success` stops the selector immediately and is returned
/// - If every child fails, the selector fails
///
/// Children are always tried in declaration order, so the order of the
/// `children` vector *is* the priority order.
pub struct Selector<'n, C> {
    children: Vec<Node<'n, C>>,
}

impl<'n, C> Selector<'n, C> {
    /// Creates a new selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C> Behavior<C> for Selector<'_, C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}
