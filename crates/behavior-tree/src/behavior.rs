//! Core behavior trait.
//!
//! [`Behavior`] is generic over the context type `C`, which acts as the
//! blackboard: conditions read it, actions write their result into it.

use crate::Status;

/// A boxed node whose borrowed data lives for `'n`.
///
/// Trees built over a borrowing context (e.g. `Ctx<'a>`) use `Node<'a, Ctx<'a>>`,
/// so no `'static` bound leaks into the context type.
pub type Node<'n, C> = Box<dyn Behavior<C> + 'n>;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluate this node against the given context.
    ///
    /// Nodes may write intermediate or final results into `ctx`.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Boxed nodes are nodes too, enabling heterogeneous child lists.
impl<'n, C> Behavior<C> for Box<dyn Behavior<C> + 'n> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
