//! Builder shorthands for tree construction.
//!
//! `selector(vec![guard(..), leaf(..)])` reads closer to the priority list it
//! encodes than nested `Box::new(Selector::new(vec![...]))` calls.

use crate::{Behavior, Node, Selector, Sequence};

/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Sequence::new(children))
}

/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<'n, C: 'n>(children: Vec<Node<'n, C>>) -> Node<'n, C> {
    Box::new(Selector::new(children))
}

/// Boxes any concrete node.
#[inline]
pub fn leaf<'n, C, B>(node: B) -> Node<'n, C>
where
    B: Behavior<C> + 'n,
{
    Box::new(node)
}

/// Guarded step: succeeds only if `guard` holds and `then` succeeds.
#[inline]
pub fn guard<'n, C: 'n>(guard: Node<'n, C>, then: Node<'n, C>) -> Node<'n, C> {
    sequence(vec![guard, then])
}
