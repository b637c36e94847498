//! Deterministic seeding for decision randomness.
//!
//! Every probabilistic choice the engine makes draws from an injected
//! `rand::RngCore`. These helpers derive a reproducible generator per ally per
//! turn, so replaying a game with the same seed replays every decision.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::state::EntityId;

/// Context value reserved for ally decision streams in [`compute_seed`].
pub const ALLY_DECISION_CONTEXT: u32 = 0xA11E;

/// Compute deterministic seed from game state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start (for replay/determinism)
/// * `nonce` - Sequence number, typically the turn counter
/// * `actor_id` - Entity the roll belongs to
/// * `context` - Distinguishes independent streams for the same actor and turn
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 and FxHash multipliers
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Generator for one ally's decisions on one turn.
pub fn ally_rng(game_seed: u64, turn: u64, ally: EntityId) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(compute_seed(game_seed, turn, ally.0, ALLY_DECISION_CONTEXT))
}
