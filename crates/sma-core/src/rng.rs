//! Hash-keyed, order-independent randomness.
//!
//! # Determinism strategy
//!
//! Every uniform draw is derived from a deterministic integer hash of
//!
//!   (global_seed, agent_id, tick, call_site, draw_counter)
//!
//! rather than from a shared mutable generator.  Consequences:
//!
//! - Agents never share RNG state (no contention, no ordering dependency).
//! - A draw's value does not depend on which thread evaluates it or in which
//!   order agents are visited, so sequential and Rayon runs agree exactly.
//! - Adding a draw at one call site never shifts the values seen at another.
//!
//! [`HashRng`] implements [`rand::RngCore`], so the usual `rand::Rng` helpers
//! (`r#gen`, `gen_range`, `gen_bool`) work on top of the hash stream.

use rand::RngCore;

use crate::{AgentId, Tick};

/// 32-bit fractional golden-ratio constant for key mixing.
const MIXING_CONSTANT: u32 = 0x9e37_79b9;

/// Integer avalanche hash: xor-shift / multiply rounds.
#[inline]
pub fn hash_u32(mut state: u32) -> u32 {
    state ^= 2_747_636_219;
    state = state.wrapping_mul(2_654_435_769);
    state ^= state >> 16;
    state = state.wrapping_mul(2_654_435_769);
    state ^= state >> 16;
    state.wrapping_mul(2_654_435_769)
}

#[inline]
fn fold_u64(value: u64) -> u32 {
    hash_u32(value as u32 ^ hash_u32((value >> 32) as u32))
}

// ── DrawSite ──────────────────────────────────────────────────────────────────

/// The call site a random stream belongs to.
///
/// Each site gets an independent stream for the same agent and tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum DrawSite {
    Spawn = 1,
    Weight = 2,
    Explore = 3,
    PeerA = 4,
    PeerB = 5,
    Collision = 7,
    Steering = 8,
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent, per-tick random key.
///
/// Cheap to construct and `Copy`; build one inside the agent update instead
/// of storing generator state alongside the agent arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AgentRng {
    key: u32,
}

impl AgentRng {
    /// Derive the key for `agent` at `tick` from the run's global seed.
    pub fn new(global_seed: u64, agent: AgentId, tick: Tick) -> Self {
        let seeded = fold_u64(global_seed);
        let with_agent = hash_u32(seeded ^ agent.0.wrapping_mul(MIXING_CONSTANT));
        let key = hash_u32(with_agent ^ fold_u64(tick.0));
        Self { key }
    }

    /// Independent stream for one call site.
    #[inline]
    pub fn stream(self, site: DrawSite) -> HashRng {
        HashRng {
            key: hash_u32(self.key ^ (site as u32).wrapping_mul(MIXING_CONSTANT)),
            counter: 0,
        }
    }
}

// ── HashRng ───────────────────────────────────────────────────────────────────

/// Counter-based generator: the n-th output is `hash(key ^ hash(n))`.
#[derive(Clone, Debug)]
pub struct HashRng {
    key: u32,
    counter: u32,
}

impl HashRng {
    /// Stream keyed directly by a seed, for contexts with no agent/tick.
    pub fn from_seed(seed: u64) -> Self {
        Self { key: fold_u64(seed), counter: 0 }
    }
}

impl RngCore for HashRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let value = hash_u32(self.key ^ hash_u32(self.counter));
        self.counter = self.counter.wrapping_add(1);
        value
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let lo = self.next_u32() as u64;
        let hi = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
