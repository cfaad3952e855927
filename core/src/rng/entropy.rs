//! Non-deterministic seed source for unseeded generators

use rand::Rng;

/// Draw a fresh seed uniformly from `[1, 2^32)`.
///
/// The seed comes from the thread-local generator of the `rand` crate,
/// which is itself seeded from the operating system.
pub(crate) fn entropy_seed() -> u32 {
    rand::thread_rng().gen_range(1..=u32::MAX)
}
