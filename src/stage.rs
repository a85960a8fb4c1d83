//! The three segmentation passes.
//!
//! ```text
//! text ──classify──▶ raw runs ──split_particles──▶ refined runs ──combine──▶ tokens
//! ```
//!
//! Every pass is a pure function of its input and hands out slices of the
//! original text, so the concatenation of any pass's output is the input
//! itself. The only shared state is the read-only [`ParticleTrie`] each caller
//! passes in.
//!
//! [`ParticleTrie`]: crate::particle::ParticleTrie

pub mod classify;
pub mod combine;
pub mod split_particles;

pub use classify::classify;
pub use combine::{Cursor, combine};
pub use split_particles::{needs_split, split_particles};
