//! `gf-speed` — instantaneous speed from consecutive fixes.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                |
//! |-----------------|---------------------------------------------------------|
//! | [`state`]       | `EngineState` — the single previous-fix cell            |
//! | [`estimator`]   | `SpeedEstimator` — distance / elapsed time, in km/h     |
//!
//! # Estimation model (single lag)
//!
//! 1. The first fix of a session yields `0.0` and is remembered.
//! 2. Every later fix yields `distance(prev, fix) / elapsed_secs * 3.6`.
//! 3. Duplicate or out-of-order timestamps (`elapsed_secs <= 0`) yield `0.0`.
//! 4. Whatever the outcome, the new fix replaces the previous one.
//!
//! No smoothing is applied across more than one prior sample.

pub mod estimator;
pub mod state;


pub use estimator::{MS_TO_KMH, SpeedEstimator};
pub use state::EngineState;
