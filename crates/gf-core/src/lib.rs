//! `gf-core` — foundational types for the geofence engine.
//!
//! This crate is a dependency of every other `gf-*` crate.  It has no `gf-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `Coordinate`, haversine distance                      |
//! | [`time`]        | `Timestamp` (millisecond instant)                     |
//! | [`fix`]         | `Fix`, `RawFix`, `FixRejection`                       |
//! | [`category`]    | `PoiCategory` open enum                               |
//! | [`error`]       | `GfError`, `GfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod category;
pub mod error;
pub mod fix;
pub mod geo;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use category::PoiCategory;
pub use error::{GfError, GfResult};
pub use fix::{Fix, FixRejection, RawFix};
pub use geo::{Coordinate, EARTH_RADIUS_M, haversine_m};
pub use time::Timestamp;
