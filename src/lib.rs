//! Runway protection zone geometry.
//!
//! Builds the exclusion and restriction zones around a runway centerline in
//! a projected plane, in a symmetric form and in an asymmetric form truncated
//! beyond one threshold. See [`ZoneComposer`].

pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod zones;

pub use config::ZoneParameters;
pub use error::{Result, ZoneError};
pub use geometry::{Centerline, CutEnd, Polyline, RunwayEnd, Side, ZoneName, ZoneSet};
pub use zones::ZoneComposer;
