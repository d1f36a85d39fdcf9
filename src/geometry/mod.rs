pub mod centerline;
pub mod polyline;
pub mod selector;
pub mod zone;

pub use centerline::Centerline;
pub use polyline::Polyline;
pub use selector::{CutEnd, RunwayEnd, Side};
pub use zone::{Zone, ZoneGeometry, ZoneName, ZoneSet};
