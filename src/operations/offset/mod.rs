mod parallel_offset;
mod perpendicular_cut;
mod single_sided_band;

pub use parallel_offset::ParallelOffset2D;
pub use perpendicular_cut::PerpendicularCut;
pub use single_sided_band::SingleSidedBand;
