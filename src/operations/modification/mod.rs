mod weld;

pub use weld::WeldLines;
