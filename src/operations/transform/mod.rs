mod extend;
mod scale;

pub use extend::ExtendLine;
pub use scale::Scale;
