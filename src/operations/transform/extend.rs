use super::Scale;
use crate::error::{GeometryError, Result};
use crate::geometry::Polyline;
use crate::math::LENGTH_TOLERANCE;

/// Lengthens a line symmetrically about its midpoint.
///
/// The line is scaled by `(length + added) / length`, so half of `added`
/// lands beyond each end while direction and midpoint are kept.
#[derive(Debug)]
pub struct ExtendLine {
    line: Polyline,
    added_length: f64,
}

impl ExtendLine {
    /// Creates a new `ExtendLine` operation.
    #[must_use]
    pub fn new(line: Polyline, added_length: f64) -> Self {
        Self { line, added_length }
    }

    /// Executes the extension, returning the lengthened line.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the input has zero length or the
    /// extended length would not be positive.
    pub fn execute(&self) -> Result<Polyline> {
        let length = self.line.length();
        if length < LENGTH_TOLERANCE {
            return Err(GeometryError::Degenerate("cannot extend a zero-length line".to_owned()).into());
        }
        let target = length + self.added_length;
        if !target.is_finite() || target < LENGTH_TOLERANCE {
            return Err(GeometryError::Degenerate(format!(
                "extension by {} leaves no line of length {length}",
                self.added_length
            ))
            .into());
        }
        Scale::about_center(self.line.clone(), target / length).execute()
    }
}
