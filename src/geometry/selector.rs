use std::fmt;
use std::str::FromStr;

use crate::error::{OperationError, ZoneError};

/// Side of a line, relative to its direction of travel.
///
/// Standing at the first vertex and facing the last, `Left` is the
/// counter-clockwise perpendicular.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// `+1.0` for left, `-1.0` for right.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Left => 1.0,
            Self::Right => -1.0,
        }
    }
}

impl FromStr for Side {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(OperationError::InvalidSide(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Which end of a line a perpendicular cut is built at.
///
/// `Far` is the last vertex (the forward or "top" end), `Near` the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CutEnd {
    Far,
    Near,
}

impl FromStr for CutEnd {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "far" | "top" => Ok(Self::Far),
            "near" | "bottom" => Ok(Self::Near),
            _ => Err(OperationError::InvalidEnd(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for CutEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Far => "far",
            Self::Near => "near",
        })
    }
}

/// Runway end that keeps the truncated zones in the asymmetric form.
///
/// `Approach` truncates the zones beyond the far threshold, `Opposite`
/// beyond the near one. Source datasets flag these as `1` and `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RunwayEnd {
    Approach,
    Opposite,
}

impl RunwayEnd {
    /// The line end the truncating cut is built at.
    #[must_use]
    pub fn cut_end(self) -> CutEnd {
        match self {
            Self::Approach => CutEnd::Far,
            Self::Opposite => CutEnd::Near,
        }
    }
}

impl TryFrom<i64> for RunwayEnd {
    type Error = ZoneError;

    fn try_from(flag: i64) -> Result<Self, Self::Error> {
        match flag {
            1 => Ok(Self::Approach),
            0 => Ok(Self::Opposite),
            other => Err(OperationError::InvalidEnd(other.to_string()).into()),
        }
    }
}

impl FromStr for RunwayEnd {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "approach" | "1" => Ok(Self::Approach),
            "opposite" | "0" => Ok(Self::Opposite),
            _ => Err(OperationError::InvalidEnd(s.to_owned()).into()),
        }
    }
}

impl fmt::Display for RunwayEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Approach => "approach",
            Self::Opposite => "opposite",
        })
    }
}
