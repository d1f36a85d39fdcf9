use crate::error::{ConfigError, Result};
use crate::math::LENGTH_TOLERANCE;

/// Regulatory zone dimensions, in the linear unit of the input plane.
///
/// - `b_len`: end extension of the exclusion band beyond each threshold
/// - `c_len`: exclusion half-width
/// - `d1_len`: further end extension of the restriction band
/// - `d2_len`: restriction band width
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawZoneParameters"))]
pub struct ZoneParameters {
    b_len: f64,
    c_len: f64,
    d1_len: f64,
    d2_len: f64,
}

impl Default for ZoneParameters {
    /// The published parameter set, in metres.
    fn default() -> Self {
        Self {
            b_len: 2890.0,
            c_len: 1760.0,
            d1_len: 5310.0,
            d2_len: 680.0,
        }
    }
}

impl ZoneParameters {
    /// Creates a parameter set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` if any value is not finite and
    /// strictly positive, or if `c_len` is not shorter than `b_len + d1_len`
    /// (the truncating cut of the asymmetric form would have no depth).
    pub fn new(b_len: f64, c_len: f64, d1_len: f64, d2_len: f64) -> Result<Self> {
        for (name, value) in [
            ("b_len", b_len),
            ("c_len", c_len),
            ("d1_len", d1_len),
            ("d2_len", d2_len),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidParameter { name, value }.into());
            }
        }
        if d1_len + (b_len - c_len) < LENGTH_TOLERANCE {
            return Err(ConfigError::InvalidParameter {
                name: "c_len",
                value: c_len,
            }
            .into());
        }
        Ok(Self {
            b_len,
            c_len,
            d1_len,
            d2_len,
        })
    }

    #[must_use]
    pub fn b_len(&self) -> f64 {
        self.b_len
    }

    #[must_use]
    pub fn c_len(&self) -> f64 {
        self.c_len
    }

    #[must_use]
    pub fn d1_len(&self) -> f64 {
        self.d1_len
    }

    #[must_use]
    pub fn d2_len(&self) -> f64 {
        self.d2_len
    }

    /// Total length added to the centerline for the exclusion band (`2b`).
    #[must_use]
    pub fn exclusion_extension(&self) -> f64 {
        2.0 * self.b_len
    }

    /// Total length added to the centerline for the restriction band
    /// (`2(b + d1)`).
    #[must_use]
    pub fn restriction_extension(&self) -> f64 {
        2.0 * (self.b_len + self.d1_len)
    }

    /// Half-width of the cross-line used to truncate the asymmetric form.
    #[must_use]
    pub fn cut_half_width(&self) -> f64 {
        2.0 * self.c_len
    }

    /// Depth of the truncating polygon, measured from the restriction end
    /// back toward the runway (`d1 + b - c`).
    #[must_use]
    pub fn cut_depth(&self) -> f64 {
        self.d1_len + (self.b_len - self.c_len)
    }
}

/// Unvalidated mirror of [`ZoneParameters`] used for deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawZoneParameters {
    b_len: f64,
    c_len: f64,
    d1_len: f64,
    d2_len: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawZoneParameters> for ZoneParameters {
    type Error = crate::error::ZoneError;

    fn try_from(raw: RawZoneParameters) -> Result<Self> {
        Self::new(raw.b_len, raw.c_len, raw.d1_len, raw.d2_len)
    }
}
