//! Zone composition: the symmetric and asymmetric protection zone sets.
//!
//! Both forms share the same two bands:
//!
//! ```text
//!   restriction band (width d2, line extended by b + d1 at each end)
//!   ┌────────┬──────────────────────────────┬────────┐
//!   │        │  exclusion band (width 2c,   │        │
//!   │  rest. │  line extended by b per end) │  rest. │
//!   └────────┴──────────────────────────────┴────────┘
//! ```
//!
//! The restriction zone is the restriction band minus the exclusion band.
//! The asymmetric form then removes a perpendicular cutting polygon at one
//! end from both zones.

use geo::{Area, MultiPolygon};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::ZoneParameters;
use crate::error::{GeometryError, Result};
use crate::geometry::{Centerline, Polyline, RunwayEnd, ZoneName, ZoneSet};
use crate::math::AREA_TOLERANCE;
use crate::operations::boolean::Subtract;
use crate::operations::offset::{PerpendicularCut, SingleSidedBand};
use crate::operations::transform::ExtendLine;

/// Builds protection zone sets from runway centerlines.
///
/// Stateless apart from its parameter set; calls are independent and may run
/// concurrently across runways.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneComposer {
    params: ZoneParameters,
}

/// The two bands shared by both zone forms.
struct Bands {
    exclusion: MultiPolygon<f64>,
    restriction: MultiPolygon<f64>,
    restriction_line: Polyline,
}

impl ZoneComposer {
    /// Creates a composer for the given parameter set.
    #[must_use]
    pub fn new(params: ZoneParameters) -> Self {
        Self { params }
    }

    /// Returns the parameter set in use.
    #[must_use]
    pub fn params(&self) -> &ZoneParameters {
        &self.params
    }

    /// Builds the symmetric zone set: `[Centerline, Exclusion Zone, Restriction Zone]`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::Degenerate` if a band cannot be built on the centerline
    /// - `GeometryError::NonSimpleResult` if a band self-intersects or a zone
    ///   comes out empty
    pub fn symmetric(&self, centerline: &Centerline) -> Result<ZoneSet> {
        debug!(length = centerline.length(), params = ?self.params, "composing symmetric zones");

        let bands = self.bands(centerline)?;
        Ok(ZoneSet::new(
            ZoneName::Centerline,
            centerline.polyline().to_line_string(),
            require_region(ZoneName::ExclusionZone, bands.exclusion)?,
            require_region(ZoneName::RestrictionZone, bands.restriction)?,
        ))
    }

    /// Builds the asymmetric zone set: `[Runway, Exclusion Zone, Restriction Zone]`,
    /// with both zones truncated beyond the threshold selected by `end`.
    ///
    /// # Errors
    ///
    /// Same as [`ZoneComposer::symmetric`].
    pub fn asymmetric(&self, centerline: &Centerline, end: RunwayEnd) -> Result<ZoneSet> {
        debug!(
            length = centerline.length(),
            %end,
            params = ?self.params,
            "composing asymmetric zones"
        );

        let bands = self.bands(centerline)?;
        let cut = PerpendicularCut::new(
            bands.restriction_line,
            self.params.cut_half_width(),
            end.cut_end(),
        )
        .cutting_polygon(self.params.cut_depth())?;
        let cut = MultiPolygon::new(vec![cut]);

        let exclusion = Subtract::new(&bands.exclusion, &cut).execute();
        let restriction = Subtract::new(&bands.restriction, &cut).execute();

        Ok(ZoneSet::new(
            ZoneName::Runway,
            centerline.polyline().to_line_string(),
            require_region(ZoneName::ExclusionZone, exclusion)?,
            require_region(ZoneName::RestrictionZone, restriction)?,
        ))
    }

    /// Builds symmetric zone sets for many runways, in input order.
    ///
    /// Runs on the rayon pool with the `parallel` feature.
    #[must_use]
    pub fn symmetric_all(&self, centerlines: &[Centerline]) -> Vec<Result<ZoneSet>> {
        #[cfg(feature = "parallel")]
        let iter = centerlines.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = centerlines.iter();

        iter.map(|c| self.symmetric(c)).collect()
    }

    /// Builds asymmetric zone sets for many runways, in input order.
    ///
    /// Runs on the rayon pool with the `parallel` feature.
    #[must_use]
    pub fn asymmetric_all(&self, runways: &[(Centerline, RunwayEnd)]) -> Vec<Result<ZoneSet>> {
        #[cfg(feature = "parallel")]
        let iter = runways.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = runways.iter();

        iter.map(|(c, end)| self.asymmetric(c, *end)).collect()
    }

    fn bands(&self, centerline: &Centerline) -> Result<Bands> {
        let p = &self.params;
        let line = centerline.polyline();

        let exclusion_line = ExtendLine::new(line.clone(), p.exclusion_extension()).execute()?;
        let exclusion =
            SingleSidedBand::new(exclusion_line, p.c_len(), 2.0 * p.c_len()).execute()?;
        let exclusion = MultiPolygon::new(vec![exclusion]);

        let restriction_line =
            ExtendLine::new(line.clone(), p.restriction_extension()).execute()?;
        let raw_restriction =
            SingleSidedBand::new(restriction_line.clone(), p.d2_len() / 2.0, p.d2_len())
                .execute()?;
        let restriction = Subtract::new(&MultiPolygon::new(vec![raw_restriction]), &exclusion)
            .execute();

        Ok(Bands {
            exclusion,
            restriction,
            restriction_line,
        })
    }
}

/// Rejects zones that composed to nothing.
fn require_region(name: ZoneName, region: MultiPolygon<f64>) -> Result<MultiPolygon<f64>> {
    let area = region.unsigned_area();
    if region.0.is_empty() || area < AREA_TOLERANCE {
        return Err(GeometryError::NonSimpleResult(format!("{name} is empty (area {area})")).into());
    }
    Ok(region)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, OperationError, ZoneError};
    use crate::math::Point2;
    use approx::assert_relative_eq;
    use geo::{BooleanOps, BoundingRect, Rect};

    fn runway(x0: f64, y0: f64, x1: f64, y1: f64) -> Centerline {
        Centerline::from_endpoints(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
    }

    fn reference() -> Centerline {
        runway(0.0, 0.0, 3000.0, 0.0)
    }

    fn bounds(region: &MultiPolygon<f64>) -> Rect<f64> {
        region.bounding_rect().unwrap()
    }

    // Boolean results pass through the kernel's fixed-point grid.
    const KERNEL_EPS: f64 = 1e-3;
    const KERNEL_REL: f64 = 1e-6;

    fn assert_rect(rect: &Rect<f64>, min: (f64, f64), max: (f64, f64)) {
        assert_relative_eq!(rect.min().x, min.0, epsilon = KERNEL_EPS);
        assert_relative_eq!(rect.min().y, min.1, epsilon = KERNEL_EPS);
        assert_relative_eq!(rect.max().x, max.0, epsilon = KERNEL_EPS);
        assert_relative_eq!(rect.max().y, max.1, epsilon = KERNEL_EPS);
    }

    /// Shared area tolerated between the two zones of a set.
    ///
    /// The boolean kernel rounds to a power-of-two grid of about
    /// `extent / 2^29` units. The zones only meet along the exclusion end
    /// edges (at most `2c` long each), so any overlap is a sliver at most one
    /// grid step wide along both of them.
    fn overlap_tolerance(composer: &ZoneComposer, line: &Centerline) -> f64 {
        let p = composer.params();
        let extent = line.length() + p.restriction_extension() + 2.0 * p.cut_half_width();
        let step = extent / f64::from(1_u32 << 29);
        2.0 * (2.0 * p.c_len()) * step
    }

    fn overlap_area(set: &ZoneSet) -> f64 {
        set.exclusion()
            .unwrap()
            .intersection(set.restriction().unwrap())
            .unsigned_area()
    }

    #[test]
    fn symmetric_entries_in_fixed_order() {
        let line = reference();
        let set = ZoneComposer::default().symmetric(&line).unwrap();
        let names: Vec<_> = set.iter().map(|z| z.name).collect();
        assert_eq!(
            names,
            [
                ZoneName::Centerline,
                ZoneName::ExclusionZone,
                ZoneName::RestrictionZone
            ]
        );
        assert_eq!(set.reference_line().unwrap(), &line.polyline().to_line_string());
    }

    #[test]
    fn symmetric_exclusion_extent_and_area() {
        let set = ZoneComposer::default().symmetric(&reference()).unwrap();
        let exclusion = set.exclusion().unwrap();
        assert_rect(&bounds(exclusion), (-2890.0, -1760.0), (5890.0, 1760.0));
        assert_relative_eq!(exclusion.unsigned_area(), 3520.0 * 8780.0, max_relative = 1e-9);
    }

    #[test]
    fn exclusion_area_is_linear_in_length() {
        let composer = ZoneComposer::default();
        let area = |len: f64| {
            composer
                .symmetric(&runway(0.0, 0.0, len, 0.0))
                .unwrap()
                .exclusion()
                .unwrap()
                .unsigned_area()
        };
        for len in [500.0, 1000.0, 2400.0, 4000.0] {
            assert_relative_eq!(area(len), 3520.0 * (len + 5780.0), max_relative = 1e-9);
        }
        assert_relative_eq!(
            area(4000.0) - area(2000.0),
            2.0 * (area(2000.0) - area(1000.0)),
            max_relative = 1e-9
        );
    }

    #[test]
    fn symmetric_restriction_covers_both_ends_only() {
        let set = ZoneComposer::default().symmetric(&reference()).unwrap();
        let restriction = set.restriction().unwrap();
        assert_rect(&bounds(restriction), (-8200.0, -340.0), (11200.0, 340.0));
        assert_eq!(restriction.0.len(), 2);
        for piece in &restriction.0 {
            let rect = piece.bounding_rect().unwrap();
            assert!(rect.max().x <= -2890.0 + KERNEL_EPS || rect.min().x >= 5890.0 - KERNEL_EPS);
        }
        assert_relative_eq!(
            restriction.unsigned_area(),
            2.0 * 5310.0 * 680.0,
            max_relative = KERNEL_REL
        );
    }

    #[test]
    fn zones_never_overlap() {
        let composer = ZoneComposer::default();
        for line in [
            reference(),
            runway(1000.0, 2000.0, 1800.0, 4400.0),
            runway(-500.0, 300.0, -3100.0, -1200.0),
        ] {
            let tolerance = overlap_tolerance(&composer, &line);
            assert!(overlap_area(&composer.symmetric(&line).unwrap()) < tolerance);
            for end in [RunwayEnd::Approach, RunwayEnd::Opposite] {
                assert!(overlap_area(&composer.asymmetric(&line, end).unwrap()) < tolerance);
            }
        }
    }

    #[test]
    fn rotated_runway_keeps_areas() {
        let composer = ZoneComposer::default();
        let flat = composer.symmetric(&reference()).unwrap();
        // Length 3000 at a 3-4-5 slope.
        let slanted = composer.symmetric(&runway(0.0, 0.0, 1800.0, 2400.0)).unwrap();
        assert_relative_eq!(
            slanted.exclusion().unwrap().unsigned_area(),
            flat.exclusion().unwrap().unsigned_area(),
            max_relative = KERNEL_REL
        );
        assert_relative_eq!(
            slanted.restriction().unwrap().unsigned_area(),
            flat.restriction().unwrap().unsigned_area(),
            max_relative = KERNEL_REL
        );
    }

    #[test]
    fn asymmetric_approach_truncates_far_end() {
        let set = ZoneComposer::default()
            .asymmetric(&reference(), RunwayEnd::Approach)
            .unwrap();
        assert_eq!(set.iter().next().unwrap().name, ZoneName::Runway);
        assert_rect(&bounds(set.exclusion().unwrap()), (-2890.0, -1760.0), (4760.0, 1760.0));
        let restriction = set.restriction().unwrap();
        assert_eq!(restriction.0.len(), 1);
        assert_rect(&bounds(restriction), (-8200.0, -340.0), (-2890.0, 340.0));
    }

    #[test]
    fn asymmetric_opposite_truncates_near_end() {
        let set = ZoneComposer::default()
            .asymmetric(&reference(), RunwayEnd::Opposite)
            .unwrap();
        assert_rect(&bounds(set.exclusion().unwrap()), (-1760.0, -1760.0), (5890.0, 1760.0));
        assert_rect(&bounds(set.restriction().unwrap()), (5890.0, -340.0), (11200.0, 340.0));
    }

    #[test]
    fn asymmetric_ends_are_mirror_images() {
        let composer = ZoneComposer::default();
        let line = reference();
        let approach = composer.asymmetric(&line, RunwayEnd::Approach).unwrap();
        let opposite = composer.asymmetric(&line, RunwayEnd::Opposite).unwrap();

        // Mirror axis: x = 1500.
        let mirrored = |r: Rect<f64>| (3000.0 - r.max().x, 3000.0 - r.min().x);
        for (a, o) in [
            (approach.exclusion().unwrap(), opposite.exclusion().unwrap()),
            (approach.restriction().unwrap(), opposite.restriction().unwrap()),
        ] {
            let (min_x, max_x) = mirrored(bounds(a));
            let ob = bounds(o);
            assert_relative_eq!(min_x, ob.min().x, epsilon = KERNEL_EPS);
            assert_relative_eq!(max_x, ob.max().x, epsilon = KERNEL_EPS);
            assert_relative_eq!(a.unsigned_area(), o.unsigned_area(), max_relative = KERNEL_REL);
        }
    }

    #[test]
    fn asymmetric_areas() {
        let set = ZoneComposer::default()
            .asymmetric(&reference(), RunwayEnd::Approach)
            .unwrap();
        assert_relative_eq!(
            set.exclusion().unwrap().unsigned_area(),
            7650.0 * 3520.0,
            max_relative = KERNEL_REL
        );
        assert_relative_eq!(
            set.restriction().unwrap().unsigned_area(),
            5310.0 * 680.0,
            max_relative = KERNEL_REL
        );
    }

    #[test]
    fn unknown_end_flag_is_rejected() {
        let err = RunwayEnd::try_from(2_i64).unwrap_err();
        assert!(matches!(err, ZoneError::Operation(OperationError::InvalidEnd(_))));
        assert!("both".parse::<RunwayEnd>().is_err());
    }

    #[test]
    fn custom_parameters() {
        let params = ZoneParameters::new(100.0, 50.0, 200.0, 20.0).unwrap();
        let set = ZoneComposer::new(params)
            .symmetric(&runway(0.0, 0.0, 1000.0, 0.0))
            .unwrap();
        assert_rect(&bounds(set.exclusion().unwrap()), (-100.0, -50.0), (1100.0, 50.0));
        assert_rect(&bounds(set.restriction().unwrap()), (-300.0, -10.0), (1300.0, 10.0));
    }

    #[test]
    fn shallow_cut_still_truncates() {
        // Cut depth d1 + b - c = 10.
        let params = ZoneParameters::new(100.0, 290.0, 200.0, 20.0).unwrap();
        let line = runway(0.0, 0.0, 1000.0, 0.0);
        let set = ZoneComposer::new(params)
            .asymmetric(&line, RunwayEnd::Approach)
            .unwrap();
        assert_rect(&bounds(set.exclusion().unwrap()), (-100.0, -290.0), (1100.0, 290.0));
        assert_rect(&bounds(set.restriction().unwrap()), (-300.0, -10.0), (1290.0, 10.0));
    }

    #[test]
    fn cut_without_depth_is_rejected_up_front() {
        let err = ZoneParameters::new(100.0, 400.0, 200.0, 20.0).unwrap_err();
        assert!(matches!(err, ZoneError::Config(ConfigError::InvalidParameter { name: "c_len", .. })));
    }

    #[test]
    fn bent_centerline_composes() {
        let line = Centerline::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1500.0, 0.0),
            Point2::new(3000.0, 100.0),
        ])
        .unwrap();
        let composer = ZoneComposer::default();
        let set = composer.symmetric(&line).unwrap();
        assert!(set.exclusion().unwrap().unsigned_area() > 0.0);
        assert!(set.restriction().unwrap().unsigned_area() > 0.0);
        assert!(overlap_area(&set) < overlap_tolerance(&composer, &line));
    }

    #[test]
    fn batch_keeps_input_order() {
        let composer = ZoneComposer::default();
        let lines = [runway(0.0, 0.0, 1000.0, 0.0), runway(0.0, 0.0, 3000.0, 0.0)];
        let sets = composer.symmetric_all(&lines);
        assert_eq!(sets.len(), 2);
        let a0 = sets[0].as_ref().unwrap().exclusion().unwrap().unsigned_area();
        let a1 = sets[1].as_ref().unwrap().exclusion().unwrap().unsigned_area();
        assert!(a0 < a1);

        let asym = composer.asymmetric_all(&[
            (lines[1].clone(), RunwayEnd::Approach),
            (lines[1].clone(), RunwayEnd::Opposite),
        ]);
        let b0 = bounds(asym[0].as_ref().unwrap().exclusion().unwrap());
        let b1 = bounds(asym[1].as_ref().unwrap().exclusion().unwrap());
        assert_relative_eq!(b0.min().x, -2890.0, epsilon = KERNEL_EPS);
        assert_relative_eq!(b1.min().x, -1760.0, epsilon = KERNEL_EPS);
    }
}
