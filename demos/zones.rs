//! Prints the symmetric and asymmetric zone sets for a sample runway.
//!
//! Usage:
//! ```text
//! cargo run --example zones                          # default parameters
//! RUST_LOG=runway_zones=debug cargo run --example zones
//! ```

use geo::{Area, BoundingRect};
use runway_zones::math::Point2;
use runway_zones::{Centerline, RunwayEnd, ZoneComposer, ZoneSet};

fn main() -> runway_zones::Result<()> {
    // Default: WARN for everything, INFO for runway_zones.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("runway_zones=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let runway = Centerline::from_endpoints(Point2::new(0.0, 0.0), Point2::new(3000.0, 0.0))?;
    let composer = ZoneComposer::default();

    println!("symmetric");
    print_set(&composer.symmetric(&runway)?);

    for end in [RunwayEnd::Approach, RunwayEnd::Opposite] {
        println!("asymmetric ({end})");
        print_set(&composer.asymmetric(&runway, end)?);
    }
    Ok(())
}

fn print_set(set: &ZoneSet) {
    for zone in set {
        match zone.geometry.as_area() {
            Some(region) => {
                let area = region.unsigned_area();
                match region.bounding_rect() {
                    Some(rect) => println!(
                        "  {:<18} {} part(s), area {area:.1}, x [{:.1}, {:.1}], y [{:.1}, {:.1}]",
                        zone.name.label(),
                        region.0.len(),
                        rect.min().x,
                        rect.max().x,
                        rect.min().y,
                        rect.max().y,
                    ),
                    None => println!("  {:<18} empty", zone.name.label()),
                }
            }
            None => println!("  {}", zone.name.label()),
        }
    }
}
