//! Spline sampler — edits a curve the way an editor would and prints the result.
//!
//! Usage:
//! ```text
//! cargo run --example sample                      # default 11 samples
//! cargo run --example sample -- 21                # custom sample count
//! RUST_LOG=hermite_spline=debug cargo run --example sample
//! ```

use hermite_spline::tessellation::TessellationParams;
use hermite_spline::{HermiteSpline, SplineError};

fn main() -> Result<(), SplineError> {
    // Default: WARN for everything, INFO for hermite_spline.
    // Override with RUST_LOG env var (e.g. RUST_LOG=hermite_spline=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("sample=info".parse().unwrap_or_default())
        .add_directive("hermite_spline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let count: u32 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .filter(|&n| n >= 2)
        .unwrap_or(11);

    // Every edit yields a new value, so the history doubles as an undo stack.
    let mut spline = HermiteSpline::new();
    let mut history = Vec::new();
    let edits: [&dyn Fn(&HermiteSpline) -> Result<HermiteSpline, SplineError>; 4] = [
        &|s: &HermiteSpline| s.insert_point(0.5, 0.0),
        &|s: &HermiteSpline| s.move_point(1, 0.4, 1.3),
        &|s: &HermiteSpline| s.set_tangent(1, 1.0, -2.0),
        &|s: &HermiteSpline| s.insert_point(0.75, 0.0),
    ];
    for edit in edits {
        let next = edit(&spline)?;
        tracing::info!(points = next.point_count(), "applied edit");
        history.push(std::mem::replace(&mut spline, next));
    }

    println!("flat: {:?}", spline.to_flat());
    for i in 0..count {
        let x = f64::from(i) / f64::from(count - 1);
        println!("x = {x:.3}  y = {:+.5}  dy/dx = {:+.5}", spline.sample(x)?, spline.slope_at(x)?);
    }

    let range = spline.extrema();
    println!("extrema: min = {:+.5}, max = {:+.5}", range.min, range.max);

    let polyline = spline.tessellate(TessellationParams::default())?;
    println!("tessellated into {} vertices", polyline.points.len());

    if let Some(undone) = history.last() {
        println!("one step back: {} points", undone.point_count());
    }
    Ok(())
}
