// Compare the fixed-step arclength estimate against a fine reference for a
// random open spline and its looped counterpart, and plot the absolute error
// per sampling step on log-log axes.

use bezier_spline::modules::arclength::estimate_length;
use bezier_spline::{pt, BezierSpline, ContinuityMode};
use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

const OUT_FILE: &str = "spline_arclength_convergence.png";
const SEGMENTS: usize = 6;
const REFERENCE_STEP: f64 = 1e-5;
const STEPS: [f64; 10] = [0.5, 0.25, 0.2, 0.1, 0.05, 0.02, 0.01, 0.005, 0.002, 0.001];
// log axes cannot show an exact zero
const ERROR_FLOOR: f64 = 1e-16;

fn random_spline(rng: &mut StdRng) -> Result<BezierSpline, Box<dyn std::error::Error>> {
    let jitter = Normal::<f64>::new(0.0, 1.5)?;
    let mut spline = BezierSpline::new();

    for _ in 1..SEGMENTS {
        let offset = pt!(
            1.0 + rng.sample(jitter).abs(),
            rng.sample(jitter),
            rng.sample(jitter)
        );
        spline.add_segment_with_offset(offset);
    }
    for (i, handle) in (1..spline.point_count() - 1)
        .filter(|i| !BezierSpline::is_anchor(*i))
        .enumerate()
    {
        let p = spline.control_point(handle)?;
        spline.set_control_point(handle, p + pt!(0, rng.sample(jitter), i as f64 * 0.1))?;
    }
    for anchor in (3..spline.point_count() - 1).step_by(3) {
        let mode = if rng.gen_bool(0.5) {
            ContinuityMode::Mirrored
        } else {
            ContinuityMode::Aligned
        };
        spline.set_continuity_mode(anchor, mode)?;
    }

    Ok(spline)
}

fn convergence(spline: &BezierSpline) -> Vec<(f64, f64)> {
    let reference = estimate_length(spline, REFERENCE_STEP);
    STEPS
        .iter()
        .map(|&step| {
            let error = (reference - estimate_length(spline, step)).abs();
            (step, error.max(ERROR_FLOOR))
        })
        .collect()
}

fn plot(series: &[(&str, Vec<(f64, f64)>)]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(OUT_FILE, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let y_min = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|p| p.1))
        .fold(f64::INFINITY, f64::min);
    let y_max = series
        .iter()
        .flat_map(|(_, points)| points.iter().map(|p| p.1))
        .fold(ERROR_FLOOR, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Spline arclength error vs sampling step",
            ("sans-serif", 24).into_font(),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(
            (STEPS[STEPS.len() - 1]..STEPS[0]).log_scale(),
            (y_min * 0.5..y_max * 2.0).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("step (global parameter)")
        .y_desc("absolute error")
        .draw()?;

    for (idx, (name, points)) in series.iter().enumerate() {
        let style = Palette99::pick(idx).to_rgba().stroke_width(2);
        chart
            .draw_series(LineSeries::new(points.iter().copied(), style.clone()))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style.clone()));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(20);
    let mut spline = random_spline(&mut rng)?;

    let open = convergence(&spline);
    let open_length = spline.length();
    spline.set_looped(true);
    let looped = convergence(&spline);
    let looped_length = spline.length();

    println!("open spline length:   {:.6}", open_length);
    println!("looped spline length: {:.6}", looped_length);
    for ((step, open_error), (_, looped_error)) in open.iter().zip(looped.iter()) {
        println!("step {:>7}: open {:.3e}, looped {:.3e}", step, open_error, looped_error);
    }

    plot(&[("open", open), ("looped", looped)])?;
    println!("wrote {}", OUT_FILE);

    Ok(())
}
