//! SVG rendering of a force-vs-distance sweep on log-log axes.

use crate::config::ChartConfig;
use crate::format::format_sci;
use anyhow::{bail, Context, Result};
use coulomb_core::ForceSweep;
use plotters::prelude::*;
use std::path::PathBuf;

pub fn chart_title(q1: f64, q2: f64) -> String {
    format!(
        "Coulomb's law: force between q1 = {} C and q2 = {} C",
        format_sci(q1, 2),
        format_sci(q2, 2)
    )
}

/// What happened to the chart for one sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Saved(PathBuf),
    /// Every force is zero, which a logarithmic axis cannot show.
    AllZero,
    /// No force is a finite positive number, e.g. the product of the charges overflowed.
    NoFiniteForce,
}

fn is_plottable(force: f64) -> bool {
    force.is_finite() && force > 0.0
}

/// Draws `sweep` to `chart.path`, or reports why a log-log chart is impossible
/// without touching the file system.
pub fn render_force_chart(
    sweep: &ForceSweep,
    q1: f64,
    q2: f64,
    chart: &ChartConfig,
) -> Result<ChartOutcome> {
    let (d_min, d_max) = match (sweep.distances.first(), sweep.distances.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => bail!("Cannot plot an empty sweep."),
    };
    if d_min <= 0.0 || d_max <= d_min {
        bail!("Chart distances must be positive and increasing.");
    }

    let plottable: Vec<f64> = sweep
        .forces
        .iter()
        .copied()
        .filter(|&f| is_plottable(f))
        .collect();
    if plottable.is_empty() {
        if sweep.forces.iter().all(|&f| f == 0.0) {
            log::warn!("Sweep force is zero everywhere; skipping log-scale chart");
            return Ok(ChartOutcome::AllZero);
        }
        log::warn!("Sweep has no finite positive force; skipping log-scale chart");
        return Ok(ChartOutcome::NoFiniteForce);
    }
    let f_min = plottable.iter().copied().fold(f64::INFINITY, f64::min);
    let f_max = plottable.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (f_lo, f_hi) = if f_max > f_min {
        (f_min, f_max)
    } else {
        (f_min * 0.5, f_max * 2.0)
    };

    let title = chart_title(q1, q2);
    let target = chart.path.display().to_string();
    log::info!("Rendering {} samples to {target}", sweep.len());
    draw(sweep, &title, (d_min, d_max), (f_lo, f_hi), chart)
        .with_context(|| format!("failed to render chart to {target}"))?;
    Ok(ChartOutcome::Saved(chart.path.clone()))
}

fn draw(
    sweep: &ForceSweep,
    title: &str,
    (d_min, d_max): (f64, f64),
    (f_min, f_max): (f64, f64),
    chart: &ChartConfig,
) -> Result<()> {
    let root = SVGBackend::new(&chart.path, (chart.width, chart.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut ctx = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 22))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d((d_min..d_max).log_scale(), (f_min..f_max).log_scale())?;

    ctx.configure_mesh()
        .x_desc("Distance (m)")
        .y_desc("Force (N)")
        .x_label_formatter(&|d: &f64| format_sci(*d, 1))
        .y_label_formatter(&|f: &f64| format_sci(*f, 1))
        .draw()?;

    let curve = sweep.samples().filter(|&(_, f)| is_plottable(f));
    ctx.draw_series(LineSeries::new(curve, BLUE.stroke_width(2)))?;

    root.present()?;
    Ok(())
}
