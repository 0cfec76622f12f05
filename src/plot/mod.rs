//! PNG rendering of chart summaries (feature = "plots").
//!
//! Thin `plotters` glue: every chart draws exactly the statistics carried by
//! its summary type, nothing is recomputed here.

use std::path::Path;

use plotters::prelude::*;

use crate::diagnostics::{EmblemSummary, FactorImportance, LiftTable};

const CHART_SIZE: (u32, u32) = (640, 480);

/// Render an emblem chart: count bars on the primary axis, mean actual (red)
/// and mean predicted (green) lines on a secondary axis.
pub fn plot_emblem_png<P: AsRef<Path>>(
    path: P,
    summary: &EmblemSummary,
) -> Result<(), Box<dyn std::error::Error>> {
    if summary.groups.is_empty() {
        return Err("emblem summary has no groups".into());
    }
    let n = summary.groups.len();
    let max_count = summary.max_count() as f64;
    let (mean_lo, mean_hi) = mean_range(
        summary
            .groups
            .iter()
            .flat_map(|g| [g.mean_actual, g.mean_predicted]),
    );

    let root = BitMapBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(&summary.factor, ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(45)
        .right_y_label_area_size(45)
        .build_cartesian_2d(0f64..n as f64, 0f64..max_count * 1.05)?
        .set_secondary_coord(0f64..n as f64, mean_lo..mean_hi);

    let groups = &summary.groups;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            groups
                .get(*x as usize)
                .map(|g| g.label.clone())
                .unwrap_or_default()
        })
        .y_desc("count")
        .draw()?;
    chart.configure_secondary_axes().y_desc("mean").draw()?;

    chart.draw_series(groups.iter().enumerate().map(|(i, g)| {
        Rectangle::new(
            [(i as f64 + 0.1, 0.0), (i as f64 + 0.9, g.count as f64)],
            BLUE.mix(0.4).filled(),
        )
    }))?;

    let actual: Vec<(f64, f64)> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| (i as f64 + 0.5, g.mean_actual))
        .collect();
    let predicted: Vec<(f64, f64)> = groups
        .iter()
        .enumerate()
        .map(|(i, g)| (i as f64 + 0.5, g.mean_predicted))
        .collect();
    chart
        .draw_secondary_series(LineSeries::new(actual, &RED))?
        .label("actual")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));
    chart
        .draw_secondary_series(LineSeries::new(predicted, &GREEN))?
        .label("predicted")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Render a lift curve: mean actual (red) vs. mean predicted (green) across
/// prediction percentile bands.
pub fn plot_lift_png<P: AsRef<Path>>(
    path: P,
    table: &LiftTable,
) -> Result<(), Box<dyn std::error::Error>> {
    if table.bands.is_empty() {
        return Err("lift table has no bands".into());
    }
    let n = table.bands.len();
    let (y_lo, y_hi) = mean_range(
        table
            .bands
            .iter()
            .flat_map(|b| [b.mean_actual, b.mean_predicted]),
    );

    let root = BitMapBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Lift", ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(45)
        .build_cartesian_2d(0f64..n as f64, y_lo..y_hi)?;

    let bands = &table.bands;
    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            bands
                .get(*x as usize)
                .map(|b| b.label())
                .unwrap_or_default()
        })
        .x_desc("prediction band")
        .y_desc("mean")
        .draw()?;

    let actual: Vec<(f64, f64)> = bands
        .iter()
        .enumerate()
        .map(|(i, b)| (i as f64 + 0.5, b.mean_actual))
        .collect();
    let predicted: Vec<(f64, f64)> = bands
        .iter()
        .enumerate()
        .map(|(i, b)| (i as f64 + 0.5, b.mean_predicted))
        .collect();
    chart
        .draw_series(LineSeries::new(actual, &RED))?
        .label("Actual")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED.filled()));
    chart
        .draw_series(LineSeries::new(predicted, &GREEN))?
        .label("Model")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN.filled()));
    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    root.present()?;
    Ok(())
}

/// Render a horizontal bar chart of the `top_k` most important factors,
/// most important on top.
pub fn plot_importance_png<P: AsRef<Path>>(
    path: P,
    importance: &FactorImportance,
    top_k: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let top = importance.top(top_k);
    if top.is_empty() {
        return Err("factor importance ranking is empty".into());
    }
    let k = top.len();
    let x_hi = top.iter().map(|(_, v)| *v).fold(0.0f64, f64::max);
    let x_lo = top.iter().map(|(_, v)| *v).fold(0.0f64, f64::min);
    let pad = ((x_hi - x_lo).abs()).max(1e-12) * 0.05;

    let root = BitMapBackend::new(path.as_ref(), CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Factor importance", ("sans-serif", 22))
        .x_label_area_size(45)
        .y_label_area_size(45)
        .build_cartesian_2d((x_lo - pad)..(x_hi + pad), 0f64..k as f64)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_y_axis()
        .x_desc("importance")
        .draw()?;

    // row 0 at the bottom, so the strongest factor draws at the top
    chart.draw_series(top.iter().enumerate().map(|(i, (_, value))| {
        let row = (k - 1 - i) as f64;
        Rectangle::new(
            [(value.min(0.0), row + 0.15), (value.max(0.0), row + 0.85)],
            BLUE.mix(0.6).filled(),
        )
    }))?;
    chart.draw_series(top.iter().enumerate().map(|(i, (name, _))| {
        let row = (k - 1 - i) as f64;
        Text::new(
            name.clone(),
            (x_lo - pad + 2.0 * pad * 0.1, row + 0.5),
            ("sans-serif", 15).into_font(),
        )
    }))?;
    root.present()?;
    Ok(())
}

/// Padded y-range covering a set of means, never zero-width.
fn mean_range(means: impl Iterator<Item = f64>) -> (f64, f64) {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for m in means {
        lo = lo.min(m);
        hi = hi.max(m);
    }
    if lo > hi {
        return (0.0, 1.0);
    }
    let pad = ((hi - lo).abs()).max(1e-12) * 0.05;
    (lo.min(0.0) - pad, hi + pad)
}
