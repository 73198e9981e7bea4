use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use coursework_core::geometry::{Figure, Shape};
use coursework_core::report::{
    bounds, plot_containment, plot_figures, render_report, sample_points,
};

use crate::config::GeometryConfig;

/// Where to write the optional geometry artifacts.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeometryOutputs<'a> {
    pub plot: Option<&'a Path>,
    pub containment: Option<&'a Path>,
    pub report: Option<&'a Path>,
}

/// Describe every configured figure and write the requested plots.
pub fn run_geometry<W: Write>(
    config: &GeometryConfig,
    outputs: GeometryOutputs<'_>,
    out: &mut W,
) -> Result<()> {
    for figure in &config.figures {
        writeln!(out, "{}", figure)?;
        write!(
            out,
            "  area: {:.2}, circumference: {:.2}",
            figure.area(),
            figure.circumference()
        )?;
        match figure.volume() {
            Some(volume) => writeln!(out, ", volume: {:.2}", volume)?,
            None => writeln!(out)?,
        }
    }

    for (i, a) in config.figures.iter().enumerate() {
        for b in &config.figures[i + 1..] {
            if a == b {
                writeln!(out, "A {} and a {} of equal size.", a.name(), b.name())?;
            }
        }
    }

    let plot = plot_figures(&config.figures, &config.title);
    if let Some(path) = outputs.plot {
        write_plot(path, &plot.to_html())?;
        log::info!("[Coursework] Wrote figure plot to {:?}", path);
    }

    if let Some(path) = outputs.containment {
        let figure: &Figure = config
            .figures
            .first()
            .context("No figures configured for the containment plot")?;
        let points = sample_points(config.samples, bounds(figure, config.margin), config.seed)
            .with_context(|| format!("Invalid sampling margin: {}", config.margin))?;
        let [_, _, z] = figure.centre();
        let inside = points
            .iter()
            .filter(|&&(x, y)| figure.contains([x, y, z]))
            .count();
        writeln!(
            out,
            "{} of {} sampled points are inside the {}.",
            inside,
            points.len(),
            figure.name()
        )?;
        let title = format!("Points inside the {}", figure.name());
        write_plot(path, &plot_containment(figure, &points, &title).to_html())?;
        log::info!("[Coursework] Wrote containment plot to {:?}", path);
    }

    if let Some(path) = outputs.report {
        let html = render_report(&config.title, &config.figures, &plot);
        std::fs::write(path, html)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;
        log::info!("[Coursework] Wrote report to {:?}", path);
    }

    Ok(())
}

fn write_plot(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html)
        .with_context(|| format!("Failed to write plot: {}", path.display()))
}
