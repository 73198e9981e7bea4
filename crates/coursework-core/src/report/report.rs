use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::geometry::{Figure, Shape};

/// One row of the figure summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureSummary {
    pub kind: &'static str,
    pub centre: [f64; 3],
    pub area: f64,
    pub circumference: f64,
    pub volume: Option<f64>,
    pub description: String,
}

impl From<&Figure> for FigureSummary {
    fn from(figure: &Figure) -> Self {
        Self {
            kind: figure.name(),
            centre: figure.centre(),
            area: figure.area(),
            circumference: figure.circumference(),
            volume: figure.volume(),
            description: figure.to_string(),
        }
    }
}

pub fn summarize(figures: &[Figure]) -> Vec<FigureSummary> {
    figures.iter().map(FigureSummary::from).collect()
}

/// Render a standalone HTML page with a summary table and the plot.
pub fn render_report(title: &str, figures: &[Figure], plot: &Plot) -> String {
    let rows = summarize(figures);
    let generated = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    let page: Markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
                script src="https://cdn.plot.ly/plotly-2.12.1.min.js" {}
                style { "table { border-collapse: collapse; } td, th { padding: 4px 10px; border: 1px solid #ccc; }" }
            }
            body {
                h1 { (title) }
                p { "Generated " (generated) }
                table {
                    thead {
                        tr {
                            th { "Kind" }
                            th { "Centre" }
                            th { "Area" }
                            th { "Circumference" }
                            th { "Volume" }
                            th { "Description" }
                        }
                    }
                    tbody {
                        @for row in &rows {
                            tr {
                                td { (row.kind) }
                                td { (format!("({}, {}, {})", row.centre[0], row.centre[1], row.centre[2])) }
                                td { (format!("{:.2}", row.area)) }
                                td { (format!("{:.2}", row.circumference)) }
                                td {
                                    @if let Some(volume) = row.volume {
                                        (format!("{:.2}", volume))
                                    } @else {
                                        "-"
                                    }
                                }
                                td { (row.description) }
                            }
                        }
                    }
                }
                div { (PreEscaped(plot.to_inline_html(Some("figures")))) }
            }
        }
    };
    page.into_string()
}
