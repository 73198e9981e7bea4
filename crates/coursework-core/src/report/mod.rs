//! Plotting and HTML reporting for shape collections.
pub mod plots;
pub mod report;

pub use plots::{bounds, outline, plot_containment, plot_figures, sample_points};
pub use report::{render_report, summarize, FigureSummary};
