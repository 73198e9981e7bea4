use std::f64::consts::PI;

use itertools_num::linspace;
use plotly::common::{Line, Marker, Mode};
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CourseworkError, Result};
use crate::geometry::{Figure, Shape};

/// Points used to draw the outline of a round figure.
const OUTLINE_RESOLUTION: usize = 200;

/// Outline of a figure in the xy plane, as a closed polyline.
///
/// Spheres are drawn as their great circle and cubes as the square face
/// through their centre.
pub fn outline(figure: &Figure) -> (Vec<f64>, Vec<f64>) {
    match figure {
        Figure::Circle(c) => circle_outline(c.x(), c.y(), c.radius()),
        Figure::Sphere(s) => circle_outline(s.x(), s.y(), s.radius()),
        Figure::Rectangle(r) => polygon(&r.corners()),
        Figure::Cube(c) => polygon(&c.face().corners()),
    }
}

fn circle_outline(x: f64, y: f64, radius: f64) -> (Vec<f64>, Vec<f64>) {
    linspace(0.0, 2.0 * PI, OUTLINE_RESOLUTION)
        .map(|theta| (x + radius * theta.cos(), y + radius * theta.sin()))
        .unzip()
}

fn polygon(corners: &[(f64, f64)]) -> (Vec<f64>, Vec<f64>) {
    corners
        .iter()
        .chain(corners.first())
        .copied()
        .unzip()
}

/// A y axis locked to the x axis so circles stay round.
fn equal_scale_axis(title: &str) -> Axis {
    Axis::new().title(title).scale_anchor("x").scale_ratio(1.0)
}

/// Plot the outlines and centres of a set of figures.
pub fn plot_figures(figures: &[Figure], title: &str) -> Plot {
    let mut plot = Plot::new();

    for (idx, figure) in figures.iter().enumerate() {
        let (xs, ys) = outline(figure);
        let label = format!("{} #{}", figure.name(), idx + 1);
        plot.add_trace(
            Scatter::new(xs, ys)
                .mode(Mode::Lines)
                .name(&label),
        );
    }

    let (cx, cy): (Vec<f64>, Vec<f64>) = figures
        .iter()
        .map(|f| {
            let [x, y, _] = f.centre();
            (x, y)
        })
        .unzip();
    if !cx.is_empty() {
        plot.add_trace(
            Scatter::new(cx, cy)
                .mode(Mode::Markers)
                .name("Centres")
                .marker(Marker::new().color("black").size(6)),
        );
    }

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("x"))
            .y_axis(equal_scale_axis("y")),
    );

    plot
}

/// Draw a figure with sample points split into inside and outside.
///
/// Points are tested in the plane z = centre z of the figure.
pub fn plot_containment(figure: &Figure, points: &[(f64, f64)], title: &str) -> Plot {
    let [_, _, z] = figure.centre();
    let (inside, outside): (Vec<(f64, f64)>, Vec<(f64, f64)>) = points
        .iter()
        .copied()
        .partition(|&(x, y)| figure.contains([x, y, z]));

    let mut plot = Plot::new();
    let (xs, ys) = outline(figure);
    plot.add_trace(
        Scatter::new(xs, ys)
            .mode(Mode::Lines)
            .name(figure.name())
            .line(Line::new().color("black")),
    );

    let (ix, iy): (Vec<f64>, Vec<f64>) = inside.into_iter().unzip();
    plot.add_trace(
        Scatter::new(ix, iy)
            .mode(Mode::Markers)
            .name("Inside")
            .marker(Marker::new().color("rgba(44, 160, 44, 0.8)")),
    );

    let (ox, oy): (Vec<f64>, Vec<f64>) = outside.into_iter().unzip();
    plot.add_trace(
        Scatter::new(ox, oy)
            .mode(Mode::Markers)
            .name("Outside")
            .marker(Marker::new().color("rgba(214, 39, 40, 0.8)")),
    );

    plot.set_layout(
        Layout::new()
            .title(title)
            .x_axis(Axis::new().title("x"))
            .y_axis(equal_scale_axis("y")),
    );

    plot
}

/// Axis-aligned box `(x_min, x_max, y_min, y_max)` around a figure, padded
/// by `margin` on every side.
pub fn bounds(figure: &Figure, margin: f64) -> (f64, f64, f64, f64) {
    let (xs, ys) = outline(figure);
    let fold = |v: &[f64]| {
        v.iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            })
    };
    let (x_min, x_max) = fold(&xs);
    let (y_min, y_max) = fold(&ys);
    (x_min - margin, x_max + margin, y_min - margin, y_max + margin)
}

/// Draw `n` uniformly distributed points inside `bounds`, reproducibly.
///
/// Fails with [`CourseworkError::EmptyRange`] when either axis range is
/// inverted or not finite, e.g. after padding with a large negative margin.
pub fn sample_points(
    n: usize,
    bounds: (f64, f64, f64, f64),
    seed: u64,
) -> Result<Vec<(f64, f64)>> {
    let (x_min, x_max, y_min, y_max) = bounds;
    for (min, max) in [(x_min, x_max), (y_min, y_max)] {
        if !(min <= max && (max - min).is_finite()) {
            return Err(CourseworkError::EmptyRange { min, max });
        }
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok((0..n)
        .map(|_| (rng.gen_range(x_min..=x_max), rng.gen_range(y_min..=y_max)))
        .collect())
}
