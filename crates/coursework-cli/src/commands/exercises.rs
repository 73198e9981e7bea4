use std::io::Write;

use anyhow::Result;

use coursework_core::math::{cathetus, distance_2d, distance_3d, hypotenuse, Line};
use coursework_core::stats::accuracy;

use crate::config::ExerciseConfig;

/// Print the result of every week 34 exercise.
pub fn run_exercises<W: Write>(config: &ExerciseConfig, out: &mut W) -> Result<()> {
    let p = config.precision;

    let (a, b) = config.legs;
    writeln!(out, "The length of the hypotenuse is: {:.*}.", p, hypotenuse(a, b)?)?;

    let (leg, hyp) = config.cathetus_and_hypotenuse;
    writeln!(out, "The length of the cathetus is: {:.*}.", p, cathetus(leg, hyp)?)?;

    let [p1, p2] = config.line_points;
    let line = Line::through(p1, p2)?;
    writeln!(out, "The k-value is: {:.*}.", p, line.slope)?;
    writeln!(out, "The m-value is: {:.*}.", p, line.intercept)?;

    let [a, b] = config.plane_points;
    writeln!(
        out,
        "The euclidean distance is: {:.*} length units.",
        p,
        distance_2d(a, b)?
    )?;

    let [a, b] = config.space_points;
    writeln!(
        out,
        "The euclidean distance in 3D is: {:.*} length units.",
        p,
        distance_3d(a, b)?
    )?;

    writeln!(
        out,
        "The accuracy of the weather prediction model is: {:.*}.",
        p,
        accuracy(config.correct_predictions, config.total_predictions)?
    )?;

    let cm = &config.confusion;
    writeln!(
        out,
        "The accuracy of the fire prediction model is: {:.*}.",
        p + 1,
        cm.accuracy()?
    )?;
    if let Some(fnr) = cm.false_negative_rate() {
        log::debug!("fire model misses {:.1}% of actual fires", fnr * 100.0);
        if cm.fn_ > cm.fp {
            writeln!(
                out,
                "The fire model produces more false negatives ({}) than false positives ({}).",
                cm.fn_, cm.fp
            )?;
        }
    }
    Ok(())
}
