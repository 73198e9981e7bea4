use std::io::Write;

use anyhow::Result;

use coursework_core::math::Vector;

use crate::config::VectorConfig;

/// Show the overloaded vector operators on the configured operands.
pub fn run_vector<W: Write>(config: &VectorConfig, out: &mut W) -> Result<()> {
    let a = Vector::from_vec(config.a.clone())?;
    let b = Vector::from_vec(config.b.clone())?;
    let k = config.scalar;

    writeln!(out, "a = {}", a.repr())?;
    writeln!(out, "b = {}", b.repr())?;
    writeln!(out, "len(a) = {}", a.len())?;
    writeln!(out, "|a| = {:.3}", a.magnitude())?;

    match a.checked_add(&b) {
        Ok(sum) => {
            writeln!(out, "a + b = {}", sum)?;
            writeln!(out, "a - b = {}", &a - &b)?;
            writeln!(out, "a . b = {}", a.dot(&b))?;
            writeln!(out, "a == b: {}", a == b)?;
        }
        Err(e) => {
            log::warn!("Cannot combine a and b: {}", e);
            writeln!(out, "a and b cannot be combined: {}", e)?;
        }
    }

    writeln!(out, "a * {} = {}", k, &a * k)?;
    writeln!(out, "{} * a = {}", k, k * &a)?;
    writeln!(out, "a[0] = {}", a[0])?;
    Ok(())
}
