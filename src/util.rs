use anyhow::{anyhow, Context, Result};
use itertools::Itertools;

/// Parses a `HH:MM:SS[.ffffff]` clock string into fractional seconds.
pub(crate) fn parse_clock(clock: &str) -> Result<f64> {
    let (h, m, s) = clock
        .split(':')
        .collect_tuple()
        .with_context(|| format!("Malformed clock string: {clock:?}"))?;
    let hours = h
        .parse::<u32>()
        .with_context(|| format!("Malformed hour field in clock string: {clock:?}"))?;
    let minutes = m
        .parse::<u32>()
        .with_context(|| format!("Malformed minute field in clock string: {clock:?}"))?;
    let seconds = s
        .parse::<f64>()
        .with_context(|| format!("Malformed second field in clock string: {clock:?}"))?;
    if !(0.0..60.0).contains(&seconds) {
        return Err(anyhow!("Second field out of range in clock string: {clock:?}"));
    }
    Ok(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds)
}
