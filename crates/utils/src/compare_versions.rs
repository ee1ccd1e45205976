use anyhow::{Context, Result};
use std::cmp::Ordering;

/// Compare two dot-separated numeric version strings.
///
/// Components are compared left to right as integers; missing components
/// count as 0, so "1.0" and "1.0.0" are equal.
///
/// # Errors
/// Returns error if a component is not a non-negative integer.
pub fn compare_versions(left: &str, right: &str) -> Result<Ordering> {
    let left = parse_components(left)?;
    let right = parse_components(right)?;

    for index in 0..left.len().max(right.len()) {
        let left_part = left.get(index).copied().unwrap_or(0);
        let right_part = right.get(index).copied().unwrap_or(0);
        match left_part.cmp(&right_part) {
            Ordering::Equal => {}
            ordering => return Ok(ordering),
        }
    }
    Ok(Ordering::Equal)
}

fn parse_components(version: &str) -> Result<Vec<u64>> {
    version
        .trim()
        .split('.')
        .map(|part| {
            part.parse::<u64>()
                .context(format!("Invalid version component '{part}' in '{version}'"))
        })
        .collect()
}
