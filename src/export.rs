//! CSV export of price curves.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::models::curve::CurveSet;

#[derive(Debug, Serialize)]
struct CurveRow {
    underlying: f64,
    call: f64,
    put: f64,
}

/// Writes one `underlying,call,put` row per sample, with a header line.
pub fn write_csv<W: Write>(curves: &CurveSet, writer: W) -> Result<()> {
    if curves.call.len() != curves.put.len() {
        bail!(
            "call and put curves differ in length ({} vs {})",
            curves.call.len(),
            curves.put.len()
        );
    }

    let mut wtr = csv::Writer::from_writer(writer);
    for (call, put) in curves.call.iter().zip(curves.put.iter()) {
        if call.underlying_price != put.underlying_price {
            bail!(
                "call and put curves are sampled on different grids (S={} vs S={})",
                call.underlying_price,
                put.underlying_price
            );
        }
        wtr.serialize(CurveRow {
            underlying: call.underlying_price,
            call: call.price,
            put: put.price,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// [`write_csv`] into a file at `path`.
pub fn write_csv_file(curves: &CurveSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    write_csv(curves, file).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = curves.call.len(), "curves exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::curve::{price_curves, MarketInputs};

    #[test]
    fn test_write_csv_rows() {
        let inputs = MarketInputs::new(100.0, 1.0, 0.05, 0.20).unwrap();
        let curves = price_curves(&[90.0, 100.0, 110.0], &inputs).unwrap();

        let mut out = Vec::new();
        write_csv(&curves, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "underlying,call,put");
        assert!(lines[2].starts_with("100.0,10.45"));
    }

    #[test]
    fn test_write_csv_rejects_mismatched_grids() {
        let inputs = MarketInputs::new(100.0, 1.0, 0.05, 0.20).unwrap();
        let mut curves = price_curves(&[90.0, 100.0], &inputs).unwrap();
        curves.put.points.pop();
        assert!(write_csv(&curves, Vec::new()).is_err());
    }
}
