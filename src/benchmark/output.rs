use crate::benchmark::sweep::SweepReport;
use crate::prelude::*;
use csv::Writer;
use std::io;

#[derive(Serialize, Debug)]
struct SummaryRow<'a> {
    method: &'a str,
    max_abs_error: f64,
    argmax: f64,
    mean_abs_error: f64,
    mse: f64,
    error_bound: f64,
    seams: usize,
}

/// One row per sample: `x, exact, <method>...`.
pub fn write_sweep<W: io::Write>(reports: &[SweepReport], writer: W) -> Result<()> {
    let Some(first) = reports.first() else {
        return Err(ApproxError::InvalidConfiguration(
            "no sweep reports to write".to_string(),
        ));
    };
    if let Some(r) = reports.iter().find(|r| r.x != first.x) {
        return Err(ApproxError::InvalidInputShape(format!(
            "report '{}' was sampled on different points than '{}'",
            r.name, first.name
        )));
    }

    let mut wtr = Writer::from_writer(writer);

    let mut header = vec!["x".to_string(), "exact".to_string()];
    header.extend(reports.iter().map(|r| r.name.clone()));
    wtr.write_record(&header)?;

    for (i, x) in first.x.iter().enumerate() {
        let mut record = vec![x.to_string(), x.tanh().to_string()];
        record.extend(reports.iter().map(|r| r.output[i].to_string()));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_summary<W: io::Write>(reports: &[SweepReport], writer: W) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for r in reports {
        wtr.serialize(SummaryRow {
            method: &r.name,
            max_abs_error: r.max_abs_error,
            argmax: r.argmax,
            mean_abs_error: r.mean_abs_error,
            mse: r.mse,
            error_bound: r.error_bound,
            seams: r.seams.len(),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_sweep_csv(reports: &[SweepReport], file_path: &str) -> Result<()> {
    write_sweep(reports, std::fs::File::create(file_path)?)
}

pub fn write_summary_csv(reports: &[SweepReport], file_path: &str) -> Result<()> {
    write_summary(reports, std::fs::File::create(file_path)?)
}
