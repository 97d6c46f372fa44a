use crate::errors::{AppErrors, AppResult};
use crate::models::csv_models::fee_row::{OutputRow, STABILITY_FEE_MUL, TOTAL_FEE_MUL};
use crate::models::fee_rates::FeeMultipliers;
use crate::services::accrual_service::describe_period;
use csv::WriterBuilder;
use std::io::Write;

/// Writes the two multipliers as labelled lines for manual comparison.
///
/// # Arguments
/// * `m` - The computed multipliers.
/// * `out` - Destination, usually a locked stdout.
///
/// # Returns
/// * `AppResult<()>` - `AppErrors::Io` if the destination cannot be written.
pub fn emit_text<W: Write>(m: &FeeMultipliers, mut out: W) -> AppResult<()> {
    let period = describe_period(m.seconds);
    writeln!(
        out,
        "Expected {STABILITY_FEE_MUL} after {period}: {}",
        m.stability_fee_mul
    )
    .map_err(|e| AppErrors::Io(format!("write text: {e}")))?;
    writeln!(
        out,
        "Expected {TOTAL_FEE_MUL} after {period}: {}",
        m.total_fee_mul
    )
    .map_err(|e| AppErrors::Io(format!("write text: {e}")))?;
    out.flush()
        .map_err(|e| AppErrors::Io(format!("flush text: {e}")))?;
    Ok(())
}

/// Writes the two multipliers as CSV rows with a header.
pub fn emit_csv<W: Write>(m: &FeeMultipliers, out: W) -> AppResult<()> {
    let mut wtr = WriterBuilder::new().has_headers(true).from_writer(out);

    for row in OutputRow::rows(m) {
        wtr.serialize(row)
            .map_err(|e| AppErrors::Io(format!("write csv: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppErrors::Io(format!("flush csv: {e}")))?;
    Ok(())
}
