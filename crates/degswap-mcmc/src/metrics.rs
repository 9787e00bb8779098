use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::diagnostics::Diagnostics;

/// Writes per-step diagnostics of one or more chains to a CSV file.
///
/// Rows are ordered by chain, then step. `swap_p` is left blank for steps
/// that never reached the acceptance draw.
pub fn write_diagnostics_csv<P: AsRef<Path>>(
    path: P,
    chains: &[&Diagnostics],
) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_diagnostics(&mut file, chains)?;
    file.flush()
}

/// Writes the CSV rows to an arbitrary writer.
pub fn write_diagnostics<W: Write>(out: &mut W, chains: &[&Diagnostics]) -> std::io::Result<()> {
    writeln!(
        out,
        "chain,step,same_edge,is_checkerboard,is_not_struct_zeros,can_swap,did_swap,swap_p"
    )?;
    for (chain, diagnostics) in chains.iter().enumerate() {
        for step in 0..diagnostics.len() {
            let swap_p = diagnostics
                .swap_p
                .get(step)
                .copied()
                .flatten()
                .map(|p| format!("{p:.6}"))
                .unwrap_or_default();
            writeln!(
                out,
                "{},{},{},{},{},{},{},{}",
                chain,
                step,
                flag(&diagnostics.same_edge, step),
                flag(&diagnostics.is_checkerboard, step),
                flag(&diagnostics.is_not_struct_zeros, step),
                flag(&diagnostics.can_swap, step),
                flag(&diagnostics.did_swap, step),
                swap_p
            )?;
        }
    }
    Ok(())
}

fn flag(column: &[bool], step: usize) -> u8 {
    u8::from(column.get(step).copied().unwrap_or(false))
}
