use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::data::model::SpectrumRecord;

/// Typed answer at the selection prompt to skip the current object.
pub const SKIP_TOKEN: &str = "-q";

/// Result of the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Ordinal index into the listed spectra.
    Chosen(usize),
    Skipped,
}

/// List `spectra` on `output` and block on `input` until the operator
/// picks an index or skips.
///
/// Invalid answers re-prompt; end of input is treated as a skip.
pub fn select_spectrum<R: BufRead, W: Write>(
    object_id: &str,
    spectra: &[SpectrumRecord],
    mut input: R,
    mut output: W,
) -> Result<Selection> {
    writeln!(output, "Spectra for {object_id}:")?;
    for (idx, sp) in spectra.iter().enumerate() {
        writeln!(output, "{idx}) {} {}", sp.observed_at, sp.instrument_name)?;
    }

    let mut buf = Vec::new();
    loop {
        write!(
            output,
            "Choose #-index spectrum to download ({SKIP_TOKEN} to skip): "
        )?;
        output.flush()?;

        buf.clear();
        let n = input
            .read_until(b'\n', &mut buf)
            .context("reading selection")?;
        if n == 0 {
            log::warn!("No selection for {object_id} (end of input), skipping");
            return Ok(Selection::Skipped);
        }

        // Undecodable bytes fall through to the invalid-choice path.
        let line = String::from_utf8_lossy(&buf);
        match parse_choice(line.trim(), spectra.len()) {
            Some(selection) => return Ok(selection),
            None => writeln!(
                output,
                "Invalid choice '{}': enter 0..{} or {SKIP_TOKEN}",
                line.trim(),
                spectra.len().saturating_sub(1)
            )?,
        }
    }
}

fn parse_choice(answer: &str, count: usize) -> Option<Selection> {
    if answer == SKIP_TOKEN {
        return Some(Selection::Skipped);
    }
    answer
        .parse::<usize>()
        .ok()
        .filter(|&idx| idx < count)
        .map(Selection::Chosen)
}
