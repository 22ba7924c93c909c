use crate::{residue::residue_colors, Error, Result};
use itertools::Itertools;

/// Sequences must be strictly shorter than this
pub const MAX_SEQUENCE_LENGTH: usize = 36;

/// Checks that every residue of the sequence has a color
///
/// All the unknown residues are reported at once, each of them only once
pub fn check_residues(sequence: &str) -> Result<()> {
    let colors = residue_colors();
    let unknown: Vec<char> = sequence
        .chars()
        .filter(|code| !colors.contains_key(code))
        .unique()
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidResidue(unknown))
    }
}

/// Checks that the sequence is shorter than [MAX_SEQUENCE_LENGTH]
pub fn check_length(sequence: &str) -> Result<()> {
    let len = sequence.chars().count();
    if len < MAX_SEQUENCE_LENGTH {
        Ok(())
    } else {
        Err(Error::SequenceTooLong {
            max: MAX_SEQUENCE_LENGTH,
            len,
        })
    }
}

/// Runs all the sequence checks
pub fn validate(sequence: &str) -> Result<()> {
    check_residues(sequence)?;
    check_length(sequence)
}
