use itertools::Itertools;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("no color is specified for residue(s) {}", .0.iter().join(" & "))]
    InvalidResidue(Vec<char>),
    #[error(
        "please provide a sequence with a maximum of {max} residues, the provided sequence length is {len}"
    )]
    SequenceTooLong { max: usize, len: usize },
    #[error("the image size must be at least 1 pixel, found {0}")]
    CanvasSize(u32),
    #[error("failed to write the helical wheel to {path:?}")]
    Render {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
pub type Result<T> = std::result::Result<T, Error>;
