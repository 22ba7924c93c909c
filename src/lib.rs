//! Helical wheel diagrams of peptide sequences
//!
//! A helical wheel is the projection of an alpha-helix seen down its axis.
//! The residues of a sequence of up to 35 amino acids are laid on two
//! concentric rings of 18 slots, colored according to their physicochemical
//! properties and linked by bonds in sequence order.
//!
//! ```no_run
//! use helical_wheel::HelicalWheel;
//!
//! HelicalWheel::new("GLFDIIKKIAESF")?.render("hw.png")?;
//! # Ok::<(), helical_wheel::Error>(())
//! ```

mod error;
pub mod geometry;
pub mod residue;
pub mod tables;
pub mod validate;
mod wheel;

pub use error::{Error, Result};
pub use geometry::Position;
pub use residue::ResidueClass;
pub use tables::Round;
pub use wheel::{visualize, Bond, HelicalWheel, Residue, DEFAULT_CANVAS_SIZE};
