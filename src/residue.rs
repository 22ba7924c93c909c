//! Residue colors according to physicochemical properties

use plotters::style::RGBColor;
use std::collections::BTreeMap;
use strum_macros::{Display, EnumIter};

/// Physicochemical class of an amino acid
#[derive(EnumIter, Display, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ResidueClass {
    #[strum(to_string = "gray")]
    PolarNeutral,
    #[strum(to_string = "gold")]
    Hydrophobic,
    #[strum(to_string = "darkcyan")]
    Aromatic,
    #[strum(to_string = "darkred")]
    NegativelyCharged,
    #[strum(to_string = "steelblue")]
    PositivelyCharged,
    /// Glycine and proline
    #[strum(to_string = "orange")]
    Conformational,
    #[strum(to_string = "white")]
    Unknown,
}

/// The 20 standard amino acids and the `X` wildcard
pub const RESIDUE_COLORS: [(char, ResidueClass); 21] = [
    ('A', ResidueClass::Hydrophobic),
    ('C', ResidueClass::PolarNeutral),
    ('D', ResidueClass::NegativelyCharged),
    ('E', ResidueClass::NegativelyCharged),
    ('F', ResidueClass::Aromatic),
    ('G', ResidueClass::Conformational),
    ('H', ResidueClass::PositivelyCharged),
    ('I', ResidueClass::Hydrophobic),
    ('K', ResidueClass::PositivelyCharged),
    ('L', ResidueClass::Hydrophobic),
    ('M', ResidueClass::Hydrophobic),
    ('N', ResidueClass::PolarNeutral),
    ('P', ResidueClass::Conformational),
    ('Q', ResidueClass::PolarNeutral),
    ('R', ResidueClass::PositivelyCharged),
    ('S', ResidueClass::PolarNeutral),
    ('T', ResidueClass::PolarNeutral),
    ('V', ResidueClass::Hydrophobic),
    ('W', ResidueClass::Aromatic),
    ('Y', ResidueClass::Aromatic),
    ('X', ResidueClass::Unknown),
];

impl ResidueClass {
    /// Fill color of the residue disc
    pub fn color(&self) -> RGBColor {
        match self {
            ResidueClass::PolarNeutral => RGBColor(128, 128, 128),
            ResidueClass::Hydrophobic => RGBColor(255, 215, 0),
            ResidueClass::Aromatic => RGBColor(0, 139, 139),
            ResidueClass::NegativelyCharged => RGBColor(139, 0, 0),
            ResidueClass::PositivelyCharged => RGBColor(70, 130, 180),
            ResidueClass::Conformational => RGBColor(255, 165, 0),
            ResidueClass::Unknown => RGBColor(255, 255, 255),
        }
    }
}

/// Returns the residue color table
pub fn residue_colors() -> BTreeMap<char, ResidueClass> {
    RESIDUE_COLORS.iter().cloned().collect()
}
