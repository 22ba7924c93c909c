use crate::{
    geometry::{positions, Position},
    residue::{residue_colors, ResidueClass},
    tables::{slot, slot_tables, Round},
    validate::validate,
    Error, Result,
};
use plotters::{
    coord::Shift,
    prelude::*,
    style::text_anchor::{HPos, Pos, VPos},
};
use std::{error::Error as StdError, path::Path};

/// Default image width and height in pixels
pub const DEFAULT_CANVAS_SIZE: u32 = 1000;
/// The plot spans `-VIEW..VIEW` along both axes
pub const VIEW: f64 = 15.;
/// Bonds are drawn closer to the center than the residues
pub const BOND_SCALE: f64 = 0.85;
/// Residue disc radius
pub const DISC_RADIUS: f64 = 1.4;
const DISC_OPACITY: f64 = 0.6;
const BOND_WIDTH: u32 = 2;
// font sizes are given in points for a 1000 pixels image at 100 dpi
const REFERENCE_DPI: f64 = 100.;
const LETTER_FONT: f64 = 30.;
const INDEX_FONT: f64 = 12.;
const LETTER_OFFSET: f64 = 0.15;
const INDEX_OFFSET: f64 = -0.9;

/// Segment between two consecutive residues along the helix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bond {
    /// 0-based bond index from the N-terminus
    pub index: usize,
    pub from: Position,
    pub to: Position,
    pub alpha: f64,
}

/// Residue placed on the wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Residue {
    pub code: char,
    /// 1-based sequence position
    pub index: usize,
    pub round: Round,
    /// 1-based wheel slot
    pub slot: usize,
    pub position: Position,
    pub class: ResidueClass,
}

/// Helical wheel of a peptide sequence
///
/// The sequence is validated when the wheel is created, so a [HelicalWheel]
/// can always be rendered.
#[derive(Debug, Clone)]
pub struct HelicalWheel {
    sequence: Vec<char>,
    size: u32,
}
impl HelicalWheel {
    /// Creates a new helical wheel from a one-letter amino acid sequence
    pub fn new<S: AsRef<str>>(sequence: S) -> Result<Self> {
        let sequence = sequence.as_ref();
        validate(sequence)?;
        Ok(Self {
            sequence: sequence.chars().collect(),
            size: DEFAULT_CANVAS_SIZE,
        })
    }
    /// Sets the image width and height in pixels
    pub fn canvas_size(self, size: u32) -> Self {
        Self { size, ..self }
    }
    /// Number of residues
    pub fn len(&self) -> usize {
        self.sequence.len()
    }
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
    /// Returns the bonds between consecutive residues
    ///
    /// Bonds follow the first round of the wheel and stop at the first residue
    /// of the second round, the opacity decreases from the N-terminus.
    /// There are at most 18 bonds: the last one crosses from residue 18 on the
    /// inner ring to residue 19 on the outer ring.
    pub fn bonds(&self) -> Vec<Bond> {
        let (_, second_round, wheel_order) = slot_tables();
        let n = self.len();
        let n_bond = n.saturating_sub(1).min(wheel_order.len());
        let alpha_step = 1. / n as f64;
        let positions = positions();
        let path: Vec<usize> = wheel_order
            .iter()
            .copied()
            .chain(second_round.first().map(|&(_, slot)| slot))
            .collect();
        path.windows(2)
            .take(n_bond)
            .enumerate()
            .map(|(index, w)| Bond {
                index,
                from: positions[w[0] - 1] * BOND_SCALE,
                to: positions[w[1] - 1] * BOND_SCALE,
                alpha: 1. - alpha_step * index as f64,
            })
            .collect()
    }
    /// Returns the residues with their wheel slots
    pub fn residues(&self) -> Vec<Residue> {
        let positions = positions();
        let colors = residue_colors();
        self.sequence
            .iter()
            .enumerate()
            .filter_map(|(i, &code)| {
                let index = i + 1;
                let slot = slot(index)?;
                Some(Residue {
                    code,
                    index,
                    round: Round::of(index),
                    slot,
                    position: positions[slot - 1],
                    class: *colors.get(&code)?,
                })
            })
            .collect()
    }
    /// Pixels per plot unit
    fn scale(&self) -> f64 {
        self.size as f64 / (2. * VIEW)
    }
    fn font_size(&self, points: f64) -> f64 {
        points * REFERENCE_DPI / 72. * self.size as f64 / DEFAULT_CANVAS_SIZE as f64
    }
    /// Writes the helical wheel to an image file
    ///
    /// The image is saved as SVG if the file extension is `svg`, otherwise the
    /// image format is derived from the extension (`png`, `jpg`, `bmp`, ...)
    pub fn render<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if self.size == 0 {
            return Err(Error::CanvasSize(self.size));
        }
        let path = path.as_ref();
        log::info!(
            "Drawing the helical wheel of {} residues into {:?}...",
            self.len(),
            path
        );
        let size = (self.size, self.size);
        let is_svg = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        let drawn = if is_svg {
            self.draw(SVGBackend::new(path, size).into_drawing_area())
        } else {
            self.draw(BitMapBackend::new(path, size).into_drawing_area())
        };
        drawn.map_err(|source| Error::Render {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("... saved {:?}", path);
        Ok(())
    }
    fn draw<DB>(
        &self,
        root: DrawingArea<DB, Shift>,
    ) -> std::result::Result<(), Box<dyn StdError + Send + Sync>>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root).build_cartesian_2d(-VIEW..VIEW, -VIEW..VIEW)?;

        for bond in self.bonds() {
            log::debug!(
                "bond #{:2}: {} -> {} (alpha={:.3})",
                bond.index,
                bond.from,
                bond.to,
                bond.alpha
            );
            chart.draw_series(std::iter::once(PathElement::new(
                vec![bond.from.as_tuple(), bond.to.as_tuple()],
                BLACK.mix(bond.alpha).stroke_width(BOND_WIDTH),
            )))?;
        }

        let residues = self.residues();
        let radius = (DISC_RADIUS * self.scale()).round() as i32;
        chart.draw_series(residues.iter().map(|residue| {
            log::debug!(
                "{}{:<2} @ slot {:2} {} ({})",
                residue.code,
                residue.index,
                residue.slot,
                residue.position,
                residue.class
            );
            Circle::new(
                residue.position.as_tuple(),
                radius,
                residue.class.color().mix(DISC_OPACITY).filled(),
            )
        }))?;

        let centered = Pos::new(HPos::Center, VPos::Center);
        let letter_style = ("sans-serif", self.font_size(LETTER_FONT))
            .into_font()
            .color(&BLACK)
            .pos(centered);
        let index_style = ("sans-serif", self.font_size(INDEX_FONT))
            .into_font()
            .color(&BLACK)
            .pos(centered);
        chart.draw_series(residues.iter().map(|residue| {
            Text::new(
                residue.code.to_string(),
                residue.position.offset(0., LETTER_OFFSET).as_tuple(),
                letter_style.clone(),
            )
        }))?;
        chart.draw_series(residues.iter().map(|residue| {
            Text::new(
                residue.index.to_string(),
                residue.position.offset(0., INDEX_OFFSET).as_tuple(),
                index_style.clone(),
            )
        }))?;

        root.present()?;
        Ok(())
    }
}

/// Validates the sequence and writes its helical wheel to `path`
pub fn visualize<S, P>(sequence: S, path: P) -> Result<()>
where
    S: AsRef<str>,
    P: AsRef<Path>,
{
    HelicalWheel::new(sequence)?.render(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{geometry::position, tables::FIRST_ROUND};
    use std::{collections::BTreeSet, error::Error, fs};

    const EIGHTEEN: &str = "ACDEFGHIKLMNPQRSTV";

    #[test]
    fn first_round_only() -> std::result::Result<(), Box<dyn Error>> {
        let wheel = HelicalWheel::new(EIGHTEEN)?;
        assert_eq!(wheel.bonds().len(), 17);
        let residues = wheel.residues();
        assert!(residues.iter().all(|r| r.round == Round::First));
        let slots: BTreeSet<_> = residues.iter().map(|r| r.slot).collect();
        let expected: BTreeSet<_> = FIRST_ROUND.iter().map(|(_, s)| *s).collect();
        assert_eq!(slots, expected);

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hw.svg");
        wheel.render(&path)?;
        let svg = fs::read_to_string(&path)?;
        assert!(!svg.is_empty());
        assert_eq!(svg.matches("<circle").count(), 18);
        assert_eq!(svg.matches("<polyline").count(), 17);
        Ok(())
    }

    #[test]
    fn bonds_stop_at_the_second_round() -> std::result::Result<(), Box<dyn Error>> {
        let wheel = HelicalWheel::new(format!("{EIGHTEEN}WY"))?;
        let bonds = wheel.bonds();
        assert_eq!(bonds.len(), 18);
        let last = bonds.last().unwrap();
        assert_eq!(last.from, position(14).unwrap() * BOND_SCALE);
        assert_eq!(last.to, position(19).unwrap() * BOND_SCALE);

        let residues = wheel.residues();
        let second: Vec<_> = residues
            .iter()
            .filter(|r| r.round == Round::Second)
            .map(|r| (r.index, r.slot))
            .collect();
        assert_eq!(second, vec![(19, 19), (20, 24)]);
        Ok(())
    }

    #[test]
    fn bonds_follow_the_sequence() -> std::result::Result<(), Box<dyn Error>> {
        let wheel = HelicalWheel::new(EIGHTEEN)?;
        let residues = wheel.residues();
        for bond in wheel.bonds() {
            assert_eq!(bond.from, residues[bond.index].position * BOND_SCALE);
            assert_eq!(bond.to, residues[bond.index + 1].position * BOND_SCALE);
        }
        Ok(())
    }

    #[test]
    fn fading_bonds() -> std::result::Result<(), Box<dyn Error>> {
        let wheel = HelicalWheel::new("GLFDIIKKIAESF")?;
        let bonds = wheel.bonds();
        assert_eq!(bonds.len(), 12);
        assert_eq!(bonds[0].alpha, 1.);
        assert!(bonds.windows(2).all(|w| w[1].alpha < w[0].alpha));
        assert!((bonds[12 - 1].alpha - (1. - 11. / 13.)).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn wildcards() -> std::result::Result<(), Box<dyn Error>> {
        let wheel = HelicalWheel::new("X".repeat(35))?;
        let residues = wheel.residues();
        assert_eq!(residues.len(), 35);
        assert!(residues.iter().all(|r| r.class == ResidueClass::Unknown));
        assert_eq!(wheel.bonds().len(), 18);
        assert!(wheel.bonds().iter().all(|b| b.alpha > 0.));
        Ok(())
    }

    #[test]
    fn short_sequences() -> std::result::Result<(), Box<dyn Error>> {
        assert!(HelicalWheel::new("A")?.bonds().is_empty());
        assert!(HelicalWheel::new("")?.bonds().is_empty());
        assert_eq!(HelicalWheel::new("AK")?.bonds().len(), 1);
        Ok(())
    }

    #[test]
    fn invalid_sequence_writes_nothing() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hw.svg");
        assert!(matches!(
            visualize("AB9", &path),
            Err(crate::Error::InvalidResidue(_))
        ));
        assert!(matches!(
            visualize("A".repeat(36), &path),
            Err(crate::Error::SequenceTooLong { len: 36, .. })
        ));
        assert!(!path.exists());
        Ok(())
    }

    #[test]
    fn unwritable_output() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("missing").join("hw.svg");
        match visualize(EIGHTEEN, &path) {
            Err(crate::Error::Render { path: p, source }) => {
                assert_eq!(p, path);
                assert!(!source.to_string().is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }

    fn assert_png(path: &Path) -> std::result::Result<(), Box<dyn Error>> {
        let png = fs::read(path)?;
        assert!(png.len() > 8);
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        Ok(())
    }

    #[test]
    fn default_png_output() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hw.png");
        visualize(EIGHTEEN, &path)?;
        assert_png(&path)
    }

    #[test]
    fn wildcards_png_output() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hw.png");
        visualize("X".repeat(35), &path)?;
        assert_png(&path)
    }

    #[test]
    fn empty_canvas_is_rejected() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        for name in ["hw.png", "hw.svg"] {
            let path = dir.path().join(name);
            assert!(matches!(
                HelicalWheel::new(EIGHTEEN)?.canvas_size(0).render(&path),
                Err(crate::Error::CanvasSize(0))
            ));
            assert!(!path.exists());
        }
        Ok(())
    }

    #[test]
    fn bitmap_output() -> std::result::Result<(), Box<dyn Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("hw.png");
        HelicalWheel::new("")?.canvas_size(300).render(&path)?;
        assert_png(&path)
    }

    #[test]
    fn canvas_scaling() -> std::result::Result<(), Box<dyn Error>> {
        let wheel = HelicalWheel::new(EIGHTEEN)?;
        assert!((wheel.font_size(LETTER_FONT) - 41.666).abs() < 1e-2);
        let small = wheel.canvas_size(300);
        assert!((small.scale() - 10.).abs() < 1e-12);
        Ok(())
    }
}
