use std::io::Write;

use log::debug;

use crate::model::molecule::Molecule;
use crate::model::object::ChemObject;
use crate::scene::{self, Error, MoleculeSummary, SceneConfig};

/// Writes molecules one after another into a single scene stream.
///
/// The header is written together with the first molecule. Each written
/// molecule consumes one sequence number; molecules after sequence `0` get
/// the number appended to their declaration prefix, so two molecules with
/// the same title never share names.
///
/// # Examples
///
/// ```
/// use pov_forge::{Atom, Element, Molecule, SceneConfig, SceneWriter};
///
/// let mut neon = Molecule::with_title("neon");
/// neon.atoms.push(Atom::new(Element::Ne, [0.0, 0.0, 0.0]));
///
/// let mut writer = SceneWriter::new(Vec::new(), SceneConfig::default());
/// let first = writer.write(&neon)?;
/// let second = writer.write(&neon)?;
///
/// assert_eq!(first.prefix, "neon");
/// assert_eq!(second.prefix, "neon1");
/// assert_eq!(writer.sequence(), 2);
///
/// let text = String::from_utf8(writer.into_inner()).unwrap();
/// assert_eq!(text.matches("#include").count(), 1);
/// # Ok::<(), pov_forge::SceneError>(())
/// ```
#[derive(Debug)]
pub struct SceneWriter<W: Write> {
    sink: W,
    config: SceneConfig,
    sequence: usize,
    header_written: bool,
}

impl<W: Write> SceneWriter<W> {
    pub fn new(sink: W, config: SceneConfig) -> Self {
        Self {
            sink,
            config,
            sequence: 0,
            header_written: false,
        }
    }

    /// Continues a numbering started by another writer.
    pub fn with_sequence(mut self, start: usize) -> Self {
        self.sequence = start;
        self
    }

    /// Sequence number the next molecule will be written with.
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Writes one molecule, preceded by the header if nothing has been
    /// written yet.
    ///
    /// A molecule that is rejected writes nothing and leaves the sequence
    /// unchanged. Once a molecule passes validation its sequence number is
    /// spent, even if the sink fails partway, since part of its
    /// declarations may already be in the stream. The header is likewise
    /// never started twice.
    pub fn write(&mut self, molecule: &Molecule) -> Result<MoleculeSummary, Error> {
        self.config.validate()?;
        scene::validate(molecule)?;

        let sequence = self.sequence;
        self.sequence += 1;

        if !self.header_written {
            self.header_written = true;
            debug!("writing scene header (include '{}')", self.config.include);
            scene::write_header(&mut self.sink, molecule, &self.config)?;
        }

        scene::write_molecule(&mut self.sink, molecule, &self.config, sequence)
    }

    /// Writes a record handed over by a host layer. Anything but a
    /// molecule is rejected with [`Error::UnsupportedObject`].
    pub fn write_object(&mut self, object: &ChemObject) -> Result<MoleculeSummary, Error> {
        match object.as_molecule() {
            Some(molecule) => self.write(molecule),
            None => Err(Error::UnsupportedObject(object.kind().to_string())),
        }
    }

    /// Flushes the sink.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.sink.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::atom::Atom;
    use crate::model::molecule::Bond;
    use crate::model::types::{BondOrder, Element};
    use crate::scene::{OutputMode, RenderStyle};

    fn config() -> SceneConfig {
        SceneConfig {
            timestamp: Some("Sat Jan 01 00:00:00 2000".into()),
            ..SceneConfig::default()
        }
    }

    fn water(title: &str) -> Molecule {
        let mut mol = Molecule::with_title(title);
        mol.atoms.push(Atom::new(Element::O, [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new(Element::H, [0.757, 0.586, 0.0]));
        mol.atoms.push(Atom::new(Element::H, [-0.757, 0.586, 0.0]));
        mol.bonds.push(Bond::new(0, 1, BondOrder::Single));
        mol.bonds.push(Bond::new(0, 2, BondOrder::Single));
        mol
    }

    fn text(writer: SceneWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner()).expect("utf8")
    }

    #[test]
    fn header_precedes_first_molecule_only() {
        let mut writer = SceneWriter::new(Vec::new(), config());
        writer.write(&water("water")).unwrap();
        writer.write(&water("water")).unwrap();

        let out = text(writer);
        assert!(out.starts_with("//Povray V3.1 code generated by pov-forge\n"));
        assert_eq!(out.matches("//Include header for povray").count(), 1);
        assert_eq!(out.matches("#render").count(), 1);
        assert!(out.find("#render").unwrap() < out.find("//Coordinates").unwrap());
    }

    #[test]
    fn identical_titles_get_distinct_prefixes() {
        let mut writer = SceneWriter::new(Vec::new(), config());
        let first = writer.write(&water("water")).unwrap();
        let second = writer.write(&water("water")).unwrap();
        let third = writer.write(&water("water")).unwrap();

        assert_eq!(first.prefix, "water");
        assert_eq!(second.prefix, "water1");
        assert_eq!(third.prefix, "water2");

        let out = text(writer);
        assert!(out.contains("#declare water_center = "));
        assert!(out.contains("#declare water1_center = "));
        assert!(out.contains("#declare water2_bonds = union {\n"));
    }

    #[test]
    fn continued_sequence_suffixes_the_first_molecule() {
        let mut writer = SceneWriter::new(Vec::new(), config()).with_sequence(4);
        let summary = writer.write(&water("water")).unwrap();
        assert_eq!(summary.prefix, "water4");
        assert_eq!(writer.sequence(), 5);
        assert!(text(writer).contains("//Include header for povray"));
    }

    #[test]
    fn rejected_molecule_leaves_stream_and_sequence_alone() {
        let mut bad = water("broken");
        bad.bonds.push(Bond::new(0, 7, BondOrder::Single));

        let mut writer = SceneWriter::new(Vec::new(), config());
        let err = writer.write(&bad).unwrap_err();
        assert!(matches!(err, Error::InvalidBond { atom: 7, .. }));
        assert_eq!(writer.sequence(), 0);

        let summary = writer.write(&water("water")).unwrap();
        assert_eq!(summary.prefix, "water");

        let out = text(writer);
        assert!(!out.contains("broken"));
        assert_eq!(out.matches("//Include header for povray").count(), 1);
    }

    #[test]
    fn non_molecule_objects_are_unsupported() {
        let mut writer = SceneWriter::new(Vec::new(), config());
        let reaction = ChemObject::Reaction {
            reactants: vec![water("a")],
            products: vec![water("b")],
        };
        let err = writer.write_object(&reaction).unwrap_err();
        assert!(matches!(err, Error::UnsupportedObject(ref kind) if kind == "reaction"));
        assert_eq!(writer.sequence(), 0);
        assert!(text(writer).is_empty());
    }

    #[test]
    fn molecule_objects_are_written() {
        let mut writer = SceneWriter::new(Vec::new(), config());
        let summary = writer.write_object(&ChemObject::from(water("h2o"))).unwrap();
        assert_eq!(summary.prefix, "h2o");
        assert_eq!(summary.bond_names, vec!["h2o_bond0", "h2o_bond1"]);
    }

    #[test]
    fn guarded_stream_keeps_renderer_switches() {
        let config = SceneConfig {
            output_mode: OutputMode::Guarded,
            style: RenderStyle::SpaceFill,
            ..config()
        };
        let mut writer = SceneWriter::new(Vec::new(), config);
        writer.write(&water("water")).unwrap();

        let out = text(writer);
        assert!(out.contains("#if (BAS)\n"));
        assert!(out.contains("#if (CST)\n"));
        assert!(out.contains("#if (SPF)\n"));
        assert!(out.contains("#ifdef (TRANS)\n"));
        assert!(out.contains("pigment{color Color_H}"));
    }

    struct FailingSink;

    impl Write for FailingSink {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_errors_are_surfaced() {
        let mut writer = SceneWriter::new(FailingSink, config());
        let err = writer.write(&water("water")).unwrap_err();
        match err {
            Error::Io { source } => assert_eq!(source.to_string(), "disk full"),
            other => panic!("expected an I/O error, got {other:?}"),
        }
        assert_eq!(writer.sequence(), 1);
    }

    /// Accepts `limit` bytes, then fails every write.
    struct LimitedSink {
        data: Vec<u8>,
        limit: usize,
    }

    impl Write for LimitedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let room = self.limit.saturating_sub(self.data.len());
            if room == 0 {
                return Err(std::io::Error::other("full"));
            }
            let n = room.min(buf.len());
            self.data.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn neon() -> Molecule {
        let mut mol = Molecule::with_title("ne");
        mol.atoms.push(Atom::new(Element::Ne, [0.0, 0.0, 0.0]));
        mol
    }

    #[test]
    fn failed_molecule_still_spends_its_prefix() {
        let mut header = Vec::new();
        scene::write_header(&mut header, &neon(), &config()).unwrap();
        let sink = LimitedSink {
            data: Vec::new(),
            limit: header.len() + 60,
        };

        let mut writer = SceneWriter::new(sink, config());
        let err = writer.write(&neon()).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert_eq!(writer.sequence(), 1);

        let mut writer = SceneWriter {
            sink: LimitedSink {
                limit: usize::MAX,
                ..writer.sink
            },
            ..writer
        };
        let summary = writer.write(&neon()).unwrap();
        assert_eq!(summary.prefix, "ne1");

        let out = String::from_utf8(writer.into_inner().data).unwrap();
        assert_eq!(out.matches("#declare ne_pos_1 ").count(), 1);
        assert_eq!(out.matches("#declare ne1_pos_1 ").count(), 1);
        assert_eq!(out.matches("//Include header for povray").count(), 1);
    }

    #[test]
    fn failed_header_is_not_restarted() {
        let sink = LimitedSink {
            data: Vec::new(),
            limit: 20,
        };
        let mut writer = SceneWriter::new(sink, config());
        assert!(writer.write(&neon()).is_err());

        let mut writer = SceneWriter {
            sink: LimitedSink {
                limit: usize::MAX,
                ..writer.sink
            },
            ..writer
        };
        writer.write(&neon()).unwrap();

        let out = String::from_utf8(writer.into_inner().data).unwrap();
        assert_eq!(out.matches("//Povray V3.1").count(), 1);
        assert!(!out.contains("//Include header for povray"));
        assert!(out.contains("#declare ne1_center = "));
    }
}
