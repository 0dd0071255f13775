//! Scene generation for a single molecule.
//!
//! [`write_molecule`] runs the whole pipeline for one molecule: it checks
//! the bond table, derives the declaration prefix, writes the atom
//! positions and instances, places every bond primitive, and finishes with
//! the aggregate objects and the centering vector. It never writes the
//! stream header; [`crate::io::SceneWriter`] does that once per stream.

mod assemble;
mod atoms;
mod bbox;
mod bonds;
mod config;
mod error;
mod format;
mod geometry;
mod header;
mod prefix;

pub use bbox::BoundingBox;
pub use config::{OutputMode, Palette, RenderStyle, SceneConfig};
pub use error::Error;
pub use geometry::{Anchor, BondGeometry, Segment, Transform};
pub use prefix::{INVALID_PREFIX, Namespace, UNTITLED_PREFIX, make_prefix, scoped_prefix};

pub(crate) use header::write as write_header;

use std::io::Write;

use log::debug;

use crate::model::molecule::Molecule;

/// What was declared for one molecule.
#[derive(Debug, Clone, PartialEq)]
pub struct MoleculeSummary {
    /// Prefix shared by every declaration of the molecule; also the name of
    /// the top-level object.
    pub prefix: String,
    pub atom_names: Vec<String>,
    /// Empty when the molecule has no bonds or the style draws none.
    pub bond_names: Vec<String>,
    /// Origin-inclusive extents of the atom positions.
    pub bounding_box: BoundingBox,
    /// Value of the `<prefix>_center` declaration.
    pub center: [f64; 3],
}

/// Checks that every bond references atoms that exist.
pub fn validate(molecule: &Molecule) -> Result<(), Error> {
    let count = molecule.atom_count();
    for (index, bond) in molecule.bonds.iter().enumerate() {
        for atom in [bond.begin, bond.end] {
            if atom >= count {
                return Err(Error::invalid_bond(index, atom, count));
            }
        }
    }
    Ok(())
}

/// Writes the declarations of `molecule` to `writer`.
///
/// `sequence` is the molecule's position in its output stream; at `0` the
/// bare title prefix is used, otherwise the sequence number is appended to
/// keep the names of repeated titles apart. Both the configuration and the
/// bond table are checked before anything is written.
pub fn write_molecule<W: Write>(
    mut writer: W,
    molecule: &Molecule,
    config: &SceneConfig,
    sequence: usize,
) -> Result<MoleculeSummary, Error> {
    config.validate()?;
    validate(molecule)?;

    let bounding_box = BoundingBox::from_atoms(&molecule.atoms);
    let ns = Namespace::new(scoped_prefix(molecule.title.as_deref(), sequence));

    debug!(
        "writing molecule '{}' ({} atoms, {} bonds, {:?}, {:?})",
        ns.prefix(),
        molecule.atom_count(),
        molecule.bond_count(),
        config.style,
        config.output_mode
    );

    let atom_names = atoms::write(&mut writer, molecule, &ns, &config.palette)?;
    let bond_names = bonds::write(&mut writer, molecule, &ns, config)?;
    assemble::write(
        &mut writer,
        &ns,
        &atom_names,
        &bond_names,
        &bounding_box,
        config,
    )?;

    Ok(MoleculeSummary {
        prefix: ns.prefix().to_string(),
        atom_names,
        bond_names,
        center: bounding_box.center(),
        bounding_box,
    })
}
