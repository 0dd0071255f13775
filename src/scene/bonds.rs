use std::io::Write;

use log::trace;

use super::config::{OutputMode, RenderStyle, SceneConfig};
use super::error::Error;
use super::format::Real;
use super::geometry::{Anchor, BondGeometry, Segment, Transform};
use super::prefix::Namespace;
use crate::model::atom::Atom;
use crate::model::molecule::{Bond, Molecule};

const FULL_INDENT: &str = "\t  ";
const HALF_INDENT: &str = "\t    ";

/// Writes the bond declarations for the configured style and returns their
/// names. In [`OutputMode::Guarded`] both bond styles are written, each
/// behind its renderer flag; they share names since only one survives
/// parsing.
pub fn write<W: Write>(
    writer: &mut W,
    molecule: &Molecule,
    ns: &Namespace,
    config: &SceneConfig,
) -> Result<Vec<String>, Error> {
    if !molecule.has_bonds() || !config.emits_bonds() {
        return Ok(Vec::new());
    }

    writeln!(
        writer,
        "//Povray-description of bonds 1 - {}",
        molecule.bond_count()
    )?;

    match config.output_mode {
        OutputMode::Resolved => match config.style {
            RenderStyle::BallAndStick => write_full_bonds(writer, molecule, ns, config)?,
            RenderStyle::CappedSticks => write_half_bonds(writer, molecule, ns, config)?,
            RenderStyle::SpaceFill => {}
        },
        OutputMode::Guarded => {
            writeln!(writer, "#if (BAS)")?;
            write_full_bonds(writer, molecule, ns, config)?;
            writeln!(writer, "#end //(BAS-Bonds)")?;
            writeln!(writer)?;

            writeln!(writer, "#if (CST)")?;
            write_half_bonds(writer, molecule, ns, config)?;
            writeln!(writer, "#end // (CST-Bonds)")?;
            writeln!(writer)?;
        }
    }

    Ok((0..molecule.bond_count()).map(|k| ns.bond(k)).collect())
}

fn solve<'m>(
    molecule: &'m Molecule,
    index: usize,
    bond: &Bond,
    epsilon: f64,
) -> Result<(BondGeometry, [&'m Atom; 2]), Error> {
    let (begin, end) = molecule.bond_atoms(bond).ok_or_else(|| {
        let atom = if bond.begin >= molecule.atom_count() {
            bond.begin
        } else {
            bond.end
        };
        Error::invalid_bond(index, atom, molecule.atom_count())
    })?;

    let geom = BondGeometry::between(begin.position, end.position, epsilon);
    if geom.is_degenerate() {
        trace!(
            "bond {} ({} -> {}) has coincident endpoints; writing translation only",
            index, bond.begin, bond.end
        );
    }
    Ok((geom, [begin, end]))
}

fn write_full_bonds<W: Write>(
    writer: &mut W,
    molecule: &Molecule,
    ns: &Namespace,
    config: &SceneConfig,
) -> Result<(), Error> {
    for (k, bond) in molecule.bonds.iter().enumerate() {
        let (geom, _) = solve(molecule, k, bond, config.epsilon)?;

        writeln!(writer, "#declare {} = object {{", ns.bond(k))?;
        writeln!(
            writer,
            "{}{}{}",
            FULL_INDENT,
            config.palette.bond_prefix,
            bond.order.primitive_index()
        )?;
        write_steps(writer, &geom.transforms(Segment::Full), ns, bond, FULL_INDENT)?;
        writeln!(writer, "\t }}")?;
    }
    Ok(())
}

fn write_half_bonds<W: Write>(
    writer: &mut W,
    molecule: &Molecule,
    ns: &Namespace,
    config: &SceneConfig,
) -> Result<(), Error> {
    for (k, bond) in molecule.bonds.iter().enumerate() {
        let (geom, [begin, end]) = solve(molecule, k, bond, config.epsilon)?;

        writeln!(writer, "#declare {} = object {{", ns.bond(k))?;
        writeln!(writer, "\t  union {{")?;

        for segment in [Segment::BeginHalf, Segment::EndHalf] {
            let owner = match segment.anchor() {
                Anchor::Begin => begin,
                Anchor::End => end,
            };

            writeln!(writer, "\t   object {{")?;
            writeln!(
                writer,
                "{}{}{}",
                HALF_INDENT,
                config.palette.bond_prefix,
                bond.order.primitive_index()
            )?;
            writeln!(
                writer,
                "{}pigment{{color {}{}}}",
                HALF_INDENT,
                config.palette.color_prefix,
                owner.color_label()
            )?;
            write_steps(writer, &geom.transforms(segment), ns, bond, HALF_INDENT)?;
            writeln!(writer, "\t   }}")?;
        }

        writeln!(writer, "\t  }}")?;
        writeln!(writer, "\t }}")?;
        writeln!(writer)?;
    }
    Ok(())
}

fn write_steps<W: Write>(
    writer: &mut W,
    steps: &[Transform],
    ns: &Namespace,
    bond: &Bond,
    indent: &str,
) -> Result<(), Error> {
    for step in steps {
        match *step {
            Transform::Scale(s) => {
                writeln!(writer, "{}scale <{},1.0000,1.0000>", indent, Real(s))?
            }
            Transform::RotateZ(deg) => {
                writeln!(writer, "{}rotate <0.0000,0.0000,{}>", indent, Real(deg))?
            }
            Transform::RotateY(deg) => {
                writeln!(writer, "{}rotate <0.0000,{},0.0000>", indent, Real(deg))?
            }
            Transform::Translate(Anchor::Begin) => {
                writeln!(writer, "{}translate {}", indent, ns.position(bond.begin))?
            }
            Transform::Translate(Anchor::End) => {
                writeln!(writer, "{}translate {}", indent, ns.position(bond.end))?
            }
        }
    }
    Ok(())
}
