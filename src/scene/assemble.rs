//! Aggregate objects built from the per-atom and per-bond declarations.
//!
//! Works on declaration names only; the geometry was settled by the
//! emitters. Written in order: the atoms aggregate, the bonds aggregate
//! (when there are bond declarations), the molecule object, and the
//! centering vector, which is always present.

use std::io::Write;

use super::bbox::BoundingBox;
use super::config::{OutputMode, SceneConfig};
use super::error::Error;
use super::format::{Real, Vector};
use super::prefix::Namespace;

pub fn write<W: Write>(
    writer: &mut W,
    ns: &Namespace,
    atom_names: &[String],
    bond_names: &[String],
    bbox: &BoundingBox,
    config: &SceneConfig,
) -> Result<(), Error> {
    write_atoms_aggregate(writer, ns, atom_names, config)?;

    let has_bonds = !bond_names.is_empty();
    if has_bonds {
        write_bonds_aggregate(writer, ns, bond_names, config)?;
        write_molecule(writer, ns, bbox, config)?;
    } else {
        write_molecule_without_bonds(writer, ns, config)?;
    }

    write_center(writer, ns, bbox)
}

fn write_atoms_aggregate<W: Write>(
    writer: &mut W,
    ns: &Namespace,
    atom_names: &[String],
    config: &SceneConfig,
) -> Result<(), Error> {
    writeln!(writer)?;
    writeln!(writer, "//All atoms of molecule {}", ns.prefix())?;
    match config.output_mode {
        OutputMode::Guarded => {
            writeln!(writer, "#ifdef (TRANS)")?;
            writeln!(writer, "#declare {} = merge {{", ns.atoms())?;
            writeln!(writer, "#else")?;
            writeln!(writer, "#declare {} = union {{", ns.atoms())?;
            writeln!(writer, "#end //(End of TRANS)")?;
        }
        OutputMode::Resolved => {
            let csg = if config.transparent { "merge" } else { "union" };
            writeln!(writer, "#declare {} = {} {{", ns.atoms(), csg)?;
        }
    }

    for name in atom_names {
        writeln!(writer, "\t  object{{{}}}", name)?;
    }
    writeln!(writer, "\t }}")?;
    writeln!(writer)?;
    Ok(())
}

fn write_bonds_aggregate<W: Write>(
    writer: &mut W,
    ns: &Namespace,
    bond_names: &[String],
    config: &SceneConfig,
) -> Result<(), Error> {
    let guarded = config.output_mode == OutputMode::Guarded;

    writeln!(
        writer,
        "//Bonds only needed for ball and sticks or capped sticks models"
    )?;
    if guarded {
        writeln!(writer, "#if (BAS | CST)")?;
    }
    writeln!(writer, "#declare {} = union {{", ns.bonds())?;
    for name in bond_names {
        writeln!(writer, "\t  object{{{}}}", name)?;
    }
    writeln!(writer, "\t }}")?;
    if guarded {
        writeln!(writer, "#end")?;
    }
    writeln!(writer)?;
    Ok(())
}

fn write_molecule<W: Write>(
    writer: &mut W,
    ns: &Namespace,
    bbox: &BoundingBox,
    config: &SceneConfig,
) -> Result<(), Error> {
    let name = ns.prefix();
    let atoms = ns.atoms();
    let bonds = ns.bonds();

    writeln!(writer)?;
    writeln!(writer, "//Definition of molecule {}", name)?;

    match config.output_mode {
        OutputMode::Guarded => {
            writeln!(writer, "#if (SPF)")?;
            writeln!(writer, "#declare {} = object{{", name)?;
            writeln!(writer, "\t  {}", atoms)?;
            writeln!(writer, "#else")?;
            writeln!(writer, "#declare {} = union {{", name)?;
            writeln!(writer, "\t  object{{{}}}", atoms)?;
            writeln!(writer, "#if (BAS | CST)")?;
            writeln!(writer, "#if (TRANS)")?;
            write_difference(writer, &atoms, &bonds)?;
            writeln!(writer, "#else")?;
            writeln!(writer, "\t  object{{{}}}", bonds)?;
            writeln!(writer, "#end //(End of TRANS)")?;
            writeln!(writer, "#end //(End of (BAS|CST))")?;
            writeln!(writer, "#end //(End of SPF)")?;
        }
        OutputMode::Resolved => {
            writeln!(writer, "#declare {} = union {{", name)?;
            writeln!(writer, "\t  object{{{}}}", atoms)?;
            if config.transparent {
                write_difference(writer, &atoms, &bonds)?;
            } else {
                writeln!(writer, "\t  object{{{}}}", bonds)?;
            }
        }
    }

    write_bounds_hint(writer, &bbox.padded(config.bounding_margin))?;
    writeln!(writer, "\t }}")?;
    writeln!(writer)?;
    Ok(())
}

/// Bonds minus atoms, so overlapping geometry is not rendered twice inside
/// transparent atoms.
fn write_difference<W: Write>(writer: &mut W, atoms: &str, bonds: &str) -> Result<(), Error> {
    writeln!(writer, "\t  difference {{")?;
    writeln!(writer, "\t   object{{{}}}", bonds)?;
    writeln!(writer, "\t   object{{{}}}", atoms)?;
    writeln!(writer, "\t  }}")?;
    Ok(())
}

/// Commented-out `bounded_by` box; left for the scene author to enable.
fn write_bounds_hint<W: Write>(writer: &mut W, bounds: &BoundingBox) -> Result<(), Error> {
    writeln!(writer, "//\t  bounded_by {{")?;
    writeln!(writer, "//\t   box {{")?;
    writeln!(writer, "//\t    {}", Vector(bounds.min))?;
    writeln!(writer, "//\t    {}", Vector(bounds.max))?;
    Ok(())
}

fn write_molecule_without_bonds<W: Write>(
    writer: &mut W,
    ns: &Namespace,
    config: &SceneConfig,
) -> Result<(), Error> {
    // resolved space-fill drops any bonds the molecule has
    let note = if config.emits_bonds() {
        "no bonds"
    } else {
        "atoms only"
    };
    writeln!(writer)?;
    writeln!(writer, "//Definition of Molecule {} ({})", ns.prefix(), note)?;
    writeln!(writer, "#declare {} = object {{{}}}", ns.prefix(), ns.atoms())?;
    writeln!(writer)?;
    Ok(())
}

fn write_center<W: Write>(writer: &mut W, ns: &Namespace, bbox: &BoundingBox) -> Result<(), Error> {
    let [x, y, z] = bbox.center();
    writeln!(writer, "//Center of molecule {} (bounding box)", ns.prefix())?;
    writeln!(
        writer,
        "#declare {} = <{},{},{}>;",
        ns.center(),
        Real(x),
        Real(y),
        Real(z)
    )?;
    writeln!(writer)?;
    Ok(())
}
