use std::io::Write;

use super::config::Palette;
use super::error::Error;
use super::format::Vector;
use super::prefix::Namespace;
use crate::model::molecule::Molecule;

/// Writes one position vector and one primitive instance per atom, in
/// atom-table order. Returns the instance names.
pub fn write<W: Write>(
    writer: &mut W,
    molecule: &Molecule,
    ns: &Namespace,
    palette: &Palette,
) -> Result<Vec<String>, Error> {
    let count = molecule.atom_count();

    writeln!(writer, "//Coordinates of atoms 1 - {}", count)?;
    for (idx, atom) in molecule.atoms.iter().enumerate() {
        writeln!(
            writer,
            "#declare {} = {};",
            ns.position(idx),
            Vector(atom.position)
        )?;
    }

    writeln!(writer)?;
    writeln!(writer, "//Povray-description of atoms 1 - {}", count)?;

    let mut names = Vec::with_capacity(count);
    for (idx, atom) in molecule.atoms.iter().enumerate() {
        let name = ns.atom(idx);
        writeln!(writer, "#declare {} = object {{", name)?;
        writeln!(writer, "\t  {}{}", palette.atom_prefix, atom.element.symbol())?;
        writeln!(writer, "\t  translate {}", ns.position(idx))?;
        writeln!(writer, "\t }}")?;
        names.push(name);
    }

    writeln!(writer)?;
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{atom::Atom, types::Element};

    fn render(molecule: &Molecule) -> (String, Vec<String>) {
        let mut buf = Vec::new();
        let names = write(
            &mut buf,
            molecule,
            &Namespace::new("co"),
            &Palette::default(),
        )
        .expect("write atoms");
        (String::from_utf8(buf).expect("utf8"), names)
    }

    #[test]
    fn declares_positions_and_instances() {
        let mut mol = Molecule::with_title("co");
        mol.atoms.push(Atom::new(Element::C, [0.0, 0.0, 0.0]));
        mol.atoms.push(Atom::new(Element::O, [1.128, -0.5, 2.0]));

        let (out, names) = render(&mol);
        let lines: Vec<_> = out.lines().collect();

        assert_eq!(lines[0], "//Coordinates of atoms 1 - 2");
        assert_eq!(lines[1], "#declare co_pos_1 = <0,0,0>;");
        assert_eq!(lines[2], "#declare co_pos_2 = <1.128,-0.5,2>;");
        assert!(out.contains("#declare co_atom1 = object {\n\t  Atom_C\n\t  translate co_pos_1\n\t }\n"));
        assert!(out.contains("#declare co_atom2 = object {\n\t  Atom_O\n\t  translate co_pos_2\n\t }\n"));
        assert_eq!(names, vec!["co_atom1", "co_atom2"]);
    }

    #[test]
    fn uses_palette_prefix() {
        let mut mol = Molecule::new();
        mol.atoms.push(Atom::new(Element::Fe, [0.0; 3]));

        let mut buf = Vec::new();
        let palette = Palette {
            atom_prefix: "Sphere_".into(),
            ..Palette::default()
        };
        write(&mut buf, &mol, &Namespace::new("m"), &palette).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\t  Sphere_Fe\n"));
    }

    #[test]
    fn empty_molecule_writes_headers_only() {
        let (out, names) = render(&Molecule::new());
        assert!(names.is_empty());
        assert!(out.starts_with("//Coordinates of atoms 1 - 0\n\n//Povray-description"));
    }
}
