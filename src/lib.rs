//! A pure Rust library that turns molecular structures into POV-Ray scene
//! descriptions. It places a canonical bond primitive on every bond with the
//! right scale, rotations, and translation. It also groups atoms and bonds
//! into named aggregate objects and declares a centering vector, so the
//! scene can be rendered with the usual molecule include files.
//!
//! # Features
//!
//! - **Bond geometry**: scale/rotate/translate steps that align a unit
//!   primitive lying along +X with any bond vector, with degenerate bonds
//!   handled by dropping the steps that would do nothing
//! - **Rendering styles**: ball-and-stick (one full bond), capped sticks
//!   (two half bonds, each colored by its own atom), and space-fill
//! - **Renderer-side switches**: optionally emit every style behind
//!   `#if (BAS)` / `#if (CST)` / `#if (SPF)` / `#if (TRANS)` guards and let
//!   POV-Ray decide at parse time
//! - **Multi-molecule streams**: one header per stream and a distinct
//!   declaration prefix per molecule, even when titles repeat
//!
//! # Quick Start
//!
//! ```
//! use pov_forge::{Atom, Bond, BondOrder, Element, Molecule};
//! use pov_forge::{SceneConfig, SceneError, SceneWriter};
//!
//! // Carbon monoxide along the X axis
//! let mut co = Molecule::with_title("carbon_monoxide.mol");
//! co.atoms.push(Atom::new(Element::C, [0.0, 0.0, 0.0]));
//! co.atoms.push(Atom::new(Element::O, [1.128, 0.0, 0.0]));
//! co.bonds.push(Bond::new(0, 1, BondOrder::Triple));
//!
//! let config = SceneConfig {
//!     timestamp: Some("Sat Jan 01 00:00:00 2000".into()),
//!     ..SceneConfig::default()
//! };
//!
//! let mut writer = SceneWriter::new(Vec::new(), config);
//! let summary = writer.write(&co)?;
//!
//! assert_eq!(summary.prefix, "carbon_monoxide");
//! assert_eq!(summary.atom_names, ["carbon_monoxide_atom1", "carbon_monoxide_atom2"]);
//! assert_eq!(summary.bond_names, ["carbon_monoxide_bond0"]);
//! assert_eq!(summary.center, [-0.564, 0.0, 0.0]);
//!
//! let scene = String::from_utf8(writer.into_inner()).unwrap();
//! assert!(scene.contains("#declare carbon_monoxide_pos_2 = <1.128,0,0>;"));
//! assert!(scene.contains("\t  bond_3\n\t  scale <1.128,1.0000,1.0000>\n"));
//! assert!(scene.contains("#declare carbon_monoxide_center = <-0.564,0,0>;"));
//! # Ok::<(), SceneError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`model`] – Molecular record handed to the generator
//! - [`scene`] – Per-molecule generation: bounding box, prefixes, atom and
//!   bond declarations, aggregates
//! - [`io`] – Stream-level writer with the header and sequence numbering
//!
//! # Data Types
//!
//! ## Input Structures
//!
//! - [`Molecule`] – Atoms, bonds, and an optional title
//! - [`Atom`] – Element, Cartesian position, and optional type label
//! - [`Bond`] – Ordered pair of atom indices with a bond order
//! - [`Element`] – Chemical element (H through Og)
//! - [`BondOrder`] – Single, Double, Triple, or Aromatic
//! - [`ChemObject`] – Any record a host layer may hand over
//!
//! ## Output Structures
//!
//! - [`MoleculeSummary`] – Names, bounding box, and center of a written
//!   molecule
//! - [`BoundingBox`] – Origin-inclusive extents of the atom positions
//!
//! ## Configuration
//!
//! - [`SceneConfig`] – Style, transparency, output mode, header values
//! - [`RenderStyle`] – Ball-and-stick, capped sticks, or space-fill
//! - [`OutputMode`] – Resolve the style now or leave it to the renderer
//! - [`Palette`] – Names of the include file's primitives

pub mod io;
pub mod model;
pub mod scene;

pub use model::atom::Atom;
pub use model::molecule::{Bond, Molecule};
pub use model::object::ChemObject;
pub use model::types::{BondOrder, Element, ParseBondOrderError, ParseElementError};

pub use scene::Error as SceneError;
pub use scene::{
    BoundingBox, MoleculeSummary, OutputMode, Palette, RenderStyle, SceneConfig, write_molecule,
};

pub use io::SceneWriter;
