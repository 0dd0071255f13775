//! Core data structures describing the molecules a scene is built from.
//!
//! - [`types`] – Periodic table elements and bond order classifications.
//! - [`atom`] – Atom with element, Cartesian coordinates and optional type label.
//! - [`molecule`] – Molecules as ordered atom and bond tables plus a title.
//! - [`object`] – The closed set of records a host layer may hand over.
//!
//! The model is read-only for the scene generator: nothing in
//! [`crate::scene`] mutates a [`Molecule`](molecule::Molecule).

pub mod atom;
pub mod molecule;
pub mod object;
pub mod types;
