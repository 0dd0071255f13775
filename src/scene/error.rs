//! Error types for scene generation.
//!
//! The generator is a pure transform over an always-open sink, so the
//! failure modes are few: the sink itself failing, a molecule whose bond
//! table points outside its atom table, a record that is not a molecule,
//! and configuration problems.

use thiserror::Error;

/// Errors that can occur while turning a molecule into scene declarations.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing to the output sink failed. The underlying error is passed
    /// through unchanged.
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// A bond references an atom index that does not exist.
    ///
    /// Checked for the whole molecule before any output is produced, so a
    /// rejected molecule leaves the sink untouched.
    #[error("bond {bond} references atom index {atom}, but the molecule has {atom_count} atoms")]
    InvalidBond {
        /// 0-based index of the offending bond.
        bond: usize,
        /// The out-of-range 0-based atom index.
        atom: usize,
        /// Number of atoms in the molecule.
        atom_count: usize,
    },

    /// The input record is not a molecule.
    #[error("cannot write a {0} as a POV-Ray scene: only molecules are supported")]
    UnsupportedObject(String),

    /// Failed to parse a scene configuration TOML document.
    #[error("failed to parse scene configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration holds values the generator cannot work with.
    #[error("invalid scene configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates an [`InvalidBond`](Error::InvalidBond) error.
    pub fn invalid_bond(bond: usize, atom: usize, atom_count: usize) -> Self {
        Self::InvalidBond {
            bond,
            atom,
            atom_count,
        }
    }

    /// Creates an [`InvalidConfig`](Error::InvalidConfig) error.
    pub fn invalid_config(details: impl Into<String>) -> Self {
        Self::InvalidConfig(details.into())
    }
}
