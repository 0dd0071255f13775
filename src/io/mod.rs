//! Stream-level output.
//!
//! A POV-Ray scene file holds one header followed by the declarations of
//! one or more molecules. [`SceneWriter`] owns the sink and the sequence
//! number that keeps the molecules' declaration names apart.

mod writer;

pub use writer::SceneWriter;
