use std::io::Write;

use chrono::Local;
use log::warn;

use super::config::{OutputMode, SceneConfig};
use super::error::Error;
use crate::model::molecule::Molecule;

const GENERATOR: &str = "pov-forge";
const DATE_FORMAT: &str = "%a %b %d %H:%M:%S %Y";

/// Writes the stream header. `first` is the molecule that follows it; its
/// title is printed by the renderer and, if it has no bonds, a warning
/// block is added.
pub fn write<W: Write>(writer: &mut W, first: &Molecule, config: &SceneConfig) -> Result<(), Error> {
    let version = &config.pov_version;
    let date = match &config.timestamp {
        Some(fixed) => fixed.clone(),
        None => Local::now().format(DATE_FORMAT).to_string(),
    };

    writeln!(writer, "//Povray V{} code generated by {}", version, GENERATOR)?;
    writeln!(writer, "//Date: {}", date)?;
    writeln!(writer)?;

    writeln!(writer, "//Include header for povray")?;
    writeln!(writer, "#include \"{}\"", config.include)?;
    writeln!(writer)?;

    if !first.has_bonds() {
        write_no_bond_warning(writer, config)?;
    }

    writeln!(writer, "//Use PovRay{}", version)?;
    writeln!(writer, "#version {};", version)?;
    writeln!(writer)?;

    writeln!(writer, "//Print name of molecule while rendering")?;
    writeln!(
        writer,
        "#render \"\\b\\b {}\\n\\n\"",
        escape_string(first.title.as_deref().unwrap_or_default())
    )?;
    writeln!(writer)?;
    Ok(())
}

/// Escapes `\` and `"` for use inside a POV-Ray string literal.
fn escape_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn write_no_bond_warning<W: Write>(writer: &mut W, config: &SceneConfig) -> Result<(), Error> {
    let guarded = match config.output_mode {
        OutputMode::Guarded => true,
        OutputMode::Resolved if config.style.draws_bonds() => {
            warn!(
                "molecule without bonds written in {:?} style; consider space-fill",
                config.style
            );
            false
        }
        OutputMode::Resolved => return Ok(()),
    };

    if guarded {
        writeln!(writer, "#if (BAS | CST)")?;
    }
    writeln!(writer, "#warning \"Molecule without bonds!\"")?;
    writeln!(writer, "#warning \"You should do a spacefill-model\"")?;
    if guarded {
        writeln!(writer, "#end")?;
    }
    writeln!(writer)?;
    Ok(())
}
