//! Configuration for scene generation.
//!
//! - [`SceneConfig`] – Main configuration struct
//! - [`RenderStyle`] – Which bond rendering the scene is built for
//! - [`OutputMode`] – Emit only the chosen style, or every style behind
//!   renderer-side guards
//! - [`Palette`] – Names of the canonical primitives from the include file

use serde::Deserialize;

use super::error::Error;

/// Bond rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderStyle {
    /// One full-length bond primitive per bond, anchored at the begin atom.
    #[default]
    #[serde(alias = "full-bond", alias = "bas")]
    BallAndStick,

    /// Two half-length primitives per bond, each colored by its own
    /// endpoint atom.
    #[serde(alias = "half-bond", alias = "cst")]
    CappedSticks,

    /// Atoms only; no bond declarations are produced.
    #[serde(alias = "spf")]
    SpaceFill,
}

impl RenderStyle {
    pub fn draws_bonds(&self) -> bool {
        !matches!(self, RenderStyle::SpaceFill)
    }
}

/// How style and transparency choices reach the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputMode {
    /// Style and transparency are decided at generation time; only the
    /// matching declarations are written.
    #[default]
    Resolved,

    /// Every variant is written inside `#if (BAS)`, `#if (CST)`,
    /// `#if (SPF)` and `#if (TRANS)` guards so the renderer picks at parse
    /// time. Textually compatible with the legacy include files.
    Guarded,
}

/// Names of the canonical primitives the generated scene instantiates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Prefix of the per-element atom primitive (`Atom_C`).
    pub atom_prefix: String,
    /// Prefix of the per-type color (`Color_C3`).
    pub color_prefix: String,
    /// Prefix of the per-order bond primitive (`bond_1`).
    pub bond_prefix: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            atom_prefix: "Atom_".to_string(),
            color_prefix: "Color_".to_string(),
            bond_prefix: "bond_".to_string(),
        }
    }
}

/// Main configuration for scene generation.
///
/// # Examples
///
/// ```
/// use pov_forge::{OutputMode, RenderStyle, SceneConfig};
///
/// let config = SceneConfig::from_toml_str(
///     r#"
///     style = "capped-sticks"
///     transparent = true
///     timestamp = "Sat Jan 01 00:00:00 2000"
///     "#,
/// )?;
///
/// assert_eq!(config.style, RenderStyle::CappedSticks);
/// assert!(config.transparent);
/// assert_eq!(config.output_mode, OutputMode::Resolved);
/// assert_eq!(config.include, "babel31.inc");
/// # Ok::<(), pov_forge::SceneError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Bond rendering style. Ignored in [`OutputMode::Guarded`], where the
    /// renderer's `BAS`/`CST`/`SPF` flags decide.
    pub style: RenderStyle,

    /// Render atoms as a `merge` and subtract atoms from bonds, so that
    /// bond geometry is not drawn twice inside transparent atoms. Ignored
    /// in [`OutputMode::Guarded`], where the renderer's `TRANS` flag decides.
    pub transparent: bool,

    /// Whether the style is resolved now or by the renderer.
    pub output_mode: OutputMode,

    /// Tolerance below which a scale or rotation step is left out.
    pub epsilon: f64,

    /// File named by the `#include` directive of the stream header.
    pub include: String,

    /// Value of the `#version` directive of the stream header.
    pub pov_version: String,

    /// Fixed date for the stream header. When `None`, the local clock is
    /// read when the header is written.
    pub timestamp: Option<String>,

    /// Largest atom radius, added around the bounding box in the
    /// `bounded_by` hint.
    pub bounding_margin: f64,

    /// Primitive naming.
    pub palette: Palette,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            style: RenderStyle::BallAndStick,
            transparent: false,
            output_mode: OutputMode::Resolved,
            epsilon: 1e-4,
            include: "babel31.inc".to_string(),
            pov_version: "3.1".to_string(),
            timestamp: None,
            bounding_margin: 3.0,
            palette: Palette::default(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a configuration from TOML. Missing keys take
    /// their default values.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        let config: SceneConfig = toml::from_str(toml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(Error::invalid_config(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if !self.bounding_margin.is_finite() || self.bounding_margin < 0.0 {
            return Err(Error::invalid_config(format!(
                "bounding_margin must be a non-negative finite number, got {}",
                self.bounding_margin
            )));
        }
        let palette = [
            ("atom_prefix", &self.palette.atom_prefix),
            ("color_prefix", &self.palette.color_prefix),
            ("bond_prefix", &self.palette.bond_prefix),
        ];
        for (name, value) in palette {
            if value.trim().is_empty() {
                return Err(Error::invalid_config(format!("palette.{name} is empty")));
            }
        }
        Ok(())
    }

    /// Whether bond declarations are written at all.
    pub(crate) fn emits_bonds(&self) -> bool {
        match self.output_mode {
            OutputMode::Guarded => true,
            OutputMode::Resolved => self.style.draws_bonds(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = SceneConfig::default();
        assert_eq!(config.style, RenderStyle::BallAndStick);
        assert!(!config.transparent);
        assert_eq!(config.output_mode, OutputMode::Resolved);
        assert_eq!(config.epsilon, 1e-4);
        assert_eq!(config.include, "babel31.inc");
        assert_eq!(config.pov_version, "3.1");
        assert!(config.timestamp.is_none());
        assert_eq!(config.bounding_margin, 3.0);
        assert_eq!(config.palette.atom_prefix, "Atom_");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn parses_partial_toml_with_aliases() {
        let config = SceneConfig::from_toml_str(
            r#"
            style = "half-bond"
            output_mode = "guarded"

            [palette]
            color_prefix = "Col_"
            "#,
        )
        .expect("parse config");

        assert_eq!(config.style, RenderStyle::CappedSticks);
        assert_eq!(config.output_mode, OutputMode::Guarded);
        assert_eq!(config.palette.color_prefix, "Col_");
        assert_eq!(config.palette.atom_prefix, "Atom_");
        assert_eq!(config.epsilon, 1e-4);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = SceneConfig::from_toml_str("style = [[[").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn rejects_unknown_style() {
        let err = SceneConfig::from_toml_str(r#"style = "wireframe""#).unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn rejects_non_positive_epsilon() {
        let err = SceneConfig::from_toml_str("epsilon = 0.0").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn rejects_empty_palette_entry() {
        let config = SceneConfig {
            palette: Palette {
                bond_prefix: String::new(),
                ..Palette::default()
            },
            ..SceneConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid scene configuration: palette.bond_prefix is empty"
        );
    }

    #[test]
    fn bond_emission_follows_mode_and_style() {
        let spf = SceneConfig {
            style: RenderStyle::SpaceFill,
            ..SceneConfig::default()
        };
        assert!(!spf.emits_bonds());

        let guarded = SceneConfig {
            output_mode: OutputMode::Guarded,
            ..spf
        };
        assert!(guarded.emits_bonds());
    }
}
