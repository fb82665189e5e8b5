//! Application configuration.
//!
//! Every section has defaults, so running without a config file works as
//! long as a WordNet database sits in the NLTK data location.

use crate::assembler::{NewlinePolicy, PunctuationPolicy};
use semtree_utils::logging::LoggerConfig;
use semtree_utils::ConfigBuilder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Base name of the configuration file (`semtree.toml`, `.json`, `.yaml`)
pub const CONFIG_FILE_STEM: &str = "semtree";

/// WordNet location used by the NLTK data downloader
pub fn default_wordnet_dir() -> Option<PathBuf> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.home_dir().join("nltk_data").join("corpora").join("wordnet"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Princeton WordNet database directory
    pub wordnet_dir: Option<PathBuf>,
    /// JSON lexicon; used instead of WordNet when set
    pub json_path: Option<PathBuf>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            wordnet_dir: default_wordnet_dir(),
            json_path: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyConfig {
    pub newline: NewlinePolicy,
    pub punctuation: PunctuationPolicy,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Top-left corner of the drawn tree, in canvas points
    pub origin: [f32; 2],
    /// Vertical distance between tree levels
    pub level_height: f32,
    /// Horizontal gap between sibling subtrees
    pub node_gap: f32,
    pub font_size: f32,
    /// Minimum canvas size, in points
    pub min_size: [f32; 2],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            origin: [50.0, 10.0],
            level_height: 40.0,
            node_gap: 12.0,
            font_size: 13.0,
            min_size: [700.0, 200.0],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SemTreeConfig {
    pub lexicon: LexiconConfig,
    pub assembly: AssemblyConfig,
    pub canvas: CanvasConfig,
    pub logging: LoggerConfig,
}

impl SemTreeConfig {
    /// Directories searched for the config file: working directory first,
    /// then the platform config directory
    pub fn search_dirs() -> Vec<PathBuf> {
        let mut dirs = vec![PathBuf::from(".")];
        if let Some(project) = directories::ProjectDirs::from("", "", "semtree") {
            dirs.push(project.config_dir().to_path_buf());
        }
        dirs
    }

    /// Load defaults merged with the first config file found in `dirs`.
    ///
    /// Returns the config and the file it came from, if any.
    pub fn load_from<P: AsRef<Path>>(dirs: &[P]) -> crate::Result<(Self, Option<PathBuf>)> {
        let source = semtree_utils::find_config_file(CONFIG_FILE_STEM, dirs);
        let config = ConfigBuilder::<Self>::new()
            .load_optional(source.as_deref())?
            .build();
        Ok((config, source))
    }

    pub fn load() -> crate::Result<(Self, Option<PathBuf>)> {
        Self::load_from(&Self::search_dirs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_place_tree_at_canvas_offset() {
        let config = SemTreeConfig::default();
        assert_eq!(config.canvas.origin, [50.0, 10.0]);
        assert_eq!(config.assembly.newline, NewlinePolicy::Strip);
        assert_eq!(config.assembly.punctuation, PunctuationPolicy::Naive);
        assert!(config.lexicon.json_path.is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        let (config, source) = SemTreeConfig::load_from(&[temp_dir.path()])?;
        assert!(source.is_none());
        assert_eq!(config, SemTreeConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_toml_overrides_only_given_keys() -> crate::Result<()> {
        let temp_dir = tempdir()?;
        std::fs::write(
            temp_dir.path().join("semtree.toml"),
            r#"
[lexicon]
json_path = "/tmp/lexicon.json"

[assembly]
punctuation = "token_aware"

[canvas]
level_height = 55.0
"#,
        )?;

        let (config, source) = SemTreeConfig::load_from(&[temp_dir.path()])?;
        assert_eq!(source, Some(temp_dir.path().join("semtree.toml")));
        assert_eq!(config.lexicon.json_path, Some(PathBuf::from("/tmp/lexicon.json")));
        assert_eq!(config.assembly.punctuation, PunctuationPolicy::TokenAware);
        assert_eq!(config.assembly.newline, NewlinePolicy::Strip);
        assert_eq!(config.canvas.level_height, 55.0);
        assert_eq!(config.canvas.origin, [50.0, 10.0]);
        Ok(())
    }
}
