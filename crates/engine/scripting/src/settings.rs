//! Registry settings loaded from KDL
//!
//! ```kdl
//! options {
//!     log-file "crossworld.log"
//!     wildcard "*"
//! }
//! ```
//!
//! Unknown nodes are ignored so the block can live inside a larger app config.

use crate::{Error, Result};
use std::path::Path;

/// Default log file named in dump summaries
pub const DEFAULT_LOG_FILE: &str = "crossworld.log";

/// Default marker that makes `list` match every category
pub const DEFAULT_WILDCARD: char = '*';

/// Settings for a [`GameOptions`](crate::GameOptions) registry
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrySettings {
    /// Log file that receives dumped options
    pub log_file: String,
    /// Category prefix that lists every option
    pub wildcard: char,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            log_file: DEFAULT_LOG_FILE.to_string(),
            wildcard: DEFAULT_WILDCARD,
        }
    }
}

impl RegistrySettings {
    /// Parse a KDL file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_string(&content)
    }

    /// Parse a KDL string. Settings come from the top-level `options` node;
    /// a document without one yields the defaults.
    pub fn from_string(content: &str) -> Result<Self> {
        let doc: kdl::KdlDocument = content.parse()?;
        let mut settings = Self::default();

        let Some(options) = doc.nodes().iter().find(|n| n.name().value() == "options") else {
            return Ok(settings);
        };
        let Some(children) = options.children() else {
            return Ok(settings);
        };

        for node in children.nodes() {
            match node.name().value() {
                "log-file" => settings.log_file = Self::string_arg(node)?,
                "wildcard" => {
                    let marker = Self::string_arg(node)?;
                    settings.wildcard = marker.chars().next().ok_or_else(|| {
                        Error::InvalidSetting("wildcard must not be empty".to_string())
                    })?;
                }
                _ => {}
            }
        }

        Ok(settings)
    }

    /// First positional argument of `node` as a string
    fn string_arg(node: &kdl::KdlNode) -> Result<String> {
        let arg = node
            .entries()
            .iter()
            .find(|e| e.name().is_none())
            .ok_or_else(|| {
                Error::InvalidSetting(format!("{} needs a value", node.name().value()))
            })?;

        match arg.value() {
            kdl::KdlValue::String(s) => Ok(s.clone()),
            other => Err(Error::InvalidSetting(format!(
                "{} expects a string, got {:?}",
                node.name().value(),
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_settings() {
        let kdl = r#"
            options {
                log-file "engine.log"
                wildcard "%"
            }
        "#;

        let settings = RegistrySettings::from_string(kdl).unwrap();
        assert_eq!(settings.log_file, "engine.log");
        assert_eq!(settings.wildcard, '%');
    }

    #[test]
    fn test_missing_block_uses_defaults() {
        let settings = RegistrySettings::from_string("renderer { vsync #true }").unwrap();
        assert_eq!(settings, RegistrySettings::default());
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = RegistrySettings::from_string("options { log-file 3 }").unwrap_err();
        assert!(matches!(err, Error::InvalidSetting(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "options {{\n    log-file \"dump.log\"\n}}").unwrap();

        let settings = RegistrySettings::from_file(file.path()).unwrap();
        assert_eq!(settings.log_file, "dump.log");
        assert_eq!(settings.wildcard, DEFAULT_WILDCARD);
    }
}
