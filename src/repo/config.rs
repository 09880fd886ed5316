//! The repository configuration file (`.git/config`).
//!
//! The file uses git's INI-like format:
//!
//! ```text
//! [core]
//! 	repositoryformatversion = 0
//! 	filemode = false
//! 	bare = false
//! ```
//!
//! Section names and keys are case-insensitive and stored in lowercase.
//! Values are kept as text and interpreted on demand.

use std::fmt;

use super::{Error, Result};

const CORE: &str = "core";
const REPOSITORY_FORMAT_VERSION: &str = "repositoryformatversion";
const FILEMODE: &str = "filemode";
const BARE: &str = "bare";

/// The only `repositoryformatversion` this crate understands.
pub const SUPPORTED_FORMAT_VERSION: i64 = 0;

/// Parsed contents of a repository configuration file.
///
/// Sections and entries keep their insertion order so that the serialized
/// form is stable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    sections: Vec<Section>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Config {
    /// A configuration with no sections at all.
    pub fn empty() -> Self {
        Config {
            sections: Vec::new(),
        }
    }

    /// Parse the text of a configuration file.
    pub fn parse(text: &str) -> Result<Self> {
        let mut config = Config::empty();
        let mut section: Option<String> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(header) = line.strip_prefix('[') {
                let name = header.strip_suffix(']').ok_or_else(|| Error::MalformedConfig {
                    line: index + 1,
                    reason: "unterminated section header".to_string(),
                })?;

                let name = name.trim().to_lowercase();
                config.section_mut(&name);
                section = Some(name);
                continue;
            }

            let section = section.as_deref().ok_or_else(|| Error::MalformedConfig {
                line: index + 1,
                reason: "entry outside of any section".to_string(),
            })?;

            // A key with no value is shorthand for `key = true`.
            let (key, value) = match line.find('=') {
                Some(eq) => (line[..eq].trim(), line[eq + 1..].trim()),
                None => (line, "true"),
            };

            if key.is_empty() {
                return Err(Error::MalformedConfig {
                    line: index + 1,
                    reason: "missing key name".to_string(),
                });
            }

            config.set(section, key, value);
        }

        Ok(config)
    }

    /// Return the raw value of `section.key`, if present.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        let section = section.to_lowercase();
        let key = key.to_lowercase();

        self.sections
            .iter()
            .find(|s| s.name == section)
            .and_then(|s| s.entries.iter().find(|(k, _)| *k == key))
            .map(|(_, v)| v.as_str())
    }

    /// Set `section.key` to `value`, replacing any previous value.
    pub fn set<V: Into<String>>(&mut self, section: &str, key: &str, value: V) {
        let key = key.to_lowercase();
        let value = value.into();
        let entries = &mut self.section_mut(&section.to_lowercase()).entries;

        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => entries.push((key, value)),
        }
    }

    /// Interpret `section.key` as a boolean.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>> {
        match self.get(section, key) {
            None => Ok(None),
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(Some(true)),
                "false" | "no" | "off" | "0" => Ok(Some(false)),
                _ => Err(invalid_value(section, key, value)),
            },
        }
    }

    /// Interpret `section.key` as a decimal integer.
    pub fn get_int(&self, section: &str, key: &str) -> Result<Option<i64>> {
        match self.get(section, key) {
            None => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| invalid_value(section, key, value)),
        }
    }

    /// Check the `core` section.
    ///
    /// In strict mode `repositoryformatversion`, `filemode`, and `bare` must
    /// all be present and well-formed, and the format version must be
    /// supported. Non-strict validation accepts anything.
    pub fn validate(&self, strict: bool) -> Result<()> {
        if !strict {
            return Ok(());
        }

        match self.get_int(CORE, REPOSITORY_FORMAT_VERSION)? {
            None => return Err(missing_key(REPOSITORY_FORMAT_VERSION)),
            Some(SUPPORTED_FORMAT_VERSION) => {}
            Some(version) => return Err(Error::UnsupportedFormatVersion(version)),
        }

        for key in &[FILEMODE, BARE] {
            if self.get_bool(CORE, key)?.is_none() {
                return Err(missing_key(key));
            }
        }

        Ok(())
    }

    fn section_mut(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section {
                    name: name.to_string(),
                    entries: Vec::new(),
                });
                self.sections.len() - 1
            }
        };

        &mut self.sections[index]
    }
}

impl Default for Config {
    /// The configuration written by `init`.
    fn default() -> Self {
        let mut config = Config::empty();
        config.set(CORE, REPOSITORY_FORMAT_VERSION, SUPPORTED_FORMAT_VERSION.to_string());
        config.set(CORE, FILEMODE, "false");
        config.set(CORE, BARE, "false");
        config
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "[{}]", section.name)?;
            for (key, value) in &section.entries {
                writeln!(f, "\t{} = {}", key, value)?;
            }
        }
        Ok(())
    }
}

fn missing_key(key: &str) -> Error {
    Error::MissingConfigKey(key.to_string())
}

fn invalid_value(section: &str, key: &str, value: &str) -> Error {
    Error::InvalidConfigValue {
        key: format!("{}.{}", section.to_lowercase(), key.to_lowercase()),
        value: value.to_string(),
    }
}
