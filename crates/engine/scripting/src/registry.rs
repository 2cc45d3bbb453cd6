//! Game options registry
//!
//! Lookup, typed access and console reporting over the options registered
//! by the engine. Every call is a synchronous scan-and-act; failures end up
//! as a console line and a default return value, never as an error.

use crate::{Error, GameOption, OptionKind, RegistrySettings, Result};
use tracing::{error, info};

/// Log target of the scripting console
pub const CONSOLE_TARGET: &str = "scripting";

/// Registry of game options, in registration order
#[derive(Debug, Default)]
pub struct GameOptions {
    options: Vec<GameOption>,
    settings: RegistrySettings,
}

impl GameOptions {
    /// Create an empty registry with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with the given settings
    pub fn with_settings(settings: RegistrySettings) -> Self {
        Self {
            options: Vec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &RegistrySettings {
        &self.settings
    }

    /// Append an option. Called by the owning system before any lookups;
    /// duplicate keys are kept and shadowed by the earlier entry.
    pub fn register(&mut self, option: GameOption) {
        self.options.push(option);
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameOption> {
        self.options.iter()
    }

    /// The full option list, for callers that enumerate options themselves
    pub fn get_list(&self) -> &[GameOption] {
        &self.options
    }

    /// Find an option by case-insensitive key; the first match wins
    pub fn find(&self, category: &str, name: &str) -> Option<&GameOption> {
        let option = self.options.iter().find(|o| o.matches(category, name));
        if option.is_none() {
            info!(target: CONSOLE_TARGET, "Failed to find game option '{}/{}'!", category, name);
        }
        option
    }

    /// Like [`find`](Self::find), but returns the miss as an error
    pub fn try_find(&self, category: &str, name: &str) -> Result<&GameOption> {
        self.find(category, name)
            .ok_or_else(|| Error::NotFound(format!("{}/{}", category, name)))
    }

    /// Log an option's current value to the console
    pub fn print(&self, category: &str, name: &str) {
        if let Some(option) = self.find(category, name) {
            info!(target: CONSOLE_TARGET, "{}", option);
        }
    }

    /// Rendered value, or an empty string when the option doesn't exist
    pub fn get(&self, category: &str, name: &str) -> String {
        self.find(category, name)
            .map(GameOption::value_as_text)
            .unwrap_or_default()
    }

    pub fn get_bool(&self, category: &str, name: &str) -> bool {
        self.read(category, name, "a boolean", GameOption::get_bool)
    }

    /// Integer value; color options read as their packed integer
    pub fn get_int(&self, category: &str, name: &str) -> i32 {
        self.read(category, name, "an integer/color", GameOption::get_int)
    }

    pub fn get_float(&self, category: &str, name: &str) -> f32 {
        self.read(category, name, "a float", GameOption::get_float)
    }

    fn read<T: Default>(
        &self,
        category: &str,
        name: &str,
        expected: &str,
        get: impl FnOnce(&GameOption) -> Result<T>,
    ) -> T {
        let Some(option) = self.find(category, name) else {
            return T::default();
        };

        match get(option) {
            Ok(value) => value,
            Err(e) if e.is_type_mismatch() => {
                info!(
                    target: CONSOLE_TARGET,
                    "Failed to read game option '{}/{}', not {}?", category, name, expected
                );
                T::default()
            }
            Err(e) => {
                info!(
                    target: CONSOLE_TARGET,
                    "Failed to read game option '{}/{}' due to an error ({}).", category, name, e
                );
                T::default()
            }
        }
    }

    /// Set an option from text, coerced to the option's kind
    pub fn set(&self, category: &str, name: &str, value: &str) -> bool {
        let Some(option) = self.find(category, name) else {
            return false;
        };

        match option.set_from_text(value) {
            Ok(()) => {
                info!(target: CONSOLE_TARGET, "{}", option);
                true
            }
            Err(_) if option.kind() == OptionKind::String => {
                error!(
                    target: CONSOLE_TARGET,
                    "Failed to set game option '{}/{}', can't set string options right now.",
                    category,
                    name
                );
                false
            }
            Err(e @ (Error::ParseInt(_)
            | Error::ParseFloat(_)
            | Error::InvalidInteger(_)
            | Error::OutOfRange(_))) => {
                error!(
                    target: CONSOLE_TARGET,
                    "Failed to set game option '{}/{}', '{}' is not a valid {} ({}).",
                    category,
                    name,
                    value,
                    option.kind(),
                    e
                );
                false
            }
            Err(_) => {
                Self::log_write_error(category, name);
                false
            }
        }
    }

    pub fn set_bool(&self, category: &str, name: &str, value: bool) -> bool {
        self.write(category, name, "a boolean", |o| o.set_bool(value))
    }

    /// Set an integer; color options take it as a packed color
    pub fn set_int(&self, category: &str, name: &str, value: i32) -> bool {
        self.write(category, name, "an integer", |o| o.set_int(value))
    }

    pub fn set_float(&self, category: &str, name: &str, value: f32) -> bool {
        self.write(category, name, "a float", |o| o.set_float(value))
    }

    /// Flip a boolean option
    pub fn toggle(&self, category: &str, name: &str) -> bool {
        self.write(category, name, "a boolean", GameOption::toggle)
    }

    fn write(
        &self,
        category: &str,
        name: &str,
        expected: &str,
        set: impl FnOnce(&GameOption) -> Result<()>,
    ) -> bool {
        let Some(option) = self.find(category, name) else {
            return false;
        };

        match set(option) {
            Ok(()) => {
                info!(target: CONSOLE_TARGET, "{}", option);
                true
            }
            Err(e) if e.is_type_mismatch() => {
                error!(
                    target: CONSOLE_TARGET,
                    "Failed to set game option '{}/{}', not {}.", category, name, expected
                );
                false
            }
            Err(_) => {
                Self::log_write_error(category, name);
                false
            }
        }
    }

    fn log_write_error(category: &str, name: &str) {
        error!(
            target: CONSOLE_TARGET,
            "Failed to set game option '{}/{}' due to an error (missing pointer?).",
            category,
            name
        );
    }

    /// Write every option to the general log and report the count on the
    /// console. Returns the number of options dumped.
    pub fn dump(&self) -> usize {
        for option in &self.options {
            info!("{}", option);
        }

        let count = self.options.len();
        info!(
            target: CONSOLE_TARGET,
            "Dumped {} options to {}.", count, self.settings.log_file
        );
        count
    }

    /// Log the options in `category` to the console. An empty category, or
    /// one starting with the wildcard marker, lists everything.
    pub fn list(&self, category: &str) -> Vec<&GameOption> {
        let everything = category.is_empty() || category.starts_with(self.settings.wildcard);

        let matches: Vec<&GameOption> = self
            .options
            .iter()
            .filter(|o| everything || o.in_category(category))
            .collect();

        for option in &matches {
            info!(target: CONSOLE_TARGET, "{}", option);
        }
        info!(target: CONSOLE_TARGET, "Found {} options", matches.len());

        matches
    }
}

impl Extend<GameOption> for GameOptions {
    fn extend<I: IntoIterator<Item = GameOption>>(&mut self, iter: I) {
        self.options.extend(iter);
    }
}

impl<'a> IntoIterator for &'a GameOptions {
    type Item = &'a GameOption;
    type IntoIter = std::slice::Iter<'a, GameOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
