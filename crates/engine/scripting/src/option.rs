//! A single game option: a typed, named handle onto externally-owned storage

use crate::storage::OptionStorage;
use crate::{Error, OptionKind, OptionValue, Result};
use std::fmt;
use std::sync::Arc;

/// A registered game option
#[derive(Clone)]
pub struct GameOption {
    category: Option<String>,
    name: String,
    kind: OptionKind,
    storage: Arc<dyn OptionStorage>,
}

impl GameOption {
    /// Create an option in `category`
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        kind: OptionKind,
        storage: impl OptionStorage + 'static,
    ) -> Self {
        Self {
            category: Some(category.into()),
            name: name.into(),
            kind,
            storage: Arc::new(storage),
        }
    }

    /// Create an option that belongs to no category
    pub fn uncategorized(
        name: impl Into<String>,
        kind: OptionKind,
        storage: impl OptionStorage + 'static,
    ) -> Self {
        Self {
            category: None,
            name: name.into(),
            kind,
            storage: Arc::new(storage),
        }
    }

    /// Grouping label, if any
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Option name within its category
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared kind, fixed at registration
    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    /// Case-insensitive key comparison. A missing category matches `""`.
    pub fn matches(&self, category: &str, name: &str) -> bool {
        self.in_category(category) && self.name.eq_ignore_ascii_case(name)
    }

    /// Case-insensitive category comparison
    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .unwrap_or_default()
            .eq_ignore_ascii_case(category)
    }

    /// Read the live value, shaped to the option's kind
    pub fn value(&self) -> Result<OptionValue> {
        let value = self.storage.read().map_err(|e| match e {
            Error::ReadFailed(_) => e,
            other => Error::ReadFailed(other.to_string()),
        })?;
        value.coerce(self.kind)
    }

    /// Write through to storage; any storage error counts as a failed write
    fn write(&self, value: OptionValue) -> Result<()> {
        self.storage.write(value).map_err(|e| match e {
            Error::WriteFailed(_) => e,
            other => Error::WriteFailed(other.to_string()),
        })
    }

    /// Render the live value by kind; empty when storage can't be read
    pub fn value_as_text(&self) -> String {
        self.value().map(|v| v.to_string()).unwrap_or_default()
    }

    /// `category/name = value`
    pub fn format(&self) -> String {
        self.to_string()
    }

    fn expect_kind(&self, expected: OptionKind) -> Result<()> {
        if self.kind == expected {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected,
                actual: self.kind,
            })
        }
    }

    fn expect_integral(&self) -> Result<()> {
        if self.kind.is_integral() {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: OptionKind::Integer,
                actual: self.kind,
            })
        }
    }

    /// Try to get as bool
    pub fn get_bool(&self) -> Result<bool> {
        self.expect_kind(OptionKind::Boolean)?;
        self.value()?.as_bool()
    }

    /// Integer value; color options read as their packed integer
    pub fn get_int(&self) -> Result<i32> {
        self.expect_integral()?;
        self.value()?.as_i32()
    }

    /// Try to get as f32
    pub fn get_float(&self) -> Result<f32> {
        self.expect_kind(OptionKind::Float)?;
        self.value()?.as_f32()
    }

    /// Try to get as a packed color
    pub fn get_color(&self) -> Result<i32> {
        self.expect_kind(OptionKind::Color)?;
        self.value()?.as_i32()
    }

    /// Try to get as string
    pub fn get_string(&self) -> Result<String> {
        self.expect_kind(OptionKind::String)?;
        Ok(self.value()?.as_str()?.to_string())
    }

    /// Parse `text` according to the option's kind and write it.
    ///
    /// String options are rejected without touching storage.
    pub fn set_from_text(&self, text: &str) -> Result<()> {
        let value = OptionValue::parse(self.kind, text)?;
        self.write(value)
    }

    /// Write a bool
    pub fn set_bool(&self, value: bool) -> Result<()> {
        self.expect_kind(OptionKind::Boolean)?;
        self.write(OptionValue::Boolean(value))
    }

    /// Write an integer; color options take it as a packed color
    pub fn set_int(&self, value: i32) -> Result<()> {
        self.expect_integral()?;
        let value = match self.kind {
            OptionKind::Color => OptionValue::Color(value),
            _ => OptionValue::Integer(value),
        };
        self.write(value)
    }

    /// Write an f32
    pub fn set_float(&self, value: f32) -> Result<()> {
        self.expect_kind(OptionKind::Float)?;
        self.write(OptionValue::Float(value))
    }

    /// Write a string; the only way to change a string option
    pub fn set_string(&self, value: impl Into<String>) -> Result<()> {
        self.expect_kind(OptionKind::String)?;
        self.write(OptionValue::String(value.into()))
    }

    /// Write a packed color
    pub fn set_color(&self, value: i32) -> Result<()> {
        self.expect_kind(OptionKind::Color)?;
        self.write(OptionValue::Color(value))
    }

    /// Flip a boolean option
    pub fn toggle(&self) -> Result<()> {
        let current = self.get_bool()?;
        self.write(OptionValue::Boolean(!current))
    }
}

impl fmt::Display for GameOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(category) = &self.category {
            write!(f, "{}/", category)?;
        }
        write!(f, "{} = {}", self.name, self.value_as_text())
    }
}

impl fmt::Debug for GameOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameOption")
            .field("category", &self.category)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FnStorage, SharedValue, Unwired};

    #[test]
    fn test_format() {
        let fov = GameOption::new("Camera", "FOV", OptionKind::Float, SharedValue::new(90.0f32));
        assert_eq!(fov.format(), "Camera/FOV = 90.000000");
        assert_eq!(fov.value_as_text(), "90.000000");

        let title = GameOption::uncategorized("Title", OptionKind::String, SharedValue::new("Crossworld"));
        assert_eq!(title.format(), "Title = \"Crossworld\"");

        let tint = GameOption::new("UI", "Tint", OptionKind::Color, SharedValue::color(0xff8800));
        assert_eq!(tint.format(), "UI/Tint = 0xff8800");
    }

    #[test]
    fn test_format_follows_declared_kind() {
        let foreign = FnStorage::new(|| Ok(OptionValue::Integer(0xff)), |_| Ok(()));
        let tint = GameOption::new("UI", "Tint", OptionKind::Color, foreign);
        assert_eq!(tint.format(), "UI/Tint = 0xff");
        assert_eq!(tint.get_color().unwrap(), 0xff);

        let cell = SharedValue::new(0xff);
        let tint = GameOption::new("UI", "Tint2", OptionKind::Color, cell.clone());
        let before = tint.value_as_text();
        tint.set_int(0xff).unwrap();
        assert_eq!(before, "0xff");
        assert_eq!(tint.value_as_text(), before);

        let fov = GameOption::new("Camera", "FOV", OptionKind::Float, SharedValue::new(90));
        assert_eq!(fov.get_float().unwrap(), 90.0);
        assert_eq!(fov.value_as_text(), "90.000000");
    }

    #[test]
    fn test_storage_holding_wrong_kind() {
        let opt = GameOption::new("UI", "ShowHUD", OptionKind::Boolean, SharedValue::new(3.5f32));
        assert!(matches!(opt.get_bool(), Err(Error::ReadFailed(_))));
        assert_eq!(opt.value_as_text(), "");
    }

    #[test]
    fn test_storage_errors_become_write_failures() {
        let opt = GameOption::new(
            "World",
            "Seed",
            OptionKind::Integer,
            FnStorage::new(
                || Ok(OptionValue::Integer(1)),
                |value| value.as_bool().map(|_| ()),
            ),
        );
        assert!(matches!(opt.set_int(2), Err(Error::WriteFailed(_))));
        assert!(matches!(opt.set_from_text("2"), Err(Error::WriteFailed(_))));
    }

    #[test]
    fn test_matches_ignores_case() {
        let opt = GameOption::new("Camera", "FOV", OptionKind::Float, SharedValue::new(90.0f32));
        assert!(opt.matches("camera", "fov"));
        assert!(opt.matches("CAMERA", "Fov"));
        assert!(!opt.matches("Camera", "FOVx"));

        let bare = GameOption::uncategorized("Seed", OptionKind::Integer, SharedValue::new(1));
        assert!(bare.matches("", "seed"));
        assert!(!bare.matches("Camera", "Seed"));
    }

    #[test]
    fn test_typed_getters_check_kind() {
        let opt = GameOption::new("Camera", "FOV", OptionKind::Float, SharedValue::new(90.0f32));
        assert_eq!(opt.get_float().unwrap(), 90.0);
        assert!(opt.get_bool().unwrap_err().is_type_mismatch());
        assert!(opt.get_int().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_int_accessors_accept_color() {
        let cell = SharedValue::color(0x00ff00);
        let opt = GameOption::new("UI", "Tint", OptionKind::Color, cell.clone());
        assert_eq!(opt.get_int().unwrap(), 0x00ff00);

        opt.set_int(0x0000ff).unwrap();
        assert_eq!(cell.get().unwrap(), OptionValue::Color(0x0000ff));
        assert_eq!(opt.get_color().unwrap(), 0x0000ff);
    }

    #[test]
    fn test_wrong_kind_does_not_mutate() {
        let cell = SharedValue::new(75.0f32);
        let opt = GameOption::new("Camera", "FOV", OptionKind::Float, cell.clone());

        assert!(opt.set_int(10).is_err());
        assert!(opt.set_bool(true).is_err());
        assert!(opt.set_string("wide").is_err());
        assert!(opt.set_color(1).is_err());
        assert_eq!(cell.get().unwrap(), OptionValue::Float(75.0));
    }

    #[test]
    fn test_set_from_text_round_trip() {
        let int = GameOption::new("World", "Seed", OptionKind::Integer, SharedValue::new(0));
        int.set_from_text("0x10").unwrap();
        assert_eq!(int.get_int().unwrap(), 16);
        int.set_from_text(&int.value_as_text()).unwrap();
        assert_eq!(int.get_int().unwrap(), 16);

        let float = GameOption::new("Camera", "FOV", OptionKind::Float, SharedValue::new(0.0f32));
        float.set_from_text("62.5").unwrap();
        float.set_from_text(&float.value_as_text()).unwrap();
        assert!((float.get_float().unwrap() - 62.5).abs() < 1e-4);

        let flag = GameOption::new("UI", "ShowHUD", OptionKind::Boolean, SharedValue::new(false));
        flag.set_from_text("TRUE").unwrap();
        flag.set_from_text(&flag.value_as_text()).unwrap();
        assert!(flag.get_bool().unwrap());
    }

    #[test]
    fn test_set_from_text_malformed_keeps_value() {
        let cell = SharedValue::new(5);
        let opt = GameOption::new("World", "Seed", OptionKind::Integer, cell.clone());
        assert!(matches!(opt.set_from_text("five"), Err(Error::ParseInt(_))));
        assert_eq!(cell.get().unwrap(), OptionValue::Integer(5));
    }

    #[test]
    fn test_string_not_settable_from_text() {
        let cell = SharedValue::new("old");
        let opt = GameOption::new("Player", "Name", OptionKind::String, cell.clone());

        assert!(opt.set_from_text("new").is_err());
        assert_eq!(opt.get_string().unwrap(), "old");

        opt.set_string("typed").unwrap();
        assert_eq!(cell.get().unwrap(), OptionValue::from("typed"));
    }

    #[test]
    fn test_toggle() {
        let flag = GameOption::new("UI", "ShowHUD", OptionKind::Boolean, SharedValue::new(true));
        flag.toggle().unwrap();
        assert!(!flag.get_bool().unwrap());
        flag.toggle().unwrap();
        assert!(flag.get_bool().unwrap());

        let seed = GameOption::new("World", "Seed", OptionKind::Integer, SharedValue::new(1));
        assert!(seed.toggle().unwrap_err().is_type_mismatch());
        assert_eq!(seed.get_int().unwrap(), 1);
    }

    #[test]
    fn test_unwired_write_fails() {
        let opt = GameOption::new("UI", "ShowHUD", OptionKind::Boolean, Unwired::new(true));
        assert!(matches!(opt.set_bool(false), Err(Error::WriteFailed(_))));
        assert!(matches!(opt.toggle(), Err(Error::WriteFailed(_))));
        assert!(opt.get_bool().unwrap());
    }
}
