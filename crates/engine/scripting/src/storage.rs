//! Backing storage for game options
//!
//! An option never owns its value. It holds a handle to storage that belongs
//! to whichever system registered it:
//! - [`SharedValue`]: an in-memory cell shared with the owning system
//! - [`FnStorage`]: a read/write function pair into foreign state
//! - [`Unwired`]: a placeholder for options whose storage is not hooked up yet

use crate::{Error, OptionValue, Result};
use std::sync::{Arc, RwLock};

/// Read/write access to the live value behind an option
pub trait OptionStorage: Send + Sync {
    /// Read the current value
    fn read(&self) -> Result<OptionValue>;

    /// Replace the current value
    fn write(&self, value: OptionValue) -> Result<()>;
}

/// In-memory option storage shared between the registry and the owning system
#[derive(Debug, Clone)]
pub struct SharedValue {
    inner: Arc<RwLock<OptionValue>>,
}

impl SharedValue {
    /// Create a new cell holding `value`
    pub fn new(value: impl Into<OptionValue>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value.into())),
        }
    }

    /// Create a color cell
    pub fn color(value: i32) -> Self {
        Self::new(OptionValue::Color(value))
    }

    /// Current value, as seen by the owning system
    pub fn get(&self) -> Result<OptionValue> {
        self.read()
    }
}

impl OptionStorage for SharedValue {
    fn read(&self) -> Result<OptionValue> {
        self.inner
            .read()
            .map(|v| v.clone())
            .map_err(|e| Error::ReadFailed(format!("Failed to lock option value: {}", e)))
    }

    fn write(&self, value: OptionValue) -> Result<()> {
        let mut current = self
            .inner
            .write()
            .map_err(|e| Error::WriteFailed(format!("Failed to lock option value: {}", e)))?;
        *current = value;
        Ok(())
    }
}

/// Reader half of an [`FnStorage`]
pub type ReadFn = Arc<dyn Fn() -> Result<OptionValue> + Send + Sync>;

/// Writer half of an [`FnStorage`]
pub type WriteFn = Arc<dyn Fn(OptionValue) -> Result<()> + Send + Sync>;

/// Option storage backed by a pair of accessor functions
#[derive(Clone)]
pub struct FnStorage {
    read: ReadFn,
    write: WriteFn,
}

impl FnStorage {
    /// Create storage from a reader and a writer
    pub fn new<R, W>(read: R, write: W) -> Self
    where
        R: Fn() -> Result<OptionValue> + Send + Sync + 'static,
        W: Fn(OptionValue) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            read: Arc::new(read),
            write: Arc::new(write),
        }
    }
}

impl std::fmt::Debug for FnStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnStorage").finish_non_exhaustive()
    }
}

impl OptionStorage for FnStorage {
    fn read(&self) -> Result<OptionValue> {
        (self.read)()
    }

    fn write(&self, value: OptionValue) -> Result<()> {
        (self.write)(value)
    }
}

/// Storage for an option whose live value has not been wired up.
///
/// Reads return the last known value; every write fails.
#[derive(Debug, Clone)]
pub struct Unwired {
    last_known: OptionValue,
}

impl Unwired {
    /// Create unwired storage that reads back `last_known`
    pub fn new(last_known: impl Into<OptionValue>) -> Self {
        Self {
            last_known: last_known.into(),
        }
    }
}

impl OptionStorage for Unwired {
    fn read(&self) -> Result<OptionValue> {
        Ok(self.last_known.clone())
    }

    fn write(&self, _value: OptionValue) -> Result<()> {
        Err(Error::WriteFailed("option storage is not wired".to_string()))
    }
}
