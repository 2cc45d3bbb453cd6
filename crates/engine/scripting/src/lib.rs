//! Game options for Crossworld's scripting console
//!
//! This crate provides:
//! - **GameOption**: a typed (category, name) handle onto a live engine value
//! - **GameOptions**: the registry scripts use to find, read, write, toggle
//!   and list options, reporting every outcome on the `scripting` log target
//! - **OptionStorage**: how an option reaches the value it controls
//! - **RegistrySettings**: registry settings loaded from KDL
//!
//! # Example
//!
//! ```rust
//! use scripting::{GameOption, GameOptions, OptionKind, SharedValue};
//!
//! let fov = SharedValue::new(90.0f32);
//!
//! let mut options = GameOptions::new();
//! options.register(GameOption::new("Camera", "FOV", OptionKind::Float, fov.clone()));
//!
//! assert_eq!(options.get("camera", "fov"), "90.000000");
//! assert!(options.set_float("Camera", "FOV", 75.0));
//! assert_eq!(options.get_float("Camera", "FOV"), 75.0);
//! ```

mod error;
mod option;
mod registry;
mod settings;
pub mod storage;
mod value;

pub use error::{Error, Result};
pub use option::GameOption;
pub use registry::{GameOptions, CONSOLE_TARGET};
pub use settings::{RegistrySettings, DEFAULT_LOG_FILE, DEFAULT_WILDCARD};
pub use storage::{FnStorage, OptionStorage, SharedValue, Unwired};
pub use value::{OptionKind, OptionValue};
