//! Configuration for the colorstrip animation.
//!
//! Options come from three layers, lowest priority first: the TOML config
//! file, a parameter fragment (`#theme=dark#seed=7`) and command-line flags.
//! Each layer is an [`Overrides`]; merging them and calling
//! [`Overrides::resolve`] fills dependent defaults and validates the result.

mod error;
mod overrides;
mod settings;

pub use error::{ConfigError, Result};
pub use overrides::Overrides;
pub use settings::{Settings, default_config_path, random_seed};
