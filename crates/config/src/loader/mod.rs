//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and JSON profile files.
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing profile files back to disk.
//!
//! Invariants / Assumptions:
//! - Explicit builder values win over environment variables, which win over profile values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;
mod profile;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use profile::default_config_path;
