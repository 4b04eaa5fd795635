//! Configuration file loading.
//!
//! Config files are loaded in priority order (later overrides earlier):
//! 1. `~/.turncheck/config.toml` - User-global defaults
//! 2. `./turncheck.toml` - Project-local overrides
//! 3. `--config <path>` - Explicit file given on the command line
//!
//! # Example Config File
//!
//! ```toml
//! [evaluation]
//! hallucination_threshold = 0.2
//! cost_per_token_usd = 0.000002
//! ```

pub mod loader;
mod types;

pub use loader::ConfigLoader;
