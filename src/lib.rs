//! Generate React icon components from a directory of SVG files.
//!
//! Each icon is optimized, its attributes rewritten into JSX prop form and
//! its colors pointed at `currentColor`. Depending on [`IconMode`] a run
//! writes one component per icon, a name-keyed registry with a dynamic
//! `Icon` wrapper, or both, plus an `index` module re-exporting them.
//!
//! ```no_run
//! use svg2jsx::{generate, RawConfig};
//!
//! let config = RawConfig {
//!     input_dir: Some("icons".into()),
//!     output_dir: Some("src/icons".into()),
//!     ..Default::default()
//! };
//! let report = generate(config)?;
//! println!("{} components", report.components.len());
//! # Ok::<(), svg2jsx::GenerateError>(())
//! ```

pub mod attributes;
pub mod config;
pub mod error;
pub mod generator;
pub mod hook;
pub mod naming;
pub mod optimizer;
pub mod processor;
pub mod templates;

pub use config::{Config, IconMode, RawConfig, DEFAULT_CONFIG_FILE};
pub use error::{ConfigError, GenerateError, OptimizeError, ProcessError};
pub use generator::{generate, generate_with, GenerateReport};
pub use optimizer::{Optimizer, OptimizerConfig, UsvgOptimizer};
pub use processor::{process_icon, ProcessedIcon};
