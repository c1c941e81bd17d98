//! Generation settings, loaded from `svg2jsx.toml`

use crate::error::ConfigError;
use crate::optimizer::OptimizerConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File the CLI looks for when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "svg2jsx.toml";

/// Which families of output files a run writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IconMode {
    /// One importable component per icon
    Direct,
    /// A name-keyed registry plus a dynamic `Icon` wrapper
    Registry,
    #[default]
    Both,
}

impl IconMode {
    pub fn includes_direct(self) -> bool {
        matches!(self, IconMode::Direct | IconMode::Both)
    }

    pub fn includes_registry(self) -> bool {
        matches!(self, IconMode::Registry | IconMode::Both)
    }
}

/// Configuration as written by the user. Every field is optional here;
/// [`RawConfig::resolve`] checks the required ones and fills in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawConfig {
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub icon_mode: Option<IconMode>,
    pub typescript: Option<bool>,
    pub class_name: Option<String>,
    pub post_generate: Option<String>,
    pub svgo_config: Option<OptimizerConfig>,
}

impl RawConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate required fields and merge over the defaults.
    ///
    /// The merge is shallow: a supplied `svgoConfig` replaces the default
    /// optimizer settings entirely.
    pub fn resolve(self) -> Result<Config, ConfigError> {
        let input_dir = required(self.input_dir, "inputDir")?;
        let output_dir = required(self.output_dir, "outputDir")?;

        let mut config = Config::new(input_dir, output_dir);
        if let Some(mode) = self.icon_mode {
            config.icon_mode = mode;
        }
        if let Some(typescript) = self.typescript {
            config.typescript = typescript;
        }
        if let Some(class_name) = self.class_name {
            config.class_name = class_name;
        }
        config.post_generate = self
            .post_generate
            .filter(|command| !command.trim().is_empty());
        if let Some(optimizer) = self.svgo_config {
            config.optimizer = optimizer;
        }

        Ok(config)
    }
}

fn required(value: Option<PathBuf>, field: &'static str) -> Result<PathBuf, ConfigError> {
    value
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(ConfigError::MissingField(field))
}

/// Fully resolved configuration for one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub icon_mode: IconMode,
    /// Emit `.tsx`/`.ts` with type annotations instead of `.jsx`/`.js`
    pub typescript: bool,
    /// Base class merged into every component's `className`
    pub class_name: String,
    /// Shell command run after all files are written
    pub post_generate: Option<String>,
    pub optimizer: OptimizerConfig,
}

impl Config {
    /// Create a configuration with default values for everything but the directories
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            icon_mode: IconMode::default(),
            typescript: true,
            class_name: "icon".to_string(),
            post_generate: None,
            optimizer: OptimizerConfig::default(),
        }
    }

    pub fn with_icon_mode(mut self, mode: IconMode) -> Self {
        self.icon_mode = mode;
        self
    }

    pub fn with_typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_post_generate(mut self, command: impl Into<String>) -> Self {
        self.post_generate = Some(command.into());
        self
    }

    /// Extension for component, registry and wrapper files
    pub fn component_extension(&self) -> &'static str {
        if self.typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    /// Extension for the index module
    pub fn index_extension(&self) -> &'static str {
        if self.component_extension() == "tsx" {
            "ts"
        } else {
            "js"
        }
    }
}

/// Starter config written by `svg2jsx init`
pub fn default_config_toml() -> &'static str {
    r#"# svg2jsx configuration
inputDir = "./icons"
outputDir = "./src/components/icons"

# "direct", "registry" or "both"
iconMode = "both"
typescript = true
className = "icon"

# Run after generation, e.g. a formatter
# postGenerate = "npx prettier --write ./src/components/icons"

# Replaces the default optimizer settings entirely when present
# [svgoConfig]
# multipass = true
# removeViewBox = false
# removeAttributes = ["class", "style", "data-.*", "width", "height"]
# convertColors = true
# precision = 3
# rootAttributes = { fill = "currentColor" }
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> RawConfig {
        toml::from_str(text).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = parse(
            r#"
            inputDir = "icons"
            outputDir = "out"
            "#,
        )
        .resolve()
        .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("icons"));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert_eq!(config.icon_mode, IconMode::Both);
        assert!(config.typescript);
        assert_eq!(config.class_name, "icon");
        assert_eq!(config.post_generate, None);
        assert_eq!(config.optimizer, OptimizerConfig::default());
    }

    #[test]
    fn test_missing_required_fields() {
        let err = parse(r#"outputDir = "out""#).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("inputDir")));

        let err = parse(r#"inputDir = "icons""#).resolve().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("outputDir")));

        let err = parse(
            r#"
            inputDir = ""
            outputDir = "out"
            "#,
        )
        .resolve()
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("inputDir")));
    }

    #[test]
    fn test_overrides() {
        let config = parse(
            r#"
            inputDir = "icons"
            outputDir = "out"
            iconMode = "direct"
            typescript = false
            className = "ui-icon"
            postGenerate = "prettier --write out"
            "#,
        )
        .resolve()
        .unwrap();

        assert_eq!(config.icon_mode, IconMode::Direct);
        assert!(!config.typescript);
        assert_eq!(config.class_name, "ui-icon");
        assert_eq!(config.post_generate.as_deref(), Some("prettier --write out"));
        assert_eq!(config.component_extension(), "jsx");
        assert_eq!(config.index_extension(), "js");
    }

    #[test]
    fn test_blank_post_generate_is_none() {
        let config = parse(
            r#"
            inputDir = "icons"
            outputDir = "out"
            postGenerate = "  "
            "#,
        )
        .resolve()
        .unwrap();
        assert_eq!(config.post_generate, None);
    }

    #[test]
    fn test_optimizer_config_replaces_defaults() {
        let config = parse(
            r#"
            inputDir = "icons"
            outputDir = "out"

            [svgoConfig]
            multipass = true
            "#,
        )
        .resolve()
        .unwrap();

        assert!(config.optimizer.multipass);
        assert!(config.optimizer.remove_attributes.is_empty());
        assert!(config.optimizer.root_attributes.is_empty());
        assert!(!config.optimizer.convert_colors);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let result: Result<RawConfig, _> = toml::from_str(r#"iconMode = "sprite""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_toml_parses() {
        let config = parse(default_config_toml()).resolve().unwrap();
        assert_eq!(config.icon_mode, IconMode::Both);
    }

    #[test]
    fn test_icon_mode_groups() {
        assert!(IconMode::Direct.includes_direct());
        assert!(!IconMode::Direct.includes_registry());
        assert!(!IconMode::Registry.includes_direct());
        assert!(IconMode::Registry.includes_registry());
        assert!(IconMode::Both.includes_direct());
        assert!(IconMode::Both.includes_registry());
    }
}
