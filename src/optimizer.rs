//! SVG optimization
//!
//! The default engine round-trips the document through `usvg`, which resolves
//! styles, converts basic shapes to paths and drops invisible or unused
//! elements, then applies a few root-level cleanups controlled by
//! [`OptimizerConfig`].

use crate::error::{ConfigError, OptimizeError};
use regex::{Captures, Regex};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// Upper bound on parse/serialize rounds in multipass mode
const MAX_PASSES: usize = 10;

static ROOT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").expect("root tag pattern is valid"));

static TAG_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s([A-Za-z_][\w:.-]*)="([^"]*)""#).expect("attribute pattern is valid")
});

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r##"\b(fill|stroke|stop-color|flood-color|lighting-color|color)="#([0-9a-fA-F]{6})""##,
    )
    .expect("color pattern is valid")
});

static ROOT_SIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s(?:width|height)\s*=\s*(?:"[^"]*"|'[^']*')"#).expect("size pattern is valid")
});

static VIEW_BOX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\sviewBox\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("viewBox pattern is valid")
});

static TEXT_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<text[\s>/]").expect("text pattern is valid"));

static EMPTY_DEFS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<defs\s*/>|<defs>\s*</defs>").expect("defs pattern is valid"));

static STROKE_NONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sstroke="none""#).expect("stroke pattern is valid"));

static INTER_TAG_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("whitespace pattern is valid"));

/// Settings for the optimizer engine.
///
/// A user-supplied table replaces [`OptimizerConfig::default`] wholesale;
/// fields it leaves out are off, not inherited from the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerConfig {
    /// Re-run the engine until its output stops changing
    #[serde(default)]
    pub multipass: bool,
    #[serde(default)]
    pub remove_view_box: bool,
    /// Attributes set on the root `<svg>` element, overriding existing values
    #[serde(default)]
    pub root_attributes: BTreeMap<String, String>,
    /// Patterns for attribute names to strip from the root element
    #[serde(default)]
    pub remove_attributes: Vec<String>,
    /// Lowercase hex colors and shorten `#aabbcc` to `#abc`
    #[serde(default)]
    pub convert_colors: bool,
    /// Decimal places kept for coordinates and transforms
    #[serde(default)]
    pub precision: Option<u8>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            multipass: true,
            remove_view_box: false,
            root_attributes: BTreeMap::from([("fill".to_string(), "currentColor".to_string())]),
            remove_attributes: ["class", "style", "data-.*", "width", "height"]
                .into_iter()
                .map(String::from)
                .collect(),
            convert_colors: true,
            precision: Some(3),
        }
    }
}

/// An engine that shrinks and normalizes SVG markup
pub trait Optimizer {
    fn optimize(&self, svg: &str) -> Result<String, OptimizeError>;
}

/// [`Optimizer`] backed by `usvg`
#[derive(Debug)]
pub struct UsvgOptimizer {
    config: OptimizerConfig,
    removed: Option<Regex>,
}

impl UsvgOptimizer {
    pub fn new(config: OptimizerConfig) -> Result<Self, ConfigError> {
        let removed = if config.remove_attributes.is_empty() {
            None
        } else {
            let pattern = format!("^(?:{})$", config.remove_attributes.join("|"));
            let regex = Regex::new(&pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            Some(regex)
        };

        Ok(Self { config, removed })
    }

    fn write_options(&self) -> usvg::WriteOptions {
        let mut options = usvg::WriteOptions::default();
        if let Some(precision) = self.config.precision {
            options.coordinates_precision = precision;
            options.transforms_precision = precision;
        }
        options
    }

    fn run_pass(&self, svg: &str) -> Result<String, OptimizeError> {
        let tree = usvg::Tree::from_str(svg, &usvg::Options::default())?;
        Ok(tree.to_string(&self.write_options()))
    }

    fn rewrite_root(&self, svg: &str) -> String {
        ROOT_TAG
            .replace(svg, |caps: &Captures| {
                let tag = &caps[0];
                let self_closing = tag.ends_with("/>");

                let mut attributes: Vec<(String, String)> = TAG_ATTRIBUTE
                    .captures_iter(tag)
                    .map(|attr| (attr[1].to_string(), attr[2].to_string()))
                    .filter(|(name, _)| self.keeps_root_attribute(name))
                    .collect();

                for (name, value) in &self.config.root_attributes {
                    match attributes.iter_mut().find(|(existing, _)| existing == name) {
                        Some(slot) => slot.1 = value.clone(),
                        None => attributes.push((name.clone(), value.clone())),
                    }
                }

                let mut rebuilt = String::from("<svg");
                for (name, value) in &attributes {
                    rebuilt.push_str(&format!(r#" {}="{}""#, name, value));
                }
                rebuilt.push_str(if self_closing { "/>" } else { ">" });
                rebuilt
            })
            .into_owned()
    }

    fn keeps_root_attribute(&self, name: &str) -> bool {
        if self.config.remove_view_box && name == "viewBox" {
            return false;
        }
        match &self.removed {
            Some(regex) => !regex.is_match(name),
            None => true,
        }
    }
}

impl Optimizer for UsvgOptimizer {
    fn optimize(&self, svg: &str) -> Result<String, OptimizeError> {
        // no fonts are loaded, so usvg would silently drop the text
        if TEXT_ELEMENT.is_match(svg) {
            return Err(OptimizeError::Text);
        }

        let mut current = self.run_pass(&fit_root_to_view_box(svg))?;

        if self.config.multipass {
            for pass in 2..=MAX_PASSES {
                let next = self.run_pass(&current)?;
                if next == current {
                    debug!("optimizer reached a fixed point after {} passes", pass - 1);
                    break;
                }
                current = next;
            }
        }

        let mut result = self.rewrite_root(&current);
        if self.config.convert_colors {
            result = convert_colors(&result);
        }
        Ok(collapse_whitespace(&drop_defaults(&result)))
    }
}

/// Size the root element to its viewBox so usvg keeps child coordinates in
/// viewBox units instead of folding a scale into a wrapping group.
fn fit_root_to_view_box(svg: &str) -> String {
    let Some(root) = ROOT_TAG.find(svg) else {
        return svg.to_string();
    };
    let tag = root.as_str();
    let Some(view_box) = VIEW_BOX
        .captures(tag)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
    else {
        return svg.to_string();
    };

    let numbers: Vec<f64> = view_box
        .as_str()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .filter_map(|part| part.parse().ok())
        .collect();
    let &[_, _, width, height] = numbers.as_slice() else {
        return svg.to_string();
    };
    if width <= 0.0 || height <= 0.0 {
        return svg.to_string();
    }

    let unsized_tag = ROOT_SIZE.replace_all(tag, "");
    format!(
        r#"{}<svg width="{}" height="{}"{}{}"#,
        &svg[..root.start()],
        width,
        height,
        &unsized_tag["<svg".len()..],
        &svg[root.end()..]
    )
}

/// Remove markup that restates what a renderer assumes anyway
fn drop_defaults(svg: &str) -> String {
    let without_defs = EMPTY_DEFS.replace_all(svg, "");
    STROKE_NONE.replace_all(&without_defs, "").into_owned()
}

/// `fill="#AABBCC"` -> `fill="#abc"`; colors that don't shorten are just lowercased.
fn convert_colors(svg: &str) -> String {
    HEX_COLOR
        .replace_all(svg, |caps: &Captures| {
            let hex = caps[2].to_ascii_lowercase();
            let bytes = hex.as_bytes();
            let short = bytes[0] == bytes[1] && bytes[2] == bytes[3] && bytes[4] == bytes[5];
            if short {
                format!(
                    r##"{}="#{}{}{}""##,
                    &caps[1],
                    bytes[0] as char,
                    bytes[2] as char,
                    bytes[4] as char
                )
            } else {
                format!(r##"{}="#{}""##, &caps[1], hex)
            }
        })
        .into_owned()
}

fn collapse_whitespace(svg: &str) -> String {
    INTER_TAG_WHITESPACE.replace_all(svg.trim(), "><").into_owned()
}
