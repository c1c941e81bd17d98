//! Attribute rewriting for JSX output
//!
//! React expects SVG presentation attributes as camelCase props
//! (`strokeWidth`, not `stroke-width`). Colors are normalized to
//! `currentColor` so every icon follows the `color` prop. Inline `style`
//! strings become style objects, the only form React accepts.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Hyphenated / namespaced SVG attribute names and their JSX prop names
const ATTRIBUTE_MAP: &[(&str, &str)] = &[
    ("clip-path", "clipPath"),
    ("clip-rule", "clipRule"),
    ("color-interpolation-filters", "colorInterpolationFilters"),
    ("fill-opacity", "fillOpacity"),
    ("fill-rule", "fillRule"),
    ("flood-color", "floodColor"),
    ("flood-opacity", "floodOpacity"),
    ("font-family", "fontFamily"),
    ("font-size", "fontSize"),
    ("font-weight", "fontWeight"),
    ("stop-color", "stopColor"),
    ("stop-opacity", "stopOpacity"),
    ("stroke-dasharray", "strokeDasharray"),
    ("stroke-dashoffset", "strokeDashoffset"),
    ("stroke-linecap", "strokeLinecap"),
    ("stroke-linejoin", "strokeLinejoin"),
    ("stroke-miterlimit", "strokeMiterlimit"),
    ("stroke-opacity", "strokeOpacity"),
    ("stroke-width", "strokeWidth"),
    ("text-anchor", "textAnchor"),
    ("xlink:href", "xlinkHref"),
    ("xml:space", "xmlSpace"),
    ("xmlns:xlink", "xmlnsXlink"),
];

static ATTRIBUTE_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    ATTRIBUTE_MAP
        .iter()
        .map(|(from, to)| {
            let pattern = format!(r"(?i)\b{}=", regex::escape(from));
            let regex = Regex::new(&pattern).expect("attribute pattern is valid");
            (regex, format!("{}=", to))
        })
        .collect()
});

static COLOR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(\s)(fill|stroke)="([^"]*)""#).expect("color pattern is valid")
});

static STYLE_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\sstyle="([^"]*)""#).expect("style pattern is valid"));

/// Point every `fill`/`stroke` at `currentColor` unless it is `none`.
pub fn normalize_colors(markup: &str) -> String {
    COLOR_PATTERN
        .replace_all(markup, |caps: &Captures| match &caps[3] {
            "none" | "currentColor" => caps[0].to_string(),
            _ => format!(r#"{}{}="currentColor""#, &caps[1], &caps[2]),
        })
        .into_owned()
}

/// Rename hyphenated attributes to their camelCase prop names.
pub fn translate(markup: &str) -> String {
    let mut result = markup.to_string();
    for (pattern, replacement) in ATTRIBUTE_PATTERNS.iter() {
        if pattern.is_match(&result) {
            result = pattern
                .replace_all(&result, replacement.as_str())
                .into_owned();
        }
    }
    result
}

/// `style="mix-blend-mode:multiply"` -> `style={{ mixBlendMode: 'multiply' }}`
pub fn styles_to_objects(markup: &str) -> String {
    STYLE_ATTRIBUTE
        .replace_all(markup, |caps: &Captures| {
            let entries: Vec<String> = caps[1]
                .split(';')
                .filter_map(|declaration| declaration.split_once(':'))
                .map(|(property, value)| (property.trim(), value.trim()))
                .filter(|(property, value)| !property.is_empty() && !value.is_empty())
                .map(|(property, value)| {
                    format!(
                        "{}: '{}'",
                        css_property_key(property),
                        value.replace('\\', "\\\\").replace('\'', "\\'")
                    )
                })
                .collect();

            if entries.is_empty() {
                String::new()
            } else {
                format!(" style={{{{ {} }}}}", entries.join(", "))
            }
        })
        .into_owned()
}

/// "mix-blend-mode" -> "mixBlendMode"; custom properties stay quoted
fn css_property_key(property: &str) -> String {
    if property.starts_with("--") {
        return format!("'{}'", property);
    }

    let mut key = String::with_capacity(property.len());
    let mut upper = false;
    for c in property.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            key.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            key.push(c);
        }
    }
    key
}
