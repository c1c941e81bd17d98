//! Source text generators
//!
//! Each generator is a pure function from processed icons and the resolved
//! [`Config`](crate::config::Config) to the contents of one output file.

mod component;
mod index;
mod registry;
mod wrapper;

pub use component::generate_component;
pub use index::generate_index;
pub use registry::generate_registry;
pub use wrapper::generate_wrapper;

/// File stem of the registry module
pub const REGISTRY_MODULE: &str = "IconRegistry";

/// File stem of the dynamic wrapper component
pub const WRAPPER_MODULE: &str = "Icon";

/// First line of every generated file
const HEADER: &str = "// This file is generated by svg2jsx. Do not edit it by hand.";

/// Indent every non-empty line of `text` by `width` spaces
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent() {
        assert_eq!(indent("<g>\n\n<path/>", 2), "  <g>\n\n  <path/>");
    }
}
