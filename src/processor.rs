use crate::attributes;
use crate::error::ProcessError;
use crate::naming;
use crate::optimizer::Optimizer;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static OPENING_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").expect("opening tag pattern is valid"));

/// One icon ready for code generation
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedIcon {
    /// File name as found in the input directory (e.g. "User Profile.svg")
    pub original_file: String,
    /// Hyphenated identifier base (e.g. "user-profile")
    pub sanitized_name: String,
    /// Component identifier (e.g. "UserProfileIcon")
    pub component_name: String,
    /// Registry key (e.g. "userProfile")
    pub camel_case_name: String,
    /// Source markup, kept for diagnostics
    pub svg_content: String,
    /// Child markup of the optimized root element, in JSX attribute form
    pub optimized_svg: String,
}

impl ProcessedIcon {
    /// Re-derive the component and registry names from a new identifier base
    pub fn rename(&mut self, sanitized_name: String) {
        self.component_name = format!("{}Icon", naming::to_pascal_case(&sanitized_name));
        self.camel_case_name = naming::to_camel_case(&sanitized_name);
        self.sanitized_name = sanitized_name;
    }
}

/// Turn a single SVG file into a [`ProcessedIcon`].
///
/// Errors mean "skip this file"; none of them should stop the rest of a run.
pub fn process_icon(path: &Path, optimizer: &dyn Optimizer) -> Result<ProcessedIcon, ProcessError> {
    let original_file = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    if !original_file.ends_with(".svg") {
        return Err(ProcessError::NotSvg);
    }

    let sanitized = naming::sanitize(&original_file);
    if sanitized.is_empty() {
        return Err(ProcessError::EmptyName);
    }

    let svg_content = std::fs::read_to_string(path).map_err(|source| ProcessError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let optimized = optimizer.optimize(&svg_content)?;
    let inner = strip_svg_wrapper(&optimized);
    if inner.is_empty() {
        return Err(ProcessError::EmptyContent);
    }
    let translated = attributes::translate(&attributes::normalize_colors(&inner));
    let optimized_svg = attributes::styles_to_objects(&translated);

    let mut icon = ProcessedIcon {
        original_file,
        sanitized_name: String::new(),
        component_name: String::new(),
        camel_case_name: String::new(),
        svg_content,
        optimized_svg,
    };
    icon.rename(naming::ensure_leading_letter(&sanitized));

    Ok(icon)
}

/// Return the children of the root `<svg>` element.
///
/// Uses the first opening tag and the last closing tag, which holds for
/// optimizer output where `</svg>` never appears inside text or comments.
pub fn strip_svg_wrapper(svg: &str) -> String {
    let Some(open) = OPENING_TAG.find(svg) else {
        return svg.trim().to_string();
    };

    if open.as_str().ends_with("/>") {
        return String::new();
    }

    let rest = &svg[open.end()..];
    let inner = match rest.rfind("</svg>") {
        Some(close) => &rest[..close],
        None => rest,
    };
    inner.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizeError;
    use std::io::Write;
    use tempfile::TempDir;

    /// Passes markup through untouched
    struct Identity;

    impl Optimizer for Identity {
        fn optimize(&self, svg: &str) -> Result<String, OptimizeError> {
            Ok(svg.to_string())
        }
    }

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_strip_svg_wrapper() {
        assert_eq!(
            strip_svg_wrapper(r#"<svg viewBox="0 0 24 24"><path d="M0 0"/></svg>"#),
            r#"<path d="M0 0"/>"#
        );
        assert_eq!(
            strip_svg_wrapper(r#"<svg><svg x="1"><g/></svg></svg>"#),
            r#"<svg x="1"><g/></svg>"#
        );
        assert_eq!(strip_svg_wrapper(r#"<svg fill="none"/>"#), "");
        assert_eq!(strip_svg_wrapper("<path/>"), "<path/>");
    }

    #[test]
    fn test_process_icon() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "User Profile.svg",
            r##"<svg viewBox="0 0 24 24"><path fill="#000" stroke-width="2" d="M0 0"/></svg>"##,
        );

        let icon = process_icon(&path, &Identity).unwrap();
        assert_eq!(icon.original_file, "User Profile.svg");
        assert_eq!(icon.sanitized_name, "user-profile");
        assert_eq!(icon.component_name, "UserProfileIcon");
        assert_eq!(icon.camel_case_name, "userProfile");
        assert_eq!(
            icon.optimized_svg,
            r#"<path fill="currentColor" strokeWidth="2" d="M0 0"/>"#
        );
        assert!(icon.svg_content.contains("#000"));
    }

    #[test]
    fn test_process_icon_leading_digit() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "24-hours.svg", "<svg><g/></svg>");

        let icon = process_icon(&path, &Identity).unwrap();
        assert_eq!(icon.sanitized_name, "icon-24-hours");
        assert_eq!(icon.component_name, "Icon24HoursIcon");
        assert_eq!(icon.camel_case_name, "icon24Hours");
    }

    #[test]
    fn test_process_icon_skips() {
        let dir = TempDir::new().unwrap();

        let png = write_file(&dir, "logo.png", "");
        assert!(matches!(process_icon(&png, &Identity), Err(ProcessError::NotSvg)));

        let symbols = write_file(&dir, "@@@.svg", "<svg/>");
        assert!(matches!(
            process_icon(&symbols, &Identity),
            Err(ProcessError::EmptyName)
        ));

        let missing = dir.path().join("missing.svg");
        assert!(matches!(
            process_icon(&missing, &Identity),
            Err(ProcessError::Read { .. })
        ));
    }

    #[test]
    fn test_process_icon_without_content() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "blank.svg", r#"<svg viewBox="0 0 24 24">  </svg>"#);
        assert!(matches!(
            process_icon(&path, &Identity),
            Err(ProcessError::EmptyContent)
        ));
    }

    #[test]
    fn test_process_icon_inline_style() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "blend.svg",
            r#"<svg><g style="mix-blend-mode:multiply" opacity="0.5"><path d="M0 0"/></g></svg>"#,
        );

        let icon = process_icon(&path, &Identity).unwrap();
        assert!(!icon.optimized_svg.contains(r#"style=""#));
        assert!(icon
            .optimized_svg
            .contains("style={{ mixBlendMode: 'multiply' }}"));
    }

    #[test]
    fn test_rename() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "home.svg", "<svg><g/></svg>");

        let mut icon = process_icon(&path, &Identity).unwrap();
        icon.rename("home-2".to_string());
        assert_eq!(icon.component_name, "Home2Icon");
        assert_eq!(icon.camel_case_name, "home2");
        assert_eq!(icon.original_file, "home.svg");
    }
}
