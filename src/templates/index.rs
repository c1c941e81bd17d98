use super::{HEADER, REGISTRY_MODULE, WRAPPER_MODULE};
use crate::config::Config;
use crate::processor::ProcessedIcon;

/// Generate the entry module re-exporting everything the mode produced
pub fn generate_index(icons: &[ProcessedIcon], config: &Config) -> String {
    let mut sections = Vec::new();

    if config.icon_mode.includes_registry() {
        let mut section = format!("export {{ {WRAPPER_MODULE} }} from './{WRAPPER_MODULE}';\n");
        if config.typescript {
            section.push_str(&format!(
                "export type {{ {WRAPPER_MODULE}Props }} from './{WRAPPER_MODULE}';\n"
            ));
        }
        section.push_str(&format!(
            "export {{ getIconComponent, hasIcon, getAllIconNames }} from './{REGISTRY_MODULE}';\n"
        ));
        sections.push(section);
    }

    if config.icon_mode.includes_direct() {
        let section: String = icons
            .iter()
            .map(|icon| {
                format!(
                    "export {{ {name} }} from './{name}';\n",
                    name = icon.component_name
                )
            })
            .collect();
        sections.push(section);
    }

    format!("{}\n{}", HEADER, sections.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IconMode;
    use pretty_assertions::assert_eq;

    fn icons() -> Vec<ProcessedIcon> {
        ["home", "user-profile"]
            .iter()
            .map(|name| {
                let mut icon = ProcessedIcon {
                    original_file: format!("{}.svg", name),
                    sanitized_name: String::new(),
                    component_name: String::new(),
                    camel_case_name: String::new(),
                    svg_content: String::new(),
                    optimized_svg: String::new(),
                };
                icon.rename(name.to_string());
                icon
            })
            .collect()
    }

    #[test]
    fn test_index_both() {
        let source = generate_index(&icons(), &Config::new("in", "out"));
        let expected = format!(
            "{HEADER}
export {{ Icon }} from './Icon';
export type {{ IconProps }} from './Icon';
export {{ getIconComponent, hasIcon, getAllIconNames }} from './IconRegistry';

export {{ HomeIcon }} from './HomeIcon';
export {{ UserProfileIcon }} from './UserProfileIcon';
"
        );
        assert_eq!(source, expected);
    }

    #[test]
    fn test_index_direct() {
        let config = Config::new("in", "out").with_icon_mode(IconMode::Direct);
        let source = generate_index(&icons(), &config);

        assert!(!source.contains("IconRegistry"));
        assert!(!source.contains("from './Icon'"));
        assert!(source.contains("export { HomeIcon } from './HomeIcon';"));
        assert!(source.contains("export { UserProfileIcon } from './UserProfileIcon';"));
    }

    #[test]
    fn test_index_registry_javascript() {
        let config = Config::new("in", "out")
            .with_icon_mode(IconMode::Registry)
            .with_typescript(false);
        let source = generate_index(&icons(), &config);

        assert!(source.contains("export { Icon } from './Icon';"));
        assert!(!source.contains("export type"));
        assert!(!source.contains("HomeIcon"));
    }
}
