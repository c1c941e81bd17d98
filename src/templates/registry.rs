use super::HEADER;
use crate::config::Config;
use crate::processor::ProcessedIcon;

/// Generate the registry module mapping registry keys to components.
///
/// Imports and entries follow the order of `icons`.
pub fn generate_registry(icons: &[ProcessedIcon], config: &Config) -> String {
    let ts = config.typescript;
    let mut out = String::new();

    out.push_str(HEADER);
    out.push('\n');
    if ts {
        out.push_str("import type { ComponentType, SVGProps } from 'react';\n");
    }
    for icon in icons {
        out.push_str(&format!(
            "import {{ {name} }} from './{name}';\n",
            name = icon.component_name
        ));
    }
    out.push('\n');

    if ts {
        out.push_str(
            "export type IconComponent = ComponentType<\n  \
             SVGProps<SVGSVGElement> & { size?: number | string; color?: string }\n>;\n\n",
        );
    }

    out.push_str("export const iconNames = [\n");
    for icon in icons {
        out.push_str(&format!("  '{}',\n", icon.camel_case_name));
    }
    out.push_str(if ts { "] as const;\n\n" } else { "];\n\n" });

    if ts {
        out.push_str("export type IconName = (typeof iconNames)[number];\n\n");
        out.push_str("const registry: Record<string, IconComponent> = {\n");
    } else {
        out.push_str("const registry = {\n");
    }
    for icon in icons {
        out.push_str(&format!(
            "  {}: {},\n",
            icon.camel_case_name, icon.component_name
        ));
    }
    out.push_str("};\n\n");

    let (name_param, component_return, bool_return, names_return) = if ts {
        (
            "name: string",
            ": IconComponent | undefined",
            ": boolean",
            ": string[]",
        )
    } else {
        ("name", "", "", "")
    };

    out.push_str(&format!(
        r#"export function getIconComponent({name_param}){component_return} {{
  return hasIcon(name) ? registry[name] : undefined;
}}

export function hasIcon({name_param}){bool_return} {{
  return Object.prototype.hasOwnProperty.call(registry, name);
}}

export function getAllIconNames(){names_return} {{
  return [...iconNames];
}}
"#
    ));

    out
}
