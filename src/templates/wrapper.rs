use super::{HEADER, REGISTRY_MODULE, WRAPPER_MODULE};
use crate::config::Config;

/// Generate the `Icon` component that picks an icon from the registry by name.
///
/// Unknown names log a warning in the browser and render nothing.
pub fn generate_wrapper(config: &Config) -> String {
    let (props_type, props_annotation) = if config.typescript {
        (
            format!(
                r#"
export interface {WRAPPER_MODULE}Props extends React.SVGProps<SVGSVGElement> {{
  icon: string;
  size?: number | string;
  color?: string;
}}
"#
            ),
            format!(": {WRAPPER_MODULE}Props"),
        )
    } else {
        (String::new(), String::new())
    };

    format!(
        r#"{HEADER}
import React from 'react';
import {{ getIconComponent }} from './{REGISTRY_MODULE}';
{props_type}
export const {WRAPPER_MODULE} = ({{ icon, ...props }}{props_annotation}) => {{
  const IconComponent = getIconComponent(icon);

  if (!IconComponent) {{
    console.warn(`Icon "${{icon}}" not found in registry`);
    return null;
  }}

  return <IconComponent {{...props}} />;
}};

{WRAPPER_MODULE}.displayName = '{WRAPPER_MODULE}';

export default {WRAPPER_MODULE};
"#
    )
}
