use super::{indent, HEADER};
use crate::config::Config;
use crate::processor::ProcessedIcon;

/// Width and height used when neither `size` nor `width` is given
const DEFAULT_SIZE: u32 = 20;

/// Generate the standalone component for one icon
pub fn generate_component(icon: &ProcessedIcon, config: &Config) -> String {
    let name = &icon.component_name;

    let (props_type, props_annotation) = if config.typescript {
        (
            format!(
                r#"
export interface {name}Props extends React.SVGProps<SVGSVGElement> {{
  size?: number | string;
  color?: string;
}}
"#
            ),
            format!(": {name}Props"),
        )
    } else {
        (String::new(), String::new())
    };

    format!(
        r#"{HEADER}
import React from 'react';
{props_type}
export const {name} = ({{
  size,
  width,
  height,
  color = 'currentColor',
  className = '',
  style,
  ...props
}}{props_annotation}) => {{
  const resolvedWidth = size ?? width ?? {DEFAULT_SIZE};
  const resolvedHeight = size ?? height ?? resolvedWidth;

  return (
    <svg
      xmlns="http://www.w3.org/2000/svg"
      viewBox="0 0 24 24"
      width={{resolvedWidth}}
      height={{resolvedHeight}}
      fill={{color}}
      className={{`{base_class} ${{className}}`.trim()}}
      style={{{{ color, ...style }}}}
      {{...props}}
    >
{children}
    </svg>
  );
}};

{name}.displayName = '{name}';

export default {name};
"#,
        base_class = escape_template_literal(&config.class_name),
        children = indent(&icon.optimized_svg, 6),
    )
}

/// Make `text` safe to embed in a JavaScript template literal
fn escape_template_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace("${", "\\${")
}
