use crate::config::{Config, RawConfig};
use crate::error::GenerateError;
use crate::hook;
use crate::naming::UniqueNames;
use crate::optimizer::{Optimizer, UsvgOptimizer};
use crate::processor::{process_icon, ProcessedIcon};
use crate::templates::{self, REGISTRY_MODULE, WRAPPER_MODULE};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Outcome of a successful generation run
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Component names in output order
    pub components: Vec<String>,
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
    /// Input files that were skipped, with the reason
    pub skipped: Vec<(String, String)>,
    /// `None` when no post-generate command is configured
    pub hook_succeeded: Option<bool>,
}

/// Validate `config`, then generate components with the default optimizer
pub fn generate(config: RawConfig) -> Result<GenerateReport, GenerateError> {
    let config = config.resolve()?;
    let optimizer = UsvgOptimizer::new(config.optimizer.clone())?;
    generate_with(&config, &optimizer)
}

/// Generate components from `config.input_dir` into `config.output_dir`
pub fn generate_with(
    config: &Config,
    optimizer: &dyn Optimizer,
) -> Result<GenerateReport, GenerateError> {
    for dir in [&config.input_dir, &config.output_dir] {
        std::fs::create_dir_all(dir).map_err(|e| GenerateError::io(dir, e))?;
    }

    debug!("Scanning SVG files in: {}", config.input_dir.display());
    let files = discover_svg_files(&config.input_dir);
    if files.is_empty() {
        return Err(GenerateError::DiscoveryEmpty {
            dir: config.input_dir.clone(),
        });
    }
    info!("Found {} SVG files", files.len());

    let mut report = GenerateReport::default();
    let icons = process_files(&files, optimizer, &mut report);
    if icons.is_empty() {
        return Err(GenerateError::AllFilesFailed {
            attempted: files.len(),
        });
    }

    let ext = config.component_extension();
    for icon in &icons {
        let file_name = format!("{}.{}", icon.component_name, ext);
        let source = templates::generate_component(icon, config);
        write_output(config, &file_name, &source, &mut report)?;
        report.components.push(icon.component_name.clone());
    }

    if config.icon_mode.includes_registry() {
        write_output(
            config,
            &format!("{}.{}", REGISTRY_MODULE, ext),
            &templates::generate_registry(&icons, config),
            &mut report,
        )?;
        write_output(
            config,
            &format!("{}.{}", WRAPPER_MODULE, ext),
            &templates::generate_wrapper(config),
            &mut report,
        )?;
    }

    write_output(
        config,
        &format!("index.{}", config.index_extension()),
        &templates::generate_index(&icons, config),
        &mut report,
    )?;

    info!(
        "Generated {} icons ({} skipped) in {}",
        icons.len(),
        report.skipped.len(),
        config.output_dir.display()
    );

    if let Some(command) = &config.post_generate {
        let succeeded = match hook::run_post_generate(command) {
            Ok(()) => {
                info!("Post-generate command finished");
                true
            }
            Err(e) => {
                warn!("Post-generate command failed: {}", e);
                false
            }
        };
        report.hook_succeeded = Some(succeeded);
    }

    Ok(report)
}

/// `*.svg` regular files directly inside `dir`, sorted by file name
fn discover_svg_files(dir: &Path) -> Vec<PathBuf> {
    let mut entries: Vec<_> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Failed to read directory entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|name| name.ends_with(".svg"))
                .unwrap_or(false)
        })
        .collect();

    // Sort for deterministic output order
    entries.sort_by(|a, b| a.file_name().cmp(b.file_name()));

    entries.into_iter().map(|e| e.into_path()).collect()
}

fn process_files(
    files: &[PathBuf],
    optimizer: &dyn Optimizer,
    report: &mut GenerateReport,
) -> Vec<ProcessedIcon> {
    let mut icons = Vec::new();
    let mut names = UniqueNames::new();

    for path in files {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        match process_icon(path, optimizer) {
            Ok(mut icon) => {
                let unique = names.claim(&icon.sanitized_name);
                if unique != icon.sanitized_name {
                    warn!(
                        "{} collides with an earlier icon named {}, using {}",
                        file, icon.sanitized_name, unique
                    );
                    icon.rename(unique);
                }
                info!("  {} -> {}", file, icon.component_name);
                icons.push(icon);
            }
            Err(e) => {
                warn!("  Skipping {}: {}", file, e);
                report.skipped.push((file, e.to_string()));
            }
        }
    }

    icons
}

fn write_output(
    config: &Config,
    file_name: &str,
    contents: &str,
    report: &mut GenerateReport,
) -> Result<(), GenerateError> {
    let path = config.output_dir.join(file_name);
    std::fs::write(&path, contents).map_err(|e| GenerateError::io(&path, e))?;
    debug!("Wrote {}", path.display());
    report.written.push(path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_discover_svg_files() {
        let dir = TempDir::new().unwrap();
        for name in ["b.svg", "a.svg", "notes.txt", "c.svg.bak"] {
            std::fs::write(dir.path().join(name), "<svg/>").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.svg")).unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub").join("deep.svg"), "<svg/>").unwrap();

        let files = discover_svg_files(dir.path());
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.svg", "b.svg"]);
    }

    #[test]
    fn test_discover_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        assert!(discover_svg_files(&dir.path().join("nope")).is_empty());
    }
}
