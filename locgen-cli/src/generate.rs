//! The generation run: parse everything, clear the output directories,
//! write every artifact.
//!
//! Output layout under the `--output` root:
//!
//! ```text
//! common/kotlin/    accessor tree, contract, formatter
//! jvm/kotlin/       jvm actual implementation
//! jvm/resources/    resource bundles
//! android/kotlin/   android actual implementation
//! android/res/      values[-tag]/strings.xml
//! ```
//!
//! The output root is owned exclusively by locgen: all five subdirectories
//! are cleared before writing, and a failed run may leave partial output
//! (the caller treats any reported error as "regenerate next run").

use std::error::Error;
use std::path::{Path, PathBuf};

use locgen::{
    AndroidBackend, Backend, Generator, JvmBackend, Locale, MessageMap, emit_common_api, source,
};

use crate::config::Config;

const OUTPUT_DIRS: [&str; 5] = [
    "common/kotlin",
    "jvm/kotlin",
    "jvm/resources",
    "android/kotlin",
    "android/res",
];

/// What a run produced, for reporting.
pub struct Summary {
    pub keys: usize,
    pub locales: usize,
    pub artifacts: usize,
}

struct Plan {
    generator: Generator,
    locales: Vec<(Locale, MessageMap)>,
}

fn load(input: &Path, config: &Config) -> Result<Plan, Box<dyn Error>> {
    let base_dir = input.join("root");
    let base = source::parse_locale_dir(&base_dir, "root")
        .map_err(|e| format!("base locale ({}): {}", base_dir.display(), e))?;
    tracing::info!(keys = base.len(), "parsed base locale");

    let generator = Generator::new(config.package.as_str(), base)?;

    let mut locales = Vec::new();
    for locale_config in &config.locales {
        let locale = locale_config.to_locale()?;
        let dir = input.join(&locale_config.name);
        let map = source::parse_locale_dir(&dir, &locale_config.name)
            .map_err(|e| format!("locale {} ({}): {}", locale_config.name, dir.display(), e))?;
        tracing::info!(locale = locale.name(), keys = map.len(), "parsed overlay locale");
        locales.push((locale, map));
    }

    Ok(Plan { generator, locales })
}

/// Runs the whole pipeline in memory, returning every artifact as an
/// output-root-relative path plus contents.
fn emit_all(plan: &Plan, config: &Config) -> Result<Vec<(PathBuf, String)>, Box<dyn Error>> {
    let mut files = Vec::new();

    for artifact in emit_common_api(&plan.generator, config.compose)? {
        files.push((Path::new("common/kotlin").join(artifact.path), artifact.contents));
    }

    if config.jvm {
        emit_backend(
            &JvmBackend::new(config.compose),
            plan,
            "jvm/kotlin",
            "jvm/resources",
            &mut files,
        )?;
    }
    if config.android {
        emit_backend(
            &AndroidBackend::new(config.compose),
            plan,
            "android/kotlin",
            "android/res",
            &mut files,
        )?;
    }

    Ok(files)
}

fn emit_backend(
    backend: &dyn Backend,
    plan: &Plan,
    kotlin_dir: &str,
    resource_dir: &str,
    files: &mut Vec<(PathBuf, String)>,
) -> Result<(), Box<dyn Error>> {
    for artifact in backend.emit_api(&plan.generator)? {
        files.push((Path::new(kotlin_dir).join(artifact.path), artifact.contents));
    }

    let base = backend.emit_resources(&plan.generator, None, None)?;
    files.push((Path::new(resource_dir).join(base.path), base.contents));

    for (locale, overlay) in &plan.locales {
        let artifact = backend.emit_resources(&plan.generator, Some(locale), Some(overlay))?;
        files.push((Path::new(resource_dir).join(artifact.path), artifact.contents));
    }

    Ok(())
}

/// `generate`: parse, clear the output subdirectories, write all artifacts.
pub fn run_generate(input: &Path, output: &Path, config: &Config) -> Result<Summary, Box<dyn Error>> {
    let plan = load(input, config)?;
    let files = emit_all(&plan, config)?;

    for dir in OUTPUT_DIRS {
        clear_dir(&output.join(dir))?;
    }

    for (path, contents) in &files {
        let target = output.join(path);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&target, contents)?;
        tracing::info!(path = %path.display(), "wrote artifact");
    }

    Ok(Summary {
        keys: plan.generator.base().len(),
        locales: plan.locales.len(),
        artifacts: files.len(),
    })
}

/// `check`: the full pipeline with no filesystem output.
pub fn run_check(input: &Path, config: &Config) -> Result<Summary, Box<dyn Error>> {
    let plan = load(input, config)?;
    let files = emit_all(&plan, config)?;

    Ok(Summary {
        keys: plan.generator.base().len(),
        locales: plan.locales.len(),
        artifacts: files.len(),
    })
}

/// Removes the directory's contents, keeping (or creating) the directory
/// itself.
fn clear_dir(path: &Path) -> Result<(), std::io::Error> {
    if path.exists() {
        std::fs::remove_dir_all(path)?;
    }
    std::fs::create_dir_all(path)
}
