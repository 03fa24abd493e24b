//! Validator configuration discovery (lufa-theme.toml) and CLI overrides

use anyhow::{Context, Result};
use lufa_theme::config::validate_prefix;
use lufa_theme::{ConformanceLevel, TokenManifest, ValidatorConfig};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "lufa-theme.toml";

/// Settings given on the command line; they win over the config file
#[derive(Debug, Default)]
pub struct Overrides {
    pub prefix: Option<String>,
    pub level: Option<ConformanceLevel>,
    pub skip_completeness: bool,
    pub skip_contrast: bool,
    pub skip_format: bool,
    pub manifest: Option<PathBuf>,
}

/// Load the configuration
///
/// An explicit path must exist. Without one, `lufa-theme.toml` in `dir` is
/// used when present, otherwise the defaults. Returns the file that was read.
pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<(ValidatorConfig, Option<PathBuf>)> {
    let config_path = match explicit {
        Some(path) => {
            if !path.is_file() {
                anyhow::bail!("Config file {} does not exist", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok((ValidatorConfig::default(), None));
            }
            candidate
        }
    };

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config = ValidatorConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse {}", config_path.display()))?;

    Ok((config, Some(config_path)))
}

/// Apply command-line overrides on top of a loaded configuration
pub fn apply_overrides(config: &mut ValidatorConfig, overrides: &Overrides) -> Result<()> {
    if let Some(prefix) = &overrides.prefix {
        validate_prefix(prefix)?;
        config.prefix = prefix.clone();
    }
    if let Some(level) = overrides.level {
        config.contrast.level = level;
    }
    if overrides.skip_completeness {
        config.checks.completeness = false;
    }
    if overrides.skip_contrast {
        config.checks.contrast = false;
    }
    if overrides.skip_format {
        config.checks.format = false;
    }
    if let Some(path) = &overrides.manifest {
        let manifest = load_manifest(path)?;
        config.completeness.required = Some(manifest.required().to_vec());
    }
    Ok(())
}

/// Read a required-token list: one name per line, `#` or `//` comments
pub fn load_manifest(path: &Path) -> Result<TokenManifest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest {}", path.display()))?;
    TokenManifest::parse_list(&content)
        .with_context(|| format!("Invalid manifest {}", path.display()))
}

/// Serialize the effective configuration
pub fn to_toml(config: &ValidatorConfig) -> Result<String> {
    toml::to_string_pretty(config).context("Failed to serialize config")
}
