//! `crq config`: the TOML file holding parser, paging, and output defaults.
//!
//! Lookup order is `$CRQ_CONFIG`, then `$XDG_CONFIG_HOME/crq/config.toml`,
//! then `~/.config/crq/config.toml`.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CommandContext, CommandError, Result, DEFAULT_PAGE_SIZE};

/// Schema version written by this build.
const CONFIG_VERSION: u32 = 1;

/// Environment variable holding a full path to the config file.
pub const CONFIG_ENV: &str = "CRQ_CONFIG";

/// Template written by `crq config init`.
const DEFAULT_CONFIG: &str = r#"# crq configuration

# Config schema version (do not modify)
version = 1

# Filter parsing
[filter]
# normalize = true   # Accept keywords in any case (and, is not null, ...)
# strict = false     # Fail on malformed filters instead of using an empty one

# Pagination
[page]
# size = 20          # Page size when --size is not given

# Output preferences
[output]
# color = true       # Enable colors (respects NO_COLOR env)
"#;

/// On-disk configuration.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Schema version; a missing field means the current one.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Filter parsing settings.
    #[serde(default)]
    pub filter: FilterConfig,

    /// Pagination settings.
    #[serde(default)]
    pub page: PageConfig,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            filter: FilterConfig::default(),
            page: PageConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Filter parsing configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Uppercase keywords before tokenizing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize: Option<bool>,

    /// Reject malformed filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,
}

/// Pagination configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PageConfig {
    /// Default page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Resolves where the config file lives, whether or not it exists.
///
/// Resolution order: `CRQ_CONFIG`, then `$XDG_CONFIG_HOME/crq/config.toml`,
/// then `~/.config/crq/config.toml` on all platforms.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("crq").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("crq").join("config.toml"))
        .ok_or_else(|| {
            CommandError::Config("Could not determine config directory".to_string())
        })
}

/// Reads the config file. A missing file yields defaults.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    debug!(path = %path.display(), version = config.version, "loaded config");
    migrate_config(config)
}

/// Brings an older file up to [`CONFIG_VERSION`]. Files from a newer build
/// are rejected rather than silently misread.
fn migrate_config(mut config: Config) -> Result<Config> {
    if config.version > CONFIG_VERSION {
        return Err(CommandError::Config(format!(
            "Config version {} is newer than supported version {}",
            config.version, CONFIG_VERSION
        )));
    }

    // Version 1 is the initial schema; later versions upgrade here in order.
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Creates the parent directory of `path` if needed.
fn ensure_parent_dir(path: &std::path::Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            CommandError::Config(format!("Failed to create config directory: {}", e))
        })?;
    }
    Ok(())
}

/// Writes `config` back, creating the parent directory if needed.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;
    ensure_parent_dir(&path)?;

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Prints the effective settings.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        let options = ctx.parser.options();
        println!("[filter]");
        println!("  normalize: {}", show_setting(config.filter.normalize, options.normalize));
        println!("  strict: {}", show_setting(config.filter.strict, ctx.strict));

        println!("\n[page]");
        println!("  size: {}", show_setting(config.page.size, DEFAULT_PAGE_SIZE));

        println!("\n[output]");
        println!("  color: {}", show_setting(config.output.color, ctx.use_colors));

        if !path.exists() {
            println!("\n(No config file exists. Run 'crq config init' to create one.)");
        }
    }

    Ok(())
}

/// Renders a file setting, or the effective value marked as a default.
fn show_setting<T: std::fmt::Display>(value: Option<T>, effective: T) -> String {
    match value {
        Some(value) => value.to_string(),
        None => format!("{} (default)", effective),
    }
}

/// Executes the config init command.
pub fn execute_init(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = get_config_path()?;

    if path.exists() && !force {
        return Err(CommandError::Config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    ensure_parent_dir(&path)?;
    fs::write(&path, DEFAULT_CONFIG)
        .map_err(|e| CommandError::Config(format!("Failed to create config file: {}", e)))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Created default config at: {}", path.display());
    }

    Ok(())
}

/// Arguments to `crq config set`.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Updates one `section.key` setting and saves the file.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Sets `key` (as `section.field`) to the parsed `value`.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key.split_once('.') {
        Some(("filter", "normalize")) => config.filter.normalize = Some(parse_bool(value)?),
        Some(("filter", "strict")) => config.filter.strict = Some(parse_bool(value)?),
        Some(("page", "size")) => {
            let size = value
                .parse::<u64>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or_else(|| {
                    CommandError::Config(format!(
                        "Invalid page.size value '{}'. Use a positive integer",
                        value
                    ))
                })?;
            config.page.size = Some(size);
        }
        Some(("output", "color")) => config.output.color = Some(parse_bool(value)?),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: filter.normalize, filter.strict, page.size, output.color",
                key
            )));
        }
    }
    Ok(())
}

/// Prints the resolved config path.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}

/// Accepts the usual spellings of a boolean setting.
fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            s
        ))),
    }
}
