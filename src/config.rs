use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentId {
    Ruby,
    Node,
    Python,
    Golang,
    Rust,
    Java,
    Dotnet,
    Winreg,
}

/// One configured segment. Segment-specific knobs live in `options` so new
/// segments don't grow the config schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentConfig {
    pub id: SegmentId,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub options: HashMap<String, toml::Value>,
}

impl SegmentConfig {
    pub fn new(id: SegmentId) -> Self {
        Self {
            id,
            enabled: true,
            options: HashMap::new(),
        }
    }

    fn bool_option(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(|v| v.as_bool())
            .unwrap_or(default)
    }

    fn str_option(&self, key: &str) -> String {
        self.options
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string()
    }

    /// Whether a language segment should invoke the external tool to fetch
    /// a version. Off by default so a render spawns no processes unless
    /// asked to.
    pub fn fetch_version(&self) -> bool {
        self.bool_option("fetch_version", false)
    }

    /// Registry path for the winreg segment, e.g.
    /// `HKLM\Software\Microsoft\Windows NT\CurrentVersion\ProductName`.
    pub fn registry_path(&self) -> String {
        self.str_option("path")
    }

    /// Static substitute shown only when the registry read errors.
    pub fn fallback(&self) -> String {
        self.str_option("fallback")
    }

    /// Text prepended to the segment value (icon or label).
    pub fn prefix(&self) -> String {
        self.str_option("prefix")
    }

    /// Named color applied to the rendered segment, if any.
    pub fn color(&self) -> Option<String> {
        self.options
            .get("color")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleStyle {
    FolderName,
    FullPath,
    Template,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleConfig {
    pub style: TitleStyle,
    #[serde(default)]
    pub template: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_separator")]
    pub separator: String,
    #[serde(default)]
    pub console_title: Option<TitleConfig>,
    #[serde(default)]
    pub segments: Vec<SegmentConfig>,
}

pub enum InitResult {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with fallback locations
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let config_paths = [
            Self::config_path(),
            Some(Path::new("promptline.toml").to_path_buf()),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                return Self::load_from_file(path);
            }
        }

        Ok(Self::default())
    }

    /// Write the commented default config, unless one already exists.
    pub fn init() -> Result<InitResult, Box<dyn std::error::Error>> {
        let path = Self::config_path().ok_or("could not determine config directory")?;
        if path.exists() {
            return Ok(InitResult::AlreadyExists(path));
        }
        Self::create_default_file(&path)?;
        Ok(InitResult::Created(path))
    }

    /// Validate segment options that cannot be checked by deserialization.
    pub fn check(&self) -> Result<(), Box<dyn std::error::Error>> {
        for segment in &self.segments {
            if segment.id == SegmentId::Winreg && segment.registry_path().is_empty() {
                return Err("winreg segment requires a `path` option".into());
            }
        }
        if let Some(title) = &self.console_title {
            if title.style == TitleStyle::Template && title.template.is_empty() {
                return Err("console_title style `template` requires a `template` string".into());
            }
        }
        Ok(())
    }

    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("promptline").join("config.toml"))
    }

    /// Create default configuration file with a commented template
    pub fn create_default_file<P: AsRef<Path>>(path: P) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let template_content = r#"# promptline configuration
# File location: ~/.config/promptline/config.toml

separator = " "

# Console title written as an OSC 0 escape before the prompt line.
# style: "folder_name", "full_path" or "template"
[console_title]
style = "template"
template = "{{Folder}}{{#if Root}} :: Admin{{/if}} :: {{Shell}}"

# Language segments show up when the working directory contains matching
# files or the backing tool is installed. Set fetch_version = true to run
# the tool and display the active version.
#
# [[segments]]
# id = "ruby"
# [segments.options]
# fetch_version = true
# prefix = "rb "
# color = "red"

[[segments]]
id = "ruby"

[[segments]]
id = "node"

[[segments]]
id = "python"

[[segments]]
id = "golang"

[[segments]]
id = "rust"

[[segments]]
id = "java"

[[segments]]
id = "dotnet"

# Windows registry segment. The fallback is shown only when the read fails.
#
# [[segments]]
# id = "winreg"
# [segments.options]
# path = 'HKLM\Software\Microsoft\Windows NT\CurrentVersion\ProductName'
# fallback = "Windows"
"#;

        fs::write(path, template_content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            console_title: Some(TitleConfig {
                style: TitleStyle::FolderName,
                template: String::new(),
            }),
            segments: vec![
                SegmentConfig::new(SegmentId::Ruby),
                SegmentConfig::new(SegmentId::Node),
                SegmentConfig::new(SegmentId::Python),
                SegmentConfig::new(SegmentId::Golang),
                SegmentConfig::new(SegmentId::Rust),
                SegmentConfig::new(SegmentId::Java),
                SegmentConfig::new(SegmentId::Dotnet),
            ],
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_separator() -> String {
    " ".to_string()
}
