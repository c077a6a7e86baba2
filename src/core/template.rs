use std::collections::HashMap;

use handlebars::Handlebars;
use log::debug;
use regex::Regex;
use serde::Serialize;

use crate::env::Environment;

/// Read-only snapshot of environment facts for one render.
///
/// Field names are what templates reference: `{{PWD}}`, `{{Folder}}`,
/// `{{#if Root}}`, `{{User}}`, `{{Host}}`, `{{Shell}}`, `{{Env.NAME}}`.
/// Built once per render, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    #[serde(rename = "PWD")]
    pub pwd: String,
    #[serde(rename = "Folder")]
    pub folder: String,
    #[serde(rename = "Root")]
    pub root: bool,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Host")]
    pub host: String,
    #[serde(rename = "Shell")]
    pub shell: String,
    #[serde(rename = "Env")]
    pub env: HashMap<String, String>,
}

impl TemplateContext {
    /// Snapshot the environment. The template is scanned for `Env.NAME`
    /// references so arbitrary variables resolve without mutating the
    /// context during rendering. A failed host lookup becomes an empty
    /// string, never an error.
    pub fn build(env: &dyn Environment, template: &str) -> Self {
        let pwd = display_path(env);
        let folder = folder_name(&pwd);
        let host = match env.host_name() {
            Ok(host) => host,
            Err(e) => {
                debug!("hostname lookup failed: {}", e);
                String::new()
            }
        };
        let env_vars = scan_env_refs(template)
            .into_iter()
            .map(|name| {
                let value = env.env_var(&name);
                (name, value)
            })
            .collect();

        Self {
            pwd,
            folder,
            root: env.is_elevated(),
            user: env.current_user(),
            host,
            shell: env.shell_name(),
            env: env_vars,
        }
    }
}

/// Home-relative display of the working directory: a leading match of the
/// home directory becomes `~`, preserving the platform separator. Anything
/// else is shown verbatim.
pub fn display_path(env: &dyn Environment) -> String {
    let cwd = env.cwd();
    let home = env.home_dir();
    if home.is_empty() || !cwd.starts_with(&home) {
        return cwd;
    }
    let rest = &cwd[home.len()..];
    if rest.is_empty() {
        return "~".to_string();
    }
    // Only shorten on a component boundary; /usr/homestead is not inside
    // /usr/home.
    if rest.starts_with(env.path_separator()) {
        return format!("~{}", rest);
    }
    cwd
}

/// Final path component, regardless of separator style.
pub fn folder_name(path: &str) -> String {
    path.rsplit(['/', '\\'])
        .find(|part| !part.is_empty())
        .unwrap_or(path)
        .to_string()
}

/// Render a template against the snapshot. Missing fields substitute as
/// empty text, and a malformed template degrades to an empty string rather
/// than failing the prompt.
pub fn render(template: &str, context: &TemplateContext) -> String {
    let mut hbs = Handlebars::new();
    // Terminal output, not HTML.
    hbs.register_escape_fn(handlebars::no_escape);
    match hbs.render_template(template, context) {
        Ok(text) => text,
        Err(e) => {
            debug!("template render failed: {}", e);
            String::new()
        }
    }
}

fn scan_env_refs(template: &str) -> Vec<String> {
    let Ok(re) = Regex::new(r"Env\.([A-Za-z_][A-Za-z0-9_]*)") else {
        return Vec::new();
    };
    re.captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}
