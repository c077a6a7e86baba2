use std::collections::HashMap;

use super::{EnvError, Environment, Platform, RegistryValue};

/// Canned-answer [`Environment`] for unit tests. Every capability answers
/// from a map or field set up front, so detection chains and rendering run
/// without processes, filesystems or registries.
pub struct MockEnvironment {
    cwd: String,
    home: String,
    separator: char,
    files: HashMap<String, bool>,
    commands: HashMap<String, bool>,
    command_output: HashMap<String, Result<String, i32>>,
    registry: HashMap<String, Result<RegistryValue, String>>,
    env_vars: HashMap<String, String>,
    user: String,
    host: Result<String, String>,
    elevated: bool,
    shell: String,
    platform: Platform,
}

impl Default for MockEnvironment {
    fn default() -> Self {
        Self {
            cwd: "/usr/home/project".to_string(),
            home: "/usr/home".to_string(),
            separator: '/',
            files: HashMap::new(),
            commands: HashMap::new(),
            command_output: HashMap::new(),
            registry: HashMap::new(),
            env_vars: HashMap::new(),
            user: String::new(),
            host: Ok(String::new()),
            elevated: false,
            shell: "default".to_string(),
            platform: Platform::Linux,
        }
    }
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cwd(mut self, cwd: &str) -> Self {
        self.cwd = cwd.to_string();
        self
    }

    pub fn with_home(mut self, home: &str) -> Self {
        self.home = home.to_string();
        self
    }

    pub fn with_separator(mut self, sep: char) -> Self {
        self.separator = sep;
        self
    }

    pub fn with_files(mut self, pattern: &str, present: bool) -> Self {
        self.files.insert(pattern.to_string(), present);
        self
    }

    pub fn with_command(mut self, name: &str, installed: bool) -> Self {
        self.commands.insert(name.to_string(), installed);
        self
    }

    pub fn with_output(mut self, name: &str, stdout: &str) -> Self {
        self.command_output.insert(name.to_string(), Ok(stdout.to_string()));
        self
    }

    pub fn with_failing_command(mut self, name: &str, status: i32) -> Self {
        self.command_output.insert(name.to_string(), Err(status));
        self
    }

    pub fn with_registry_value(mut self, path: &str, value: RegistryValue) -> Self {
        self.registry.insert(path.to_string(), Ok(value));
        self
    }

    pub fn with_registry_error(mut self, path: &str, message: &str) -> Self {
        self.registry.insert(path.to_string(), Err(message.to_string()));
        self
    }

    pub fn with_env_var(mut self, name: &str, value: &str) -> Self {
        self.env_vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_user(mut self, user: &str) -> Self {
        self.user = user.to_string();
        self
    }

    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Ok(host.to_string());
        self
    }

    pub fn with_host_error(mut self, message: &str) -> Self {
        self.host = Err(message.to_string());
        self
    }

    pub fn with_elevated(mut self, elevated: bool) -> Self {
        self.elevated = elevated;
        self
    }

    pub fn with_shell(mut self, shell: &str) -> Self {
        self.shell = shell.to_string();
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

impl Environment for MockEnvironment {
    fn cwd(&self) -> String {
        self.cwd.clone()
    }

    fn home_dir(&self) -> String {
        self.home.clone()
    }

    fn path_separator(&self) -> char {
        self.separator
    }

    fn has_files(&self, pattern: &str) -> bool {
        self.files.get(pattern).copied().unwrap_or(false)
    }

    fn has_command(&self, name: &str) -> bool {
        self.commands.get(name).copied().unwrap_or(false)
    }

    fn run_command(&self, name: &str, _args: &[&str]) -> Result<String, EnvError> {
        match self.command_output.get(name) {
            Some(Ok(stdout)) => Ok(stdout.clone()),
            Some(Err(status)) => Err(EnvError::CommandFailed {
                command: name.to_string(),
                status: *status,
            }),
            None => Ok(String::new()),
        }
    }

    fn read_registry_value(&self, path: &str) -> Result<RegistryValue, EnvError> {
        match self.registry.get(path) {
            Some(Ok(value)) => Ok(value.clone()),
            Some(Err(message)) => Err(EnvError::Registry(message.clone())),
            None => Err(EnvError::Registry(format!("no value at {path}"))),
        }
    }

    fn env_var(&self, name: &str) -> String {
        self.env_vars.get(name).cloned().unwrap_or_default()
    }

    fn current_user(&self) -> String {
        self.user.clone()
    }

    fn host_name(&self) -> Result<String, EnvError> {
        match &self.host {
            Ok(host) => Ok(host.clone()),
            Err(message) => Err(EnvError::Lookup(message.clone())),
        }
    }

    fn is_elevated(&self) -> bool {
        self.elevated
    }

    fn shell_name(&self) -> String {
        self.shell.clone()
    }

    fn platform(&self) -> Platform {
        self.platform
    }
}
