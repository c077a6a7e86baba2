pub mod system;

#[cfg(test)]
pub mod mock;

pub use system::SystemEnvironment;

use thiserror::Error;

/// Errors surfaced by an [`Environment`] provider. None of these are fatal
/// to a render; callers degrade to empty or fallback values.
#[derive(Debug, Error)]
pub enum EnvError {
    #[error("command `{command}` exited with status {status}")]
    CommandFailed { command: String, status: i32 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("lookup failed: {0}")]
    Lookup(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("registry access is not available on this platform")]
    UnsupportedPlatform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Linux,
    Darwin,
    Unknown,
}

/// A single typed value read from the Windows registry. Exactly one variant
/// is populated per read; formatting depends on the variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryValue {
    String(String),
    Dword(u32),
    Qword(u64),
}

/// Capability set the core queries instead of doing I/O itself.
///
/// Everything a segment or the title renderer knows about the machine comes
/// through this trait, so tests substitute [`mock::MockEnvironment`] and the
/// binary wires up [`SystemEnvironment`].
pub trait Environment {
    fn cwd(&self) -> String;
    fn home_dir(&self) -> String;
    fn path_separator(&self) -> char;

    /// Whether any file in the working directory matches the glob pattern.
    fn has_files(&self, pattern: &str) -> bool;

    /// Whether `name` resolves to an executable on the search path.
    fn has_command(&self, name: &str) -> bool;

    /// Run a command and capture trimmed stdout. A non-zero exit status is
    /// an error; spawning and output decoding failures are too.
    fn run_command(&self, name: &str, args: &[&str]) -> Result<String, EnvError>;

    /// Read a typed value from the Windows registry. Only meaningful when
    /// [`Environment::platform`] is [`Platform::Windows`].
    fn read_registry_value(&self, path: &str) -> Result<RegistryValue, EnvError>;

    /// Value of an environment variable, empty string when unset.
    fn env_var(&self, name: &str) -> String;

    fn current_user(&self) -> String;
    fn host_name(&self) -> Result<String, EnvError>;
    fn is_elevated(&self) -> bool;
    fn shell_name(&self) -> String;
    fn platform(&self) -> Platform;
}
