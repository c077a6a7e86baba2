use std::process::Command;

use log::debug;

use super::{EnvError, Environment, Platform, RegistryValue};

/// Production [`Environment`] backed by the actual process environment,
/// filesystem and (on Windows) registry.
pub struct SystemEnvironment {
    shell: String,
}

impl SystemEnvironment {
    /// `shell_override` comes from the `--shell` flag; without it the shell
    /// name falls back to the basename of `$SHELL`.
    pub fn new(shell_override: Option<String>) -> Self {
        let shell = shell_override.unwrap_or_else(|| shell_basename(&std::env::var("SHELL").unwrap_or_default()));
        Self { shell }
    }

    fn has_files_in(dir: &str, pattern: &str) -> bool {
        let full = format!("{}{}{}", dir, std::path::MAIN_SEPARATOR, pattern);
        match glob::glob(&full) {
            Ok(paths) => paths.filter_map(|p| p.ok()).next().is_some(),
            Err(e) => {
                debug!("invalid glob pattern {}: {}", pattern, e);
                false
            }
        }
    }
}

fn shell_basename(shell: &str) -> String {
    match shell.rsplit(['/', '\\']).next() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => "default".to_string(),
    }
}

impl Environment for SystemEnvironment {
    fn cwd(&self) -> String {
        std::env::current_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn home_dir(&self) -> String {
        dirs::home_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn path_separator(&self) -> char {
        std::path::MAIN_SEPARATOR
    }

    fn has_files(&self, pattern: &str) -> bool {
        Self::has_files_in(&self.cwd(), pattern)
    }

    fn has_command(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn run_command(&self, name: &str, args: &[&str]) -> Result<String, EnvError> {
        debug!("running {} {:?}", name, args);
        let output = Command::new(name).args(args).output()?;
        if !output.status.success() {
            return Err(EnvError::CommandFailed {
                command: name.to_string(),
                status: output.status.code().unwrap_or(-1),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    #[cfg(windows)]
    fn read_registry_value(&self, path: &str) -> Result<RegistryValue, EnvError> {
        windows_registry::read(path)
    }

    #[cfg(not(windows))]
    fn read_registry_value(&self, _path: &str) -> Result<RegistryValue, EnvError> {
        Err(EnvError::UnsupportedPlatform)
    }

    fn env_var(&self, name: &str) -> String {
        std::env::var(name).unwrap_or_default()
    }

    fn current_user(&self) -> String {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_default()
    }

    #[allow(unreachable_code)]
    fn host_name(&self) -> Result<String, EnvError> {
        #[cfg(unix)]
        {
            let name = nix::unistd::gethostname().map_err(|e| EnvError::Lookup(e.to_string()))?;
            return name
                .into_string()
                .map_err(|_| EnvError::Lookup("hostname is not valid utf-8".to_string()));
        }
        #[cfg(windows)]
        {
            return std::env::var("COMPUTERNAME").map_err(|e| EnvError::Lookup(e.to_string()));
        }
        Err(EnvError::Lookup("hostname not available".to_string()))
    }

    fn is_elevated(&self) -> bool {
        #[cfg(unix)]
        {
            nix::unistd::geteuid().is_root()
        }
        #[cfg(windows)]
        {
            unsafe { windows::Win32::UI::Shell::IsUserAnAdmin().as_bool() }
        }
        #[cfg(not(any(unix, windows)))]
        {
            false
        }
    }

    fn shell_name(&self) -> String {
        self.shell.clone()
    }

    fn platform(&self) -> Platform {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::Darwin
        } else if cfg!(target_os = "linux") {
            Platform::Linux
        } else {
            Platform::Unknown
        }
    }
}

#[cfg(windows)]
mod windows_registry {
    use windows::core::PCWSTR;
    use windows::Win32::System::Registry::{
        RegGetValueW, HKEY, HKEY_CLASSES_ROOT, HKEY_CURRENT_USER, HKEY_LOCAL_MACHINE, HKEY_USERS,
        REG_DWORD, REG_QWORD, REG_SZ, REG_VALUE_TYPE, RRF_RT_ANY,
    };

    use super::{EnvError, RegistryValue};

    fn wide(s: &str) -> Vec<u16> {
        s.encode_utf16().chain(std::iter::once(0)).collect()
    }

    /// Read `HIVE\Sub\Key\ValueName`. The last path component is the value
    /// name, everything between hive and value is the subkey.
    pub fn read(path: &str) -> Result<RegistryValue, EnvError> {
        let (hive, rest) = path
            .split_once('\\')
            .ok_or_else(|| EnvError::Registry(format!("invalid registry path: {path}")))?;
        let root: HKEY = match hive {
            "HKLM" | "HKEY_LOCAL_MACHINE" => HKEY_LOCAL_MACHINE,
            "HKCU" | "HKEY_CURRENT_USER" => HKEY_CURRENT_USER,
            "HKCR" | "HKEY_CLASSES_ROOT" => HKEY_CLASSES_ROOT,
            "HKU" | "HKEY_USERS" => HKEY_USERS,
            other => return Err(EnvError::Registry(format!("unknown registry hive: {other}"))),
        };
        let (key, value) = rest
            .rsplit_once('\\')
            .ok_or_else(|| EnvError::Registry(format!("registry path has no value name: {path}")))?;

        let key_w = wide(key);
        let value_w = wide(value);
        let mut value_type = REG_VALUE_TYPE::default();
        let mut size: u32 = 0;

        unsafe {
            RegGetValueW(
                root,
                PCWSTR(key_w.as_ptr()),
                PCWSTR(value_w.as_ptr()),
                RRF_RT_ANY,
                Some(&mut value_type),
                None,
                Some(&mut size),
            )
            .ok()
            .map_err(|e| EnvError::Registry(e.to_string()))?;

            let mut buf = vec![0u8; size as usize];
            RegGetValueW(
                root,
                PCWSTR(key_w.as_ptr()),
                PCWSTR(value_w.as_ptr()),
                RRF_RT_ANY,
                Some(&mut value_type),
                Some(buf.as_mut_ptr() as *mut _),
                Some(&mut size),
            )
            .ok()
            .map_err(|e| EnvError::Registry(e.to_string()))?;

            match value_type {
                REG_SZ => {
                    let units: Vec<u16> = buf
                        .chunks_exact(2)
                        .map(|c| u16::from_le_bytes([c[0], c[1]]))
                        .take_while(|&u| u != 0)
                        .collect();
                    Ok(RegistryValue::String(String::from_utf16_lossy(&units)))
                }
                REG_DWORD if buf.len() >= 4 => Ok(RegistryValue::Dword(u32::from_le_bytes([
                    buf[0], buf[1], buf[2], buf[3],
                ]))),
                REG_QWORD if buf.len() >= 8 => Ok(RegistryValue::Qword(u64::from_le_bytes([
                    buf[0], buf[1], buf[2], buf[3], buf[4], buf[5], buf[6], buf[7],
                ]))),
                other => Err(EnvError::Registry(format!(
                    "unsupported registry value type: {}",
                    other.0
                ))),
            }
        }
    }
}
