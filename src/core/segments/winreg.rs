use log::debug;

use super::Segment;
use crate::config::SegmentId;
use crate::env::{Environment, Platform, RegistryValue};

/// Shows a single Windows registry value.
///
/// On any other platform the segment is disabled without probing anything.
/// The configured fallback is consulted only when the read errors; a
/// successful read is shown verbatim, including the empty string.
pub struct WinregSegment<'a> {
    env: &'a dyn Environment,
    path: String,
    fallback: String,
    enabled: Option<bool>,
    value: String,
}

impl<'a> WinregSegment<'a> {
    pub fn new(env: &'a dyn Environment, path: String, fallback: String) -> Self {
        Self {
            env,
            path,
            fallback,
            enabled: None,
            value: String::new(),
        }
    }

    fn resolve(&mut self) -> bool {
        if self.env.platform() != Platform::Windows {
            return false;
        }
        match self.env.read_registry_value(&self.path) {
            Ok(value) => {
                self.value = format_value(&value);
                true
            }
            Err(e) => {
                debug!("registry read {} failed: {}", self.path, e);
                if self.fallback.is_empty() {
                    false
                } else {
                    self.value = self.fallback.clone();
                    true
                }
            }
        }
    }
}

fn format_value(value: &RegistryValue) -> String {
    match value {
        RegistryValue::String(s) => s.clone(),
        RegistryValue::Dword(v) => format!("0x{v:X}"),
        RegistryValue::Qword(v) => format!("0x{v:X}"),
    }
}

impl Segment for WinregSegment<'_> {
    fn enabled(&mut self) -> bool {
        if let Some(enabled) = self.enabled {
            return enabled;
        }
        let enabled = self.resolve();
        self.enabled = Some(enabled);
        enabled
    }

    fn string(&mut self) -> String {
        if self.enabled() {
            self.value.clone()
        } else {
            String::new()
        }
    }

    fn id(&self) -> SegmentId {
        SegmentId::Winreg
    }
}
