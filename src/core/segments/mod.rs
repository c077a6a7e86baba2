pub mod dotnet;
pub mod golang;
pub mod java;
pub mod language;
pub mod node;
pub mod python;
pub mod ruby;
pub mod rust;
pub mod winreg;

use serde::Serialize;

use crate::config::{SegmentConfig, SegmentId};
use crate::env::Environment;

/// A unit of prompt content with independent enablement and rendering.
///
/// `enabled()` is evaluated once per render pass and cached; `string()` is
/// only meaningful after `enabled()` returned true. Instances live for a
/// single render and are discarded afterwards.
pub trait Segment {
    fn enabled(&mut self) -> bool;
    fn string(&mut self) -> String;
    fn id(&self) -> SegmentId;
}

/// Collected output of one enabled segment.
#[derive(Debug, Clone, Serialize)]
pub struct SegmentData {
    pub id: SegmentId,
    pub text: String,
}

// Re-export the segment building blocks
pub use language::{Detector, LanguageSegment};
pub use winreg::WinregSegment;

/// Build the segment behind a config entry.
pub fn build_segment<'a>(config: &SegmentConfig, env: &'a dyn Environment) -> Box<dyn Segment + 'a> {
    match config.id {
        SegmentId::Ruby => Box::new(ruby::segment(env, config.fetch_version())),
        SegmentId::Node => Box::new(node::segment(env, config.fetch_version())),
        SegmentId::Python => Box::new(python::segment(env, config.fetch_version())),
        SegmentId::Golang => Box::new(golang::segment(env, config.fetch_version())),
        SegmentId::Rust => Box::new(rust::segment(env, config.fetch_version())),
        SegmentId::Java => Box::new(java::segment(env, config.fetch_version())),
        SegmentId::Dotnet => Box::new(dotnet::segment(env, config.fetch_version())),
        SegmentId::Winreg => Box::new(WinregSegment::new(
            env,
            config.registry_path(),
            config.fallback(),
        )),
    }
}
