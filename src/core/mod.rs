pub mod ansi;
pub mod generator;
pub mod segments;
pub mod template;
pub mod title;

use log::debug;

use crate::config::Config;
use crate::env::Environment;
use segments::{build_segment, SegmentData};

pub use generator::PromptGenerator;
pub use segments::Segment;
pub use title::ConsoleTitle;

/// Evaluate every configured segment against the environment. Enablement is
/// decided (and cached) before the value is read; disabled segments are
/// dropped. Segments share no state, so a caller could evaluate them in any
/// order or in parallel.
pub fn collect_all_segments(config: &Config, env: &dyn Environment) -> Vec<SegmentData> {
    let mut collected = Vec::new();
    for segment_config in &config.segments {
        if !segment_config.enabled {
            continue;
        }
        let mut segment = build_segment(segment_config, env);
        if !segment.enabled() {
            debug!("segment {:?} not enabled", segment.id());
            continue;
        }
        collected.push(SegmentData {
            id: segment.id(),
            text: segment.string(),
        });
    }
    collected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SegmentConfig, SegmentId};
    use crate::env::mock::MockEnvironment;

    #[test]
    fn collects_only_enabled_segments() {
        let config = Config {
            separator: " ".to_string(),
            console_title: None,
            segments: vec![
                SegmentConfig::new(SegmentId::Ruby),
                SegmentConfig::new(SegmentId::Golang),
            ],
        };
        let env = MockEnvironment::new().with_files("*.rb", true);

        let collected = collect_all_segments(&config, &env);
        assert_eq!(collected.len(), 1);
        assert_eq!(collected[0].id, SegmentId::Ruby);
        assert_eq!(collected[0].text, "");
    }

    #[test]
    fn config_disabled_segments_are_skipped() {
        let mut ruby = SegmentConfig::new(SegmentId::Ruby);
        ruby.enabled = false;
        let config = Config {
            separator: " ".to_string(),
            console_title: None,
            segments: vec![ruby],
        };
        let env = MockEnvironment::new().with_files("*.rb", true);

        assert!(collect_all_segments(&config, &env).is_empty());
    }
}
