use crate::config::Config;
use crate::core::ansi::{self, RESET};
use crate::core::segments::SegmentData;

/// Joins collected segment values into the prompt line, applying the
/// per-segment prefix and color options.
pub struct PromptGenerator {
    config: Config,
}

impl PromptGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn generate(&self, segments: Vec<SegmentData>) -> String {
        let mut parts = Vec::new();
        for data in segments {
            let Some(segment_config) = self.config.segments.iter().find(|s| s.id == data.id) else {
                continue;
            };
            let text = format!("{}{}", segment_config.prefix(), data.text);
            // Enabled but valueless segments may still show their prefix
            // (an icon); fully empty entries would only add separators.
            if text.is_empty() {
                continue;
            }
            match segment_config.color().as_deref().and_then(ansi::color_code) {
                Some(code) => parts.push(format!("{}{}{}", code, text, RESET)),
                None => parts.push(text),
            }
        }
        parts.join(&self.config.separator)
    }
}
