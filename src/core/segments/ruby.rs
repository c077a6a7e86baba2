use super::language::{self, Detector, LanguageSegment};
use crate::config::SegmentId;
use crate::env::Environment;

const FILE_PATTERNS: &[&str] = &["*.rb", "Rakefile", "Gemfile"];

// Version managers first, the interpreter banner as a last resort.
const DETECTORS: &[Detector] = &[
    Detector {
        command: "rbenv",
        args: &["version-name"],
        parse: language::first_line,
    },
    Detector {
        command: "rvm-prompt",
        args: &["i", "v", "g"],
        parse: language::first_line,
    },
    Detector {
        command: "chruby",
        args: &[],
        parse: language::marked_line,
    },
    Detector {
        command: "asdf",
        args: &["current", "ruby"],
        parse: language::version_column,
    },
    Detector {
        command: "ruby",
        args: &["--version"],
        parse: language::banner_version,
    },
];

pub fn segment<'a>(env: &'a dyn Environment, fetch_version: bool) -> LanguageSegment<'a> {
    LanguageSegment::new(env, SegmentId::Ruby, FILE_PATTERNS, DETECTORS, fetch_version)
}
