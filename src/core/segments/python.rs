use super::language::{self, Detector, LanguageSegment};
use crate::config::SegmentId;
use crate::env::Environment;

const FILE_PATTERNS: &[&str] = &["*.py", "requirements.txt", "Pipfile", "pyproject.toml"];

// pyenv knows the selected version; the interpreters only know their own.
const DETECTORS: &[Detector] = &[
    Detector {
        command: "pyenv",
        args: &["version-name"],
        parse: language::first_line,
    },
    Detector {
        command: "python",
        args: &["--version"],
        parse: language::banner_version,
    },
    Detector {
        command: "python3",
        args: &["--version"],
        parse: language::banner_version,
    },
];

pub fn segment<'a>(env: &'a dyn Environment, fetch_version: bool) -> LanguageSegment<'a> {
    LanguageSegment::new(env, SegmentId::Python, FILE_PATTERNS, DETECTORS, fetch_version)
}
