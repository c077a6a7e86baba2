use super::language::{self, Detector, LanguageSegment};
use crate::config::SegmentId;
use crate::env::Environment;

const FILE_PATTERNS: &[&str] = &["*.js", "*.ts", "package.json", ".nvmrc"];

const DETECTORS: &[Detector] = &[
    Detector {
        command: "node",
        args: &["--version"],
        parse: parse_node_version,
    },
    Detector {
        command: "asdf",
        args: &["current", "nodejs"],
        parse: language::version_column,
    },
];

// `node --version` prints `v14.17.0`; the prefix is noise.
fn parse_node_version(output: &str) -> Option<String> {
    let line = language::first_line(output)?;
    Some(line.strip_prefix('v').unwrap_or(&line).to_string())
}

pub fn segment<'a>(env: &'a dyn Environment, fetch_version: bool) -> LanguageSegment<'a> {
    LanguageSegment::new(env, SegmentId::Node, FILE_PATTERNS, DETECTORS, fetch_version)
}
