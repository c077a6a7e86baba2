use super::language::{self, Detector, LanguageSegment};
use crate::config::SegmentId;
use crate::env::Environment;

const FILE_PATTERNS: &[&str] = &["*.rs", "Cargo.toml"];

const DETECTORS: &[Detector] = &[Detector {
    command: "rustc",
    args: &["--version"],
    parse: language::banner_version,
}];

pub fn segment<'a>(env: &'a dyn Environment, fetch_version: bool) -> LanguageSegment<'a> {
    LanguageSegment::new(env, SegmentId::Rust, FILE_PATTERNS, DETECTORS, fetch_version)
}
