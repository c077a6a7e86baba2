use super::language::{self, Detector, LanguageSegment};
use crate::config::SegmentId;
use crate::env::Environment;

const FILE_PATTERNS: &[&str] = &["*.java", "pom.xml", "build.gradle"];

const DETECTORS: &[Detector] = &[Detector {
    command: "java",
    args: &["--version"],
    parse: language::banner_version,
}];

pub fn segment<'a>(env: &'a dyn Environment, fetch_version: bool) -> LanguageSegment<'a> {
    LanguageSegment::new(env, SegmentId::Java, FILE_PATTERNS, DETECTORS, fetch_version)
}
