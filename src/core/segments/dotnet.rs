use super::language::{self, Detector, LanguageSegment};
use crate::config::SegmentId;
use crate::env::Environment;

const FILE_PATTERNS: &[&str] = &["*.cs", "*.csproj", "*.sln"];

// `dotnet --version` prints the bare SDK version.
const DETECTORS: &[Detector] = &[Detector {
    command: "dotnet",
    args: &["--version"],
    parse: language::first_line,
}];

pub fn segment<'a>(env: &'a dyn Environment, fetch_version: bool) -> LanguageSegment<'a> {
    LanguageSegment::new(env, SegmentId::Dotnet, FILE_PATTERNS, DETECTORS, fetch_version)
}
