use log::debug;
use regex::Regex;

use super::Segment;
use crate::config::SegmentId;
use crate::env::Environment;

/// One candidate data source in a domain's priority chain: the backing
/// command, its arguments and a parser for its output format.
pub struct Detector {
    pub command: &'static str,
    pub args: &'static [&'static str],
    pub parse: fn(&str) -> Option<String>,
}

/// Shared detection-chain evaluator behind every language segment.
///
/// Per-language modules contribute only data: marker-file globs and an
/// ordered detector list, more specific sources first. The segment is
/// enabled when any backing command is present or the working directory
/// contains marker files; running a tool to extract a version is a separate
/// step gated by `fetch_version`.
pub struct LanguageSegment<'a> {
    env: &'a dyn Environment,
    id: SegmentId,
    file_patterns: &'static [&'static str],
    detectors: &'static [Detector],
    fetch_version: bool,
    enabled: Option<bool>,
}

impl<'a> LanguageSegment<'a> {
    pub fn new(
        env: &'a dyn Environment,
        id: SegmentId,
        file_patterns: &'static [&'static str],
        detectors: &'static [Detector],
        fetch_version: bool,
    ) -> Self {
        Self {
            env,
            id,
            file_patterns,
            detectors,
            fetch_version,
            enabled: None,
        }
    }

    fn has_marker_files(&self) -> bool {
        self.file_patterns.iter().any(|p| self.env.has_files(p))
    }

    fn first_applicable(&self) -> Option<&'static Detector> {
        self.detectors.iter().find(|d| self.env.has_command(d.command))
    }
}

impl Segment for LanguageSegment<'_> {
    fn enabled(&mut self) -> bool {
        if let Some(enabled) = self.enabled {
            return enabled;
        }
        let enabled = self.first_applicable().is_some() || self.has_marker_files();
        self.enabled = Some(enabled);
        enabled
    }

    fn string(&mut self) -> String {
        if !self.enabled() || !self.fetch_version {
            return String::new();
        }
        // Only the first applicable detector runs. A failing command or
        // unparsable output yields an empty value without disabling the
        // segment.
        let Some(detector) = self.first_applicable() else {
            return String::new();
        };
        match self.env.run_command(detector.command, detector.args) {
            Ok(output) => (detector.parse)(&output).unwrap_or_default(),
            Err(e) => {
                debug!("{} failed: {}", detector.command, e);
                String::new()
            }
        }
    }

    fn id(&self) -> SegmentId {
        self.id
    }
}

/// First line of the output, trimmed. Version managers like rbenv and
/// rvm-prompt print the selection bare.
pub fn first_line(output: &str) -> Option<String> {
    let line = output.lines().next()?.trim();
    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}

/// Multi-line listing where the active entry carries a `* ` marker. No
/// marked line means no selection.
pub fn marked_line(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("* "))
        .map(|rest| rest.trim().to_string())
}

const UNSET_SENTINEL: &str = "No version set";

/// Column-aligned `asdf current <tool>` output: tool name, version, source.
/// The sentinel phrase in the value column means nothing is selected.
pub fn version_column(output: &str) -> Option<String> {
    if output.contains(UNSET_SENTINEL) {
        return None;
    }
    let mut fields = output.split_whitespace();
    fields.next()?;
    fields.next().map(|v| v.to_string())
}

/// First semantic-version shaped token in a free-text banner, e.g.
/// `ruby 2.6.3 (2019-04-16 revision 67580)` or
/// `go version go1.16.3 linux/amd64`.
pub fn banner_version(output: &str) -> Option<String> {
    let re = Regex::new(r"\d+\.\d+(?:\.\d+)?(?:[\-a-zA-Z0-9]+)?").ok()?;
    re.find(output).map(|m| m.as_str().to_string())
}
