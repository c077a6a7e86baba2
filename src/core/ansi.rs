/// Reset all attributes.
pub const RESET: &str = "\x1b[0m";

const OSC_TITLE: &str = "\x1b]0;";
const BEL: &str = "\x07";
const ST: &str = "\x1b\\";

/// Shells whose title sequence must end in ST instead of BEL. Everything
/// not listed uses BEL. Extending support is a table edit.
const TITLE_TERMINATORS: &[(&str, &str)] = &[("screen", ST), ("tmux", ST)];

const COLORS: &[(&str, &str)] = &[
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("gray", "\x1b[90m"),
];

/// Escape-sequence helpers bound to one host shell.
pub struct AnsiFormatter {
    terminator: &'static str,
}

impl AnsiFormatter {
    pub fn new(shell: &str) -> Self {
        let terminator = TITLE_TERMINATORS
            .iter()
            .find(|(name, _)| *name == shell)
            .map(|(_, term)| *term)
            .unwrap_or(BEL);
        Self { terminator }
    }

    /// Wrap text in the OSC 0 window-title sequence. The text is written
    /// as-is; keeping control bytes out of it is the renderer's job.
    pub fn title(&self, text: &str) -> String {
        format!("{}{}{}", OSC_TITLE, text, self.terminator)
    }
}

/// ANSI code for a configured color name.
pub fn color_code(name: &str) -> Option<&'static str> {
    COLORS
        .iter()
        .find(|(color, _)| *color == name)
        .map(|(_, code)| *code)
}
