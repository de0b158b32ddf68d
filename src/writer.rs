//! Text sinks that frames are compiled into.

/// Destination for emitted frame text.
///
/// The sink owns the current indentation depth. Frames call
/// [`write_indentation`](Sink::write_indentation) before each line and bracket
/// their bodies with [`push_indent`](Sink::push_indent) /
/// [`pop_indent`](Sink::pop_indent). Calls must nest.
pub trait Sink {
    /// Appends `text` as-is.
    fn write(&mut self, text: &str);

    /// Appends `text` followed by a line ending.
    fn write_line(&mut self, text: &str);

    /// Appends the whitespace for the current depth.
    fn write_indentation(&mut self);

    fn push_indent(&mut self);

    fn pop_indent(&mut self);

    /// Current indentation depth in levels.
    fn depth(&self) -> usize;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub const fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Formatting settings for [`TextSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WriterConfig {
    /// Whitespace written once per indentation level.
    pub indent: String,
    pub line_ending: LineEnding,
}

impl WriterConfig {
    #[inline]
    pub fn indent(&mut self, indent: impl Into<String>) -> &mut Self {
        self.indent = indent.into();
        self
    }

    /// Indents with a single tab per level.
    #[inline]
    pub fn tabs(&mut self) -> &mut Self {
        self.indent = "\t".to_string();
        self
    }

    #[inline]
    pub fn line_ending(&mut self, line_ending: LineEnding) -> &mut Self {
        self.line_ending = line_ending;
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: "    ".to_string(),
            line_ending: LineEnding::Lf,
        }
    }
}

/// In-memory [`Sink`] accumulating a `String`.
#[derive(Debug, Clone, Default)]
pub struct TextSink {
    buffer: String,
    depth: usize,
    config: WriterConfig,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            buffer: String::new(),
            depth: 0,
            config,
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Sink for TextSink {
    fn write(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn write_line(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push_str(self.config.line_ending.as_str());
    }

    fn write_indentation(&mut self) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.config.indent);
        }
    }

    fn push_indent(&mut self) {
        self.depth += 1;
    }

    fn pop_indent(&mut self) {
        match self.depth.checked_sub(1) {
            Some(depth) => self.depth = depth,
            None => log::warn!("pop_indent without a matching push_indent; depth stays at 0"),
        }
    }

    fn depth(&self) -> usize {
        self.depth
    }
}
