use crate::math::Number;
use crate::writer::Sink;

/// Font used by a frame's font block.
///
/// Emitted as `FrameFont "<name>", <size>, "<flags>",`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameFont {
    /// Font file or font alias, e.g. `"MasterFont"`.
    pub name: String,
    /// Height in screen-relative units.
    pub size: f64,
    pub flags: String,
}

impl FrameFont {
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
            flags: String::new(),
        }
    }

    /// Sets the font flags, e.g. `"FIXEDSIZE"`.
    #[inline]
    pub fn flags(mut self, flags: impl Into<String>) -> Self {
        self.flags = flags.into();
        self
    }

    pub fn compile_to_text(&self, sink: &mut dyn Sink) {
        sink.write_indentation();
        sink.write_line(&format!(
            "FrameFont \"{}\", {}, \"{}\",",
            self.name,
            Number(self.size),
            self.flags
        ));
    }
}

/// Font of a `String` frame. Emitted as `Font "<name>", <size>,`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Font {
    pub name: String,
    pub size: f64,
}

impl Font {
    pub fn new(name: impl Into<String>, size: f64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    pub fn compile_to_text(&self, sink: &mut dyn Sink) {
        sink.write_indentation();
        sink.write_line(&format!("Font \"{}\", {},", self.name, Number(self.size)));
    }
}
