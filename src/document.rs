use std::io;

use crate::errors::Result;
use crate::frame::Frame;
use crate::writer::{Sink, TextSink, WriterConfig};

/// The top-level frames of one FDF file, emitted in insertion order.
#[derive(Debug, Default)]
pub struct Document {
    frames: Vec<Box<dyn Frame>>,
    config: WriterConfig,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            frames: Vec::new(),
            config,
        }
    }

    pub fn push(&mut self, frame: impl Frame + 'static) -> &mut Self {
        self.frames.push(Box::new(frame));
        self
    }

    pub fn frames(&self) -> &[Box<dyn Frame>] {
        &self.frames
    }

    pub fn frames_mut(&mut self) -> &mut Vec<Box<dyn Frame>> {
        &mut self.frames
    }

    pub fn compile_to_text(&self, sink: &mut dyn Sink) {
        for frame in &self.frames {
            frame.compile_to_text(sink);
        }
    }

    pub fn to_fdf(&self) -> String {
        let mut sink = TextSink::with_config(self.config.clone());
        self.compile_to_text(&mut sink);
        sink.into_string()
    }

    /// Compiles the document and writes it to `writer` in one go.
    pub fn write_to(&self, mut writer: impl io::Write) -> Result<()> {
        let text = self.to_fdf();
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        log::debug!("wrote {} frames ({} bytes)", self.frames.len(), text.len());
        Ok(())
    }
}
