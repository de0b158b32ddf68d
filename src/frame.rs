use core::cell::Ref;
use core::fmt;

use crate::id::FrameHandle;
use crate::properties::CommonProperties;
use crate::writer::{Sink, TextSink, WriterConfig};

/// A node of the frame tree that can compile itself into FDF text.
///
/// Implementors hold a [`CommonProperties`] and usually delegate
/// [`compile_to_text`](Frame::compile_to_text) to [`write_block`].
pub trait Frame: fmt::Debug {
    fn common(&self) -> &CommonProperties;

    fn common_mut(&mut self) -> &mut CommonProperties;

    /// Writes the whole block: header, body, children and closing brace.
    /// Leaves the sink's depth where it found it.
    fn compile_to_text(&self, sink: &mut dyn Sink);

    fn name(&self) -> Ref<'_, str> {
        self.common().name.as_str()
    }

    /// Non-owning reference for inheritance, anchors and backdrops.
    fn handle(&self) -> FrameHandle {
        self.common().name.handle()
    }

    fn to_fdf(&self) -> String {
        let mut sink = TextSink::new();
        self.compile_to_text(&mut sink);
        sink.into_string()
    }

    fn to_fdf_with(&self, config: WriterConfig) -> String {
        let mut sink = TextSink::with_config(config);
        self.compile_to_text(&mut sink);
        sink.into_string()
    }

    /// Runs `f` on the common properties and hands the frame back.
    /// ```
    /// use fdf_frames::prelude::*;
    ///
    /// let layer = Layer::new(LayerType::Artwork).configure(|c| {
    ///     c.size(100.0, 50.0).set_all_points();
    /// });
    /// assert_eq!(layer.common().width, Some(100.0));
    /// ```
    fn configure(mut self, f: impl FnOnce(&mut CommonProperties)) -> Self
    where
        Self: Sized,
    {
        f(self.common_mut());
        self
    }
}

/// The emission sequence shared by all variants:
/// header, indent, common body, `extra`, children, dedent, `}`.
pub fn write_block(
    common: &CommonProperties,
    sink: &mut dyn Sink,
    keyword: &str,
    type_tag: Option<&str>,
    extra: impl FnOnce(&mut dyn Sink),
) {
    log::trace!(
        "emitting {keyword} block \"{}\" at depth {}",
        &*common.name.as_str(),
        sink.depth()
    );
    common.write_header(sink, keyword, type_tag);
    sink.push_indent();
    common.write_common(sink);
    extra(&mut *sink);
    common.write_children(sink);
    sink.pop_indent();
    sink.write_indentation();
    sink.write_line("}");
}
