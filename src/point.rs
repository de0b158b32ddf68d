use crate::align::FramePoint;
use crate::id::FrameRef;
use crate::math::Number;
use crate::writer::Sink;

/// Aligns `my_point` of the owning frame to `parent_point` of `parent`,
/// shifted by `(x, y)`.
///
/// Owned by the frame that lists it; it does not know its owner. Nothing checks
/// that the parent exists or that the two points make sense together.
#[derive(Debug, Clone)]
pub struct SetPoint {
    my_point: FramePoint,
    parent: FrameRef,
    parent_point: FramePoint,
    x: f64,
    y: f64,
}

impl SetPoint {
    pub fn new(
        my_point: FramePoint,
        parent: impl Into<FrameRef>,
        parent_point: FramePoint,
        x: f64,
        y: f64,
    ) -> Self {
        Self {
            my_point,
            parent: parent.into(),
            parent_point,
            x,
            y,
        }
    }

    pub fn my_point(&self) -> FramePoint {
        self.my_point
    }

    pub fn parent(&self) -> &FrameRef {
        &self.parent
    }

    pub fn parent_point(&self) -> FramePoint {
        self.parent_point
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// `SetPoint <my>, "<parent>", <theirs>, <x>, <y>, ` on one line.
    pub fn compile_to_text(&self, sink: &mut dyn Sink) {
        sink.write_indentation();
        sink.write(&format!("SetPoint {}, ", self.my_point));
        sink.write(&format!("\"{}\", ", self.parent));
        sink.write_line(&format!(
            "{}, {}, {}, ",
            self.parent_point,
            Number(self.x),
            Number(self.y)
        ));
    }
}
