//! A single import for building and writing frame trees.
//!
//! ```rust
//! use fdf_frames::prelude::*;
//! ```

// Frames
pub use crate::document::Document;
pub use crate::elements::{ControlFrame, FrameType, GenericFrame, Layer, LayerType, StringFrame};
pub use crate::frame::Frame;
pub use crate::properties::CommonProperties;
pub use crate::control::{ControlProperties, ControlStyle};

// References and anchors
pub use crate::id::{FrameHandle, FrameName, FrameRef};
pub use crate::point::SetPoint;

// Values
pub use crate::align::{FontJustify, FramePoint};
pub use crate::color::Color;
pub use crate::math::{Vector2, Vector4};
pub use crate::text::{Font, FrameFont};

// Output
pub use crate::writer::{LineEnding, Sink, TextSink, WriterConfig};
