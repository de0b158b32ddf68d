//! Typed frame model that compiles into frame-definition (FDF) text for a game
//! client's interface loader.
//!
//! Build frames ([`Layer`], [`StringFrame`], [`GenericFrame`], [`ControlFrame`]),
//! nest them, anchor them with [`SetPoint`](point::SetPoint), then compile the
//! tree into any [`Sink`](writer::Sink):
//!
//! ```
//! use fdf_frames::prelude::*;
//!
//! let title = StringFrame::new("Title").configure(|c| {
//!     c.font_color(Color::WHITE);
//! });
//! let layer = Layer::new(LayerType::Artwork).configure(|c| {
//!     c.size(100.0, 50.0).set_all_points().child(title);
//! });
//!
//! assert_eq!(
//!     layer.to_fdf(),
//!     "Layer \"ARTWORK\" \"\" {\n    SetAllPoints,\n    Width 100,\n    Height 50,\n    String \"Title\" {\n        FontColor 1 1 1 1,\n    }\n}\n"
//! );
//! ```
//!
//! Emission never fails and never validates: references to frames that are
//! missing from the tree, or inheritance cycles, are written as given.

pub mod align;
pub mod color;
pub mod control;
pub mod document;
pub mod elements;
pub mod emit;
pub mod errors;
pub mod frame;
pub mod id;
pub mod math;
pub mod point;
pub mod prelude;
pub mod properties;
pub mod text;
pub mod writer;

pub use color::Color;
pub use document::Document;
pub use elements::{ControlFrame, FrameType, GenericFrame, Layer, LayerType, StringFrame};
pub use errors::{Error, Result};
pub use frame::Frame;
