//! Interactive-control properties: style flags, backdrops and the mouse-over
//! highlight.

use core::fmt;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::emit::{write_reference, write_set};
use crate::id::FrameRef;
use crate::writer::Sink;

/// A `ControlStyle` flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ControlStyle {
    AutoTrack,
    HighlightOnFocus,
    HighlightOnMouseOver,
    AutoCast,
    /// Any token not listed above, written verbatim.
    Custom(String),
}

impl ControlStyle {
    pub fn as_str(&self) -> &str {
        match self {
            ControlStyle::AutoTrack => "AUTOTRACK",
            ControlStyle::HighlightOnFocus => "HIGHLIGHTONFOCUS",
            ControlStyle::HighlightOnMouseOver => "HIGHLIGHTONMOUSEOVER",
            ControlStyle::AutoCast => "AUTOCAST",
            ControlStyle::Custom(token) => token,
        }
    }
}

impl fmt::Display for ControlStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style flags in insertion order.
pub type ControlStyleSet = IndexSet<ControlStyle, FxBuildHasher>;

/// Control configuration, assembled next to [`CommonProperties`] by control
/// variants.
///
/// [`CommonProperties`]: crate::properties::CommonProperties
#[derive(Debug, Clone, Default)]
pub struct ControlProperties {
    pub control_style: ControlStyleSet,

    pub backdrop: Option<FrameRef>,
    pub pushed_backdrop: Option<FrameRef>,
    pub disabled_backdrop: Option<FrameRef>,
    pub disabled_pushed_backdrop: Option<FrameRef>,

    pub mouse_over_highlight: Option<FrameRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlField {
    Style,
    Backdrop,
    PushedBackdrop,
    DisabledBackdrop,
    DisabledPushedBackdrop,
    MouseOverHighlight,
}

pub const CONTROL_FIELD_ORDER: [ControlField; 6] = [
    ControlField::Style,
    ControlField::Backdrop,
    ControlField::PushedBackdrop,
    ControlField::DisabledBackdrop,
    ControlField::DisabledPushedBackdrop,
    ControlField::MouseOverHighlight,
];

impl ControlField {
    pub const fn header(self) -> &'static str {
        match self {
            ControlField::Style => "ControlStyle",
            ControlField::Backdrop => "ControlBackdrop",
            ControlField::PushedBackdrop => "ControlPushedBackdrop",
            ControlField::DisabledBackdrop => "ControlDisabledBackdrop",
            ControlField::DisabledPushedBackdrop => "ControlDisabledPushedBackdrop",
            ControlField::MouseOverHighlight => "ControlMouseOverHighlight",
        }
    }

    fn reference(self, props: &ControlProperties) -> Option<&FrameRef> {
        match self {
            ControlField::Style => None,
            ControlField::Backdrop => props.backdrop.as_ref(),
            ControlField::PushedBackdrop => props.pushed_backdrop.as_ref(),
            ControlField::DisabledBackdrop => props.disabled_backdrop.as_ref(),
            ControlField::DisabledPushedBackdrop => props.disabled_pushed_backdrop.as_ref(),
            ControlField::MouseOverHighlight => props.mouse_over_highlight.as_ref(),
        }
    }

    pub fn is_set(self, props: &ControlProperties) -> bool {
        match self {
            ControlField::Style => !props.control_style.is_empty(),
            _ => self.reference(props).is_some(),
        }
    }

    pub fn write(self, props: &ControlProperties, sink: &mut dyn Sink) {
        match self {
            ControlField::Style => write_set(sink, self.header(), &props.control_style),
            _ => write_reference(sink, self.header(), self.reference(props)),
        }
    }
}

impl ControlProperties {
    /// Writes the style set and the five references in [`CONTROL_FIELD_ORDER`].
    pub fn write_control(&self, sink: &mut dyn Sink) {
        for field in CONTROL_FIELD_ORDER {
            if field.is_set(self) {
                field.write(self, sink);
            }
        }
    }

    /// Adds a style flag. Re-adding an existing flag keeps its first position.
    #[inline]
    pub fn style(&mut self, style: ControlStyle) -> &mut Self {
        self.control_style.insert(style);
        self
    }

    /// Sets the backdrop shown in the normal state.
    #[inline]
    pub fn backdrop(&mut self, target: impl Into<FrameRef>) -> &mut Self {
        self.backdrop = Some(target.into());
        self
    }

    /// Sets the backdrop shown while pushed.
    #[inline]
    pub fn pushed_backdrop(&mut self, target: impl Into<FrameRef>) -> &mut Self {
        self.pushed_backdrop = Some(target.into());
        self
    }

    /// Sets the backdrop shown while disabled.
    #[inline]
    pub fn disabled_backdrop(&mut self, target: impl Into<FrameRef>) -> &mut Self {
        self.disabled_backdrop = Some(target.into());
        self
    }

    /// Sets the backdrop shown while disabled and pushed.
    #[inline]
    pub fn disabled_pushed_backdrop(&mut self, target: impl Into<FrameRef>) -> &mut Self {
        self.disabled_pushed_backdrop = Some(target.into());
        self
    }

    /// Sets the highlight shown under the cursor.
    #[inline]
    pub fn mouse_over_highlight(&mut self, target: impl Into<FrameRef>) -> &mut Self {
        self.mouse_over_highlight = Some(target.into());
        self
    }
}
