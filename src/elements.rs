use core::fmt;
use core::str::FromStr;

use crate::control::ControlProperties;
use crate::errors::Error;
use crate::frame::{write_block, Frame};
use crate::id::FrameName;
use crate::properties::CommonProperties;
use crate::text::Font;
use crate::writer::Sink;

/// Draw layer of a `Layer` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum LayerType {
    Background,
    #[default]
    Artwork,
}

impl LayerType {
    pub const fn as_str(self) -> &'static str {
        match self {
            LayerType::Background => "BACKGROUND",
            LayerType::Artwork => "ARTWORK",
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayerType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [LayerType::Background, LayerType::Artwork]
            .into_iter()
            .find(|layer| layer.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownLayer(s.to_string()))
    }
}

/// Type tag of a `Frame "<TYPE>" "<name>"` block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrameType {
    Frame,
    Backdrop,
    Highlight,
    Text,
    Button,
    TextButton,
    GlueButton,
    GlueTextButton,
    CheckBox,
    GlueCheckBox,
    EditBox,
    GlueEditBox,
    Slider,
    Custom(String),
}

impl FrameType {
    pub fn as_str(&self) -> &str {
        match self {
            FrameType::Frame => "FRAME",
            FrameType::Backdrop => "BACKDROP",
            FrameType::Highlight => "HIGHLIGHT",
            FrameType::Text => "TEXT",
            FrameType::Button => "BUTTON",
            FrameType::TextButton => "TEXTBUTTON",
            FrameType::GlueButton => "GLUEBUTTON",
            FrameType::GlueTextButton => "GLUETEXTBUTTON",
            FrameType::CheckBox => "CHECKBOX",
            FrameType::GlueCheckBox => "GLUECHECKBOX",
            FrameType::EditBox => "EDITBOX",
            FrameType::GlueEditBox => "GLUEEDITBOX",
            FrameType::Slider => "SLIDER",
            FrameType::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A texture/drawing layer: `Layer "<TYPE>" "<name>" { ... }`.
///
/// Layers are normally anonymous; the empty name slot is still written.
#[derive(Debug, Default)]
pub struct Layer {
    pub layer_type: LayerType,
    pub common: CommonProperties,
}

impl Layer {
    pub fn new(layer_type: LayerType) -> Self {
        Self {
            layer_type,
            common: CommonProperties::default(),
        }
    }

    pub fn with_properties(layer_type: LayerType, common: CommonProperties) -> Self {
        Self { layer_type, common }
    }
}

impl Frame for Layer {
    fn common(&self) -> &CommonProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn compile_to_text(&self, sink: &mut dyn Sink) {
        write_block(&self.common, sink, "Layer", Some(self.layer_type.as_str()), |_| {});
    }
}

/// A text element: `String "<name>" { ... }`.
#[derive(Debug, Default)]
pub struct StringFrame {
    pub common: CommonProperties,
    pub font: Option<Font>,
}

impl StringFrame {
    pub fn new(name: impl Into<FrameName>) -> Self {
        Self {
            common: CommonProperties::new(name),
            font: None,
        }
    }

    pub fn with_properties(common: CommonProperties, font: Option<Font>) -> Self {
        Self { common, font }
    }

    #[inline]
    pub fn font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

impl Frame for StringFrame {
    fn common(&self) -> &CommonProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn compile_to_text(&self, sink: &mut dyn Sink) {
        write_block(&self.common, sink, "String", None, |sink| {
            if let Some(font) = &self.font {
                font.compile_to_text(sink);
            }
        });
    }
}

/// A non-interactive frame: `Frame "<TYPE>" "<name>" { ... }`.
#[derive(Debug)]
pub struct GenericFrame {
    pub frame_type: FrameType,
    pub common: CommonProperties,
}

impl GenericFrame {
    pub fn new(frame_type: FrameType, name: impl Into<FrameName>) -> Self {
        Self {
            frame_type,
            common: CommonProperties::new(name),
        }
    }

    pub fn with_properties(frame_type: FrameType, common: CommonProperties) -> Self {
        Self { frame_type, common }
    }
}

impl Frame for GenericFrame {
    fn common(&self) -> &CommonProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn compile_to_text(&self, sink: &mut dyn Sink) {
        write_block(&self.common, sink, "Frame", Some(self.frame_type.as_str()), |_| {});
    }
}

/// An interactive frame (buttons, check boxes, edit boxes, ...).
///
/// Control lines follow the common body and precede the children.
#[derive(Debug)]
pub struct ControlFrame {
    pub frame_type: FrameType,
    pub common: CommonProperties,
    pub control: ControlProperties,
}

impl ControlFrame {
    pub fn new(frame_type: FrameType, name: impl Into<FrameName>) -> Self {
        Self {
            frame_type,
            common: CommonProperties::new(name),
            control: ControlProperties::default(),
        }
    }

    /// Both configurations are kept; neither overrides the other.
    pub fn with_properties(
        frame_type: FrameType,
        common: CommonProperties,
        control: ControlProperties,
    ) -> Self {
        Self {
            frame_type,
            common,
            control,
        }
    }

    /// Runs `f` on the control properties and hands the frame back.
    pub fn control(mut self, f: impl FnOnce(&mut ControlProperties)) -> Self {
        f(&mut self.control);
        self
    }
}

impl Frame for ControlFrame {
    fn common(&self) -> &CommonProperties {
        &self.common
    }

    fn common_mut(&mut self) -> &mut CommonProperties {
        &mut self.common
    }

    fn compile_to_text(&self, sink: &mut dyn Sink) {
        write_block(&self.common, sink, "Frame", Some(self.frame_type.as_str()), |sink| {
            self.control.write_control(sink);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::{FontJustify, FramePoint};
    use crate::color::Color;
    use crate::control::ControlStyle;
    use crate::writer::{TextSink, WriterConfig};

    #[test]
    fn bare_frames_are_header_and_brace() {
        assert_eq!(Layer::new(LayerType::Artwork).to_fdf(), "Layer \"ARTWORK\" \"\" {\n}\n");
        assert_eq!(StringFrame::new("Label").to_fdf(), "String \"Label\" {\n}\n");
        assert_eq!(
            GenericFrame::new(FrameType::Backdrop, "Bg").to_fdf(),
            "Frame \"BACKDROP\" \"Bg\" {\n}\n"
        );
        assert_eq!(
            ControlFrame::new(FrameType::GlueTextButton, "Ok").to_fdf(),
            "Frame \"GLUETEXTBUTTON\" \"Ok\" {\n}\n"
        );
    }

    #[test]
    fn layer_with_nested_string() {
        let title = StringFrame::new("Title").configure(|c| {
            c.font_color(Color::rgb(1.0, 0.8, 0.0));
        });
        let layer = Layer::new(LayerType::Artwork).configure(|c| {
            c.size(100.0, 50.0).set_all_points().child(title);
        });

        assert_eq!(
            layer.to_fdf(),
            concat!(
                "Layer \"ARTWORK\" \"\" {\n",
                "    SetAllPoints,\n",
                "    Width 100,\n",
                "    Height 50,\n",
                "    String \"Title\" {\n",
                "        FontColor 1 0.8 0 1,\n",
                "    }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn string_font_comes_after_common_body() {
        let text = StringFrame::new("Info")
            .configure(|c| {
                c.justify(FontJustify::JustifyLeft, FontJustify::JustifyTop);
            })
            .font(Font::new("MasterFont", 0.011));

        assert_eq!(
            text.to_fdf(),
            concat!(
                "String \"Info\" {\n",
                "    FontJustificationH JUSTIFYLEFT,\n",
                "    FontJustificationV JUSTIFYTOP,\n",
                "    Font \"MasterFont\", 0.011,\n",
                "}\n",
            )
        );
    }

    #[test]
    fn inherits_with_children_from_frame_object() {
        let template = ControlFrame::new(FrameType::GlueTextButton, "EscMenuButtonTemplate");
        let button = ControlFrame::new(FrameType::GlueTextButton, "QuitButton").configure(|c| {
            c.inherits_with_children(&template);
        });

        let first_line = button.to_fdf().lines().next().unwrap().to_string();
        assert_eq!(
            first_line,
            "Frame \"GLUETEXTBUTTON\" \"QuitButton\" INHERITS WITHCHILDREN \"EscMenuButtonTemplate\" {"
        );
    }

    #[test]
    fn control_lines_sit_between_body_and_children() {
        let highlight = GenericFrame::new(FrameType::Highlight, "QuitHighlight");
        let backdrop = GenericFrame::new(FrameType::Backdrop, "QuitBackdrop");
        let button = ControlFrame::new(FrameType::GlueTextButton, "QuitButton")
            .configure(|c| {
                c.width(0.2).anchor(FramePoint::Center, "ConsoleUI", FramePoint::Center, 0.0, 0.0);
            })
            .control(|k| {
                k.style(ControlStyle::AutoTrack)
                    .style(ControlStyle::HighlightOnMouseOver)
                    .backdrop(&backdrop)
                    .mouse_over_highlight(&highlight);
            })
            .configure(|c| {
                c.child(backdrop).child(highlight);
            });

        assert_eq!(
            button.to_fdf(),
            concat!(
                "Frame \"GLUETEXTBUTTON\" \"QuitButton\" {\n",
                "    Width 0.2,\n",
                "    SetPoint CENTER, \"ConsoleUI\", CENTER, 0, 0, \n",
                "    ControlStyle \"AUTOTRACK|HIGHLIGHTONMOUSEOVER\",\n",
                "    ControlBackdrop \"QuitBackdrop\",\n",
                "    ControlMouseOverHighlight \"QuitHighlight\",\n",
                "    Frame \"BACKDROP\" \"QuitBackdrop\" {\n",
                "    }\n",
                "    Frame \"HIGHLIGHT\" \"QuitHighlight\" {\n",
                "    }\n",
                "}\n",
            )
        );
    }

    #[test]
    fn references_see_renames_made_after_linking() {
        let backdrop = GenericFrame::new(FrameType::Backdrop, "Draft");
        let button = ControlFrame::new(FrameType::Button, "B").control(|k| {
            k.backdrop(&backdrop);
        });
        backdrop.common.name.set("FinalBackdrop");
        assert!(button.to_fdf().contains("ControlBackdrop \"FinalBackdrop\","));
    }

    #[test]
    fn depth_is_restored_after_nested_emission() {
        let mut root = GenericFrame::new(FrameType::Frame, "Root");
        let mut current = GenericFrame::new(FrameType::Frame, "Level3");
        for level in (0..3).rev() {
            let mut parent = GenericFrame::new(FrameType::Frame, format!("Level{level}"));
            parent.common.child(current);
            current = parent;
        }
        root.common.child(current).child(Layer::new(LayerType::Background));

        let mut sink = TextSink::new();
        sink.push_indent();
        root.compile_to_text(&mut sink);
        assert_eq!(sink.depth(), 1);

        let text = sink.into_string();
        assert!(text.contains("\n                    Frame \"FRAME\" \"Level3\" {\n"));
        assert!(text.ends_with("\n    }\n"));
        assert_eq!(text.matches('{').count(), text.matches('}').count());
    }

    #[test]
    fn tab_config_changes_indentation_only() {
        let layer = Layer::new(LayerType::Artwork).configure(|c| {
            c.set_all_points();
        });
        let mut config = WriterConfig::default();
        config.tabs();
        assert_eq!(layer.to_fdf_with(config), "Layer \"ARTWORK\" \"\" {\n\tSetAllPoints,\n}\n");
    }

    #[test]
    fn layer_type_parses() {
        assert_eq!("background".parse::<LayerType>().unwrap(), LayerType::Background);
        assert!(matches!("OVERLAY".parse::<LayerType>(), Err(Error::UnknownLayer(_))));
    }
}
