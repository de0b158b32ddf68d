//! Properties every frame variant carries, and the fixed order they are
//! written in.

use crate::align::{FontJustify, FramePoint};
use crate::color::Color;
use crate::emit::{write_display, write_generic, Scalar};
use crate::frame::Frame;
use crate::id::{FrameName, FrameRef};
use crate::math::Vector2;
use crate::point::SetPoint;
use crate::text::FrameFont;
use crate::writer::Sink;

/// Shared frame configuration: identity, geometry, inheritance, flags,
/// composition and the font block.
///
/// Every option is a public field so a whole frame can be described with a
/// struct literal; the setters below cover the same fields for chained use.
/// `None` means "not written". `Some(0.0)` and `Some(String::new())` are
/// written like any other value.
#[derive(Debug, Default)]
pub struct CommonProperties {
    pub name: FrameName,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Frame whose definition this one starts from.
    pub inherits_from: Option<FrameRef>,
    /// Also copy the inherited frame's children.
    pub inherits_with_children: bool,

    /// Stretch all four edges onto the parent frame.
    pub set_all_points: bool,
    /// File names inside this frame are looked up in the client's string tables.
    pub decorate_file_names: bool,

    /// Emitted in insertion order.
    pub children: Vec<Box<dyn Frame>>,
    pub points: Vec<SetPoint>,

    pub frame_font: Option<FrameFont>,
    pub font_justification_h: Option<FontJustify>,
    pub font_justification_v: Option<FontJustify>,
    pub font_justification_offset: Option<Vector2>,
    pub font_flags: Option<String>,
    pub font_color: Option<Color>,
    pub font_highlight_color: Option<Color>,
    pub font_disabled_color: Option<Color>,
    pub font_shadow_color: Option<Color>,
    pub font_shadow_offset: Option<Vector2>,
}

/// One writable line group of [`CommonProperties`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonField {
    DecorateFileNames,
    SetAllPoints,
    Width,
    Height,
    SetPoints,
    FontColor,
    FontHighlightColor,
    FontDisabledColor,
    FontShadowColor,
    FontShadowOffset,
    FrameFont,
    FontJustificationOffset,
    FontJustificationH,
    FontJustificationV,
    FontFlags,
}

/// Body order of a frame block. The client parses fields positionally in
/// places, so this order is part of the output format.
pub const COMMON_FIELD_ORDER: [CommonField; 15] = [
    CommonField::DecorateFileNames,
    CommonField::SetAllPoints,
    CommonField::Width,
    CommonField::Height,
    CommonField::SetPoints,
    CommonField::FontColor,
    CommonField::FontHighlightColor,
    CommonField::FontDisabledColor,
    CommonField::FontShadowColor,
    CommonField::FontShadowOffset,
    CommonField::FrameFont,
    CommonField::FontJustificationOffset,
    CommonField::FontJustificationH,
    CommonField::FontJustificationV,
    CommonField::FontFlags,
];

impl CommonField {
    /// Keyword the field's lines start with.
    pub const fn header(self) -> &'static str {
        match self {
            CommonField::DecorateFileNames => "DecorateFileNames",
            CommonField::SetAllPoints => "SetAllPoints",
            CommonField::Width => "Width",
            CommonField::Height => "Height",
            CommonField::SetPoints => "SetPoint",
            CommonField::FontColor => "FontColor",
            CommonField::FontHighlightColor => "FontHighlightColor",
            CommonField::FontDisabledColor => "FontDisabledColor",
            CommonField::FontShadowColor => "FontShadowColor",
            CommonField::FontShadowOffset => "FontShadowOffset",
            CommonField::FrameFont => "FrameFont",
            CommonField::FontJustificationOffset => "FontJustificationOffset",
            CommonField::FontJustificationH => "FontJustificationH",
            CommonField::FontJustificationV => "FontJustificationV",
            CommonField::FontFlags => "FontFlags",
        }
    }

    pub const fn is_font_field(self) -> bool {
        !matches!(
            self,
            CommonField::DecorateFileNames
                | CommonField::SetAllPoints
                | CommonField::Width
                | CommonField::Height
                | CommonField::SetPoints
        )
    }

    /// Whether the field produces any output for `props`.
    pub fn is_set(self, props: &CommonProperties) -> bool {
        match self {
            CommonField::DecorateFileNames => props.decorate_file_names,
            CommonField::SetAllPoints => props.set_all_points,
            CommonField::Width => props.width.is_some(),
            CommonField::Height => props.height.is_some(),
            CommonField::SetPoints => !props.points.is_empty(),
            CommonField::FontColor => props.font_color.is_some(),
            CommonField::FontHighlightColor => props.font_highlight_color.is_some(),
            CommonField::FontDisabledColor => props.font_disabled_color.is_some(),
            CommonField::FontShadowColor => props.font_shadow_color.is_some(),
            CommonField::FontShadowOffset => props.font_shadow_offset.is_some(),
            CommonField::FrameFont => props.frame_font.is_some(),
            CommonField::FontJustificationOffset => props.font_justification_offset.is_some(),
            CommonField::FontJustificationH => props.font_justification_h.is_some(),
            CommonField::FontJustificationV => props.font_justification_v.is_some(),
            CommonField::FontFlags => props.font_flags.is_some(),
        }
    }

    /// Writes the field's lines. Unset fields write nothing.
    pub fn write(self, props: &CommonProperties, sink: &mut dyn Sink) {
        let header = self.header();
        match self {
            CommonField::DecorateFileNames | CommonField::SetAllPoints => {
                if self.is_set(props) {
                    sink.write_indentation();
                    sink.write_line(&format!("{header},"));
                }
            }
            CommonField::Width => write_generic(sink, header, props.width.map(Scalar::Number), false),
            CommonField::Height => write_generic(sink, header, props.height.map(Scalar::Number), false),
            CommonField::SetPoints => {
                for point in &props.points {
                    point.compile_to_text(sink);
                }
            }
            CommonField::FontColor => write_display(sink, header, props.font_color.as_ref()),
            CommonField::FontHighlightColor => {
                write_display(sink, header, props.font_highlight_color.as_ref())
            }
            CommonField::FontDisabledColor => {
                write_display(sink, header, props.font_disabled_color.as_ref())
            }
            CommonField::FontShadowColor => write_display(sink, header, props.font_shadow_color.as_ref()),
            CommonField::FontShadowOffset => {
                write_display(sink, header, props.font_shadow_offset.as_ref())
            }
            CommonField::FrameFont => {
                if let Some(font) = &props.frame_font {
                    font.compile_to_text(sink);
                }
            }
            CommonField::FontJustificationOffset => {
                write_display(sink, header, props.font_justification_offset.as_ref())
            }
            CommonField::FontJustificationH => write_generic(
                sink,
                header,
                props.font_justification_h.map(|j| Scalar::Text(j.as_str())),
                true,
            ),
            CommonField::FontJustificationV => write_generic(
                sink,
                header,
                props.font_justification_v.map(|j| Scalar::Text(j.as_str())),
                true,
            ),
            CommonField::FontFlags => {
                write_generic(sink, header, props.font_flags.as_deref().map(Scalar::Text), false)
            }
        }
    }
}

impl CommonProperties {
    pub fn new(name: impl Into<FrameName>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// `<keyword>[ "<type_tag>"] "<name>"[ INHERITS[ WITHCHILDREN] "<target>"] {`
    pub fn write_header(&self, sink: &mut dyn Sink, keyword: &str, type_tag: Option<&str>) {
        sink.write_indentation();
        sink.write(keyword);
        if let Some(type_tag) = type_tag {
            sink.write(&format!(" \"{type_tag}\""));
        }
        sink.write(&format!(" \"{}\"", &*self.name.as_str()));
        self.write_inherits_from(sink);
        sink.write_line(" {");
    }

    fn write_inherits_from(&self, sink: &mut dyn Sink) {
        if let Some(target) = &self.inherits_from {
            sink.write(" INHERITS");
            if self.inherits_with_children {
                sink.write(" WITHCHILDREN");
            }
            sink.write(&format!(" \"{target}\""));
        }
    }

    /// Flags, geometry, anchor points and the font block, in
    /// [`COMMON_FIELD_ORDER`].
    pub fn write_common(&self, sink: &mut dyn Sink) {
        for field in COMMON_FIELD_ORDER {
            if field.is_set(self) {
                field.write(self, sink);
            }
        }
    }

    /// Only the font block part of [`COMMON_FIELD_ORDER`].
    pub fn write_font_block(&self, sink: &mut dyn Sink) {
        for field in COMMON_FIELD_ORDER.into_iter().filter(|f| f.is_font_field()) {
            if field.is_set(self) {
                field.write(self, sink);
            }
        }
    }

    /// Children compile at the current depth; each one indents its own body.
    pub fn write_children(&self, sink: &mut dyn Sink) {
        for child in &self.children {
            child.compile_to_text(sink);
        }
    }

    /// Sets the frame name.
    #[inline]
    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name.set(name);
        self
    }

    /// Sets the width.
    #[inline]
    pub fn width(&mut self, width: f64) -> &mut Self {
        self.width = Some(width);
        self
    }

    /// Sets the height.
    #[inline]
    pub fn height(&mut self, height: f64) -> &mut Self {
        self.height = Some(height);
        self
    }

    /// Sets the width and height together.
    #[inline]
    pub fn size(&mut self, width: f64, height: f64) -> &mut Self {
        self.width(width).height(height)
    }

    /// Sets the frame this one inherits from.
    #[inline]
    pub fn inherits(&mut self, target: impl Into<FrameRef>) -> &mut Self {
        self.inherits_from = Some(target.into());
        self
    }

    /// Sets the inherited frame, copying its children too.
    #[inline]
    pub fn inherits_with_children(&mut self, target: impl Into<FrameRef>) -> &mut Self {
        self.inherits_with_children = true;
        self.inherits(target)
    }

    /// Sets all four edges onto the parent.
    #[inline]
    pub fn set_all_points(&mut self) -> &mut Self {
        self.set_all_points = true;
        self
    }

    /// Sets file names to be looked up in the string tables.
    #[inline]
    pub fn decorate_file_names(&mut self) -> &mut Self {
        self.decorate_file_names = true;
        self
    }

    /// Adds a child frame after the existing ones.
    #[inline]
    pub fn child(&mut self, frame: impl Frame + 'static) -> &mut Self {
        self.children.push(Box::new(frame));
        self
    }

    /// Adds an anchor point after the existing ones.
    #[inline]
    pub fn point(&mut self, point: SetPoint) -> &mut Self {
        self.points.push(point);
        self
    }

    /// Adds an anchor point; shorthand for pushing a [`SetPoint`].
    #[inline]
    pub fn anchor(
        &mut self,
        my_point: FramePoint,
        parent: impl Into<FrameRef>,
        parent_point: FramePoint,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.point(SetPoint::new(my_point, parent, parent_point, x, y))
    }

    /// Sets the font used by the font block.
    #[inline]
    pub fn frame_font(&mut self, font: FrameFont) -> &mut Self {
        self.frame_font = Some(font);
        self
    }

    /// Sets horizontal and vertical text justification.
    #[inline]
    pub fn justify(&mut self, horizontal: FontJustify, vertical: FontJustify) -> &mut Self {
        self.font_justification_h = Some(horizontal);
        self.font_justification_v = Some(vertical);
        self
    }

    /// Sets the text offset from its justified position.
    #[inline]
    pub fn justification_offset(&mut self, offset: impl Into<Vector2>) -> &mut Self {
        self.font_justification_offset = Some(offset.into());
        self
    }

    /// Sets the font flags string.
    #[inline]
    pub fn font_flags(&mut self, flags: impl Into<String>) -> &mut Self {
        self.font_flags = Some(flags.into());
        self
    }

    /// Sets the text color.
    #[inline]
    pub fn font_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.font_color = Some(color.into());
        self
    }

    /// Sets the text color while highlighted.
    #[inline]
    pub fn font_highlight_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.font_highlight_color = Some(color.into());
        self
    }

    /// Sets the text color while disabled.
    #[inline]
    pub fn font_disabled_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.font_disabled_color = Some(color.into());
        self
    }

    /// Sets the text shadow color.
    #[inline]
    pub fn font_shadow_color(&mut self, color: impl Into<Color>) -> &mut Self {
        self.font_shadow_color = Some(color.into());
        self
    }

    /// Sets the text shadow offset.
    #[inline]
    pub fn font_shadow_offset(&mut self, offset: impl Into<Vector2>) -> &mut Self {
        self.font_shadow_offset = Some(offset.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::TextSink;

    fn body(props: &CommonProperties) -> Vec<String> {
        let mut sink = TextSink::new();
        props.write_common(&mut sink);
        sink.as_str().lines().map(str::to_string).collect()
    }

    fn fully_set() -> CommonProperties {
        let mut props = CommonProperties::new("Everything");
        props
            .decorate_file_names()
            .set_all_points()
            .size(0.2, 0.03)
            .anchor(FramePoint::Top, "ConsoleUI", FramePoint::Top, 0.0, -0.1)
            .font_color(Color::WHITE)
            .font_highlight_color(Color::rgb(1.0, 0.8, 0.0))
            .font_disabled_color(Color::rgb(0.5, 0.5, 0.5))
            .font_shadow_color(Color::BLACK)
            .font_shadow_offset((0.001, -0.001))
            .frame_font(FrameFont::new("MasterFont", 0.012))
            .justification_offset((0.0, 0.0))
            .justify(FontJustify::JustifyCenter, FontJustify::JustifyMiddle)
            .font_flags("FIXEDSIZE");
        props
    }

    #[test]
    fn field_order_is_fixed() {
        let headers: Vec<&str> = COMMON_FIELD_ORDER.iter().map(|f| f.header()).collect();
        assert_eq!(
            headers,
            [
                "DecorateFileNames",
                "SetAllPoints",
                "Width",
                "Height",
                "SetPoint",
                "FontColor",
                "FontHighlightColor",
                "FontDisabledColor",
                "FontShadowColor",
                "FontShadowOffset",
                "FrameFont",
                "FontJustificationOffset",
                "FontJustificationH",
                "FontJustificationV",
                "FontFlags",
            ]
        );
    }

    #[test]
    fn every_field_written_once_in_order() {
        let lines = body(&fully_set());
        assert_eq!(
            lines,
            [
                "DecorateFileNames,",
                "SetAllPoints,",
                "Width 0.2,",
                "Height 0.03,",
                "SetPoint TOP, \"ConsoleUI\", TOP, 0, -0.1, ",
                "FontColor 1 1 1 1,",
                "FontHighlightColor 1 0.8 0 1,",
                "FontDisabledColor 0.5 0.5 0.5 1,",
                "FontShadowColor 0 0 0 1,",
                "FontShadowOffset 0.001 -0.001,",
                "FrameFont \"MasterFont\", 0.012, \"\",",
                "FontJustificationOffset 0 0,",
                "FontJustificationH JUSTIFYCENTER,",
                "FontJustificationV JUSTIFYMIDDLE,",
                "FontFlags \"FIXEDSIZE\",",
            ]
        );
    }

    #[test]
    fn unset_properties_write_nothing() {
        assert!(body(&CommonProperties::new("Empty")).is_empty());
    }

    #[test]
    fn toggling_one_field_adds_one_line_in_place() {
        let full = body(&fully_set());
        for (index, field) in COMMON_FIELD_ORDER.into_iter().enumerate() {
            let mut props = fully_set();
            match field {
                CommonField::DecorateFileNames => props.decorate_file_names = false,
                CommonField::SetAllPoints => props.set_all_points = false,
                CommonField::Width => props.width = None,
                CommonField::Height => props.height = None,
                CommonField::SetPoints => props.points.clear(),
                CommonField::FontColor => props.font_color = None,
                CommonField::FontHighlightColor => props.font_highlight_color = None,
                CommonField::FontDisabledColor => props.font_disabled_color = None,
                CommonField::FontShadowColor => props.font_shadow_color = None,
                CommonField::FontShadowOffset => props.font_shadow_offset = None,
                CommonField::FrameFont => props.frame_font = None,
                CommonField::FontJustificationOffset => props.font_justification_offset = None,
                CommonField::FontJustificationH => props.font_justification_h = None,
                CommonField::FontJustificationV => props.font_justification_v = None,
                CommonField::FontFlags => props.font_flags = None,
            }
            assert!(!field.is_set(&props));

            let mut expected = full.clone();
            expected.remove(index);
            assert_eq!(body(&props), expected, "unsetting {field:?}");
        }
    }

    #[test]
    fn false_flags_match_unset_flags() {
        let mut props = CommonProperties::new("Flags");
        props.set_all_points = false;
        props.decorate_file_names = false;
        assert!(body(&props).is_empty());
    }

    #[test]
    fn zero_values_are_still_written() {
        let mut props = CommonProperties::new("Zero");
        props.width(0.0).font_flags("");
        assert_eq!(body(&props), ["Width 0,", "FontFlags \"\","]);
    }

    #[test]
    fn large_sizes_keep_every_digit() {
        let mut props = CommonProperties::new("Wide");
        props.width(16777217.0).height(0.1);
        assert_eq!(body(&props), ["Width 16777217,", "Height 0.1,"]);
    }

    #[test]
    fn font_block_skips_layout_fields() {
        let props = fully_set();
        let mut sink = TextSink::new();
        props.write_font_block(&mut sink);
        let lines: Vec<&str> = sink.as_str().lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "FontColor 1 1 1 1,");
        assert_eq!(lines[9], "FontFlags \"FIXEDSIZE\",");
    }

    #[test]
    fn header_with_inheritance_clause() {
        let base = CommonProperties::new("EscMenuButtonTemplate");
        let mut props = CommonProperties::new("MyButton");
        props.inherits_with_children(base.name.handle());

        let mut sink = TextSink::new();
        props.write_header(&mut sink, "Frame", Some("GLUETEXTBUTTON"));
        assert_eq!(
            sink.as_str(),
            "Frame \"GLUETEXTBUTTON\" \"MyButton\" INHERITS WITHCHILDREN \"EscMenuButtonTemplate\" {\n"
        );
    }

    #[test]
    fn header_without_modifier_or_tag() {
        let mut props = CommonProperties::new("Title");
        props.inherits("EscMenuTitleTextTemplate");

        let mut sink = TextSink::new();
        props.write_header(&mut sink, "String", None);
        assert_eq!(sink.as_str(), "String \"Title\" INHERITS \"EscMenuTitleTextTemplate\" {\n");
    }
}
