//! Single-line property writers shared by every frame variant.
//!
//! Each writer emits `<Header> <value>,` on its own indented line, or nothing
//! at all when the value is absent.

use core::fmt::Display;

use crate::id::FrameRef;
use crate::math::Number;
use crate::writer::Sink;

/// A scalar property value. Text is quoted unless written bare.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(text: &'a str) -> Self {
        Scalar::Text(text)
    }
}

impl<'a> From<&'a String> for Scalar<'a> {
    fn from(text: &'a String) -> Self {
        Scalar::Text(text)
    }
}

impl From<f64> for Scalar<'_> {
    fn from(number: f64) -> Self {
        Scalar::Number(number)
    }
}

/// `<Header> "<text>",`, `<Header> <number>,`, or with `bare` set,
/// `<Header> <text>,` for enum-like tokens.
pub fn write_generic(sink: &mut dyn Sink, header: &str, value: Option<Scalar<'_>>, bare: bool) {
    let Some(value) = value else {
        return;
    };
    sink.write_indentation();
    match value {
        Scalar::Text(text) if !bare => sink.write_line(&format!("{header} \"{text}\",")),
        Scalar::Text(text) => sink.write_line(&format!("{header} {text},")),
        Scalar::Number(number) => sink.write_line(&format!("{header} {},", Number(number))),
    }
}

/// `<Header> <value>,` using the value's canonical text (colors, vectors).
pub fn write_display<T: Display + ?Sized>(sink: &mut dyn Sink, header: &str, value: Option<&T>) {
    if let Some(value) = value {
        sink.write_indentation();
        sink.write_line(&format!("{header} {value},"));
    }
}

/// `<Header> "<m1>|<m2>|...",` in iteration order. Empty sets write nothing.
pub fn write_set<I>(sink: &mut dyn Sink, header: &str, members: I)
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut members = members.into_iter().peekable();
    if members.peek().is_none() {
        return;
    }
    sink.write_indentation();
    sink.write(&format!("{header} \""));
    let mut first = true;
    for member in members {
        if !first {
            sink.write("|");
        }
        sink.write(&member.to_string());
        first = false;
    }
    sink.write_line("\",");
}

/// `<Header> "<name>",` with the name resolved from the reference.
pub fn write_reference(sink: &mut dyn Sink, header: &str, target: Option<&FrameRef>) {
    if let Some(target) = target {
        sink.write_indentation();
        sink.write_line(&format!("{header} \"{target}\","));
    }
}
