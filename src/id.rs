use core::cell::{Ref, RefCell};
use core::fmt;
use std::rc::Rc;

use crate::frame::Frame;

/// A frame's name. Empty names are allowed for anonymous layers and strings.
///
/// The text lives in a shared cell so that [`FrameHandle`]s taken from it keep
/// seeing renames until the referencing frame is emitted.
#[derive(Default)]
pub struct FrameName {
    text: Rc<RefCell<String>>,
}

impl FrameName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            text: Rc::new(RefCell::new(name.into())),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Borrow the current text.
    pub fn as_str(&self) -> Ref<'_, str> {
        Ref::map(self.text.borrow(), String::as_str)
    }

    /// Replaces the name. Existing handles observe the new text.
    pub fn set(&self, name: impl Into<String>) {
        *self.text.borrow_mut() = name.into();
    }

    pub fn is_empty(&self) -> bool {
        self.text.borrow().is_empty()
    }

    /// Non-owning reference to this name.
    pub fn handle(&self) -> FrameHandle {
        FrameHandle {
            text: Rc::clone(&self.text),
        }
    }
}

impl fmt::Debug for FrameName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FrameName").field(&&*self.as_str()).finish()
    }
}

impl From<&str> for FrameName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FrameName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Identifies a frame by object rather than by spelled-out name.
#[derive(Clone)]
pub struct FrameHandle {
    text: Rc<RefCell<String>>,
}

impl FrameHandle {
    /// The target's name at the time of the call.
    pub fn name(&self) -> Ref<'_, str> {
        Ref::map(self.text.borrow(), String::as_str)
    }

    /// True when both handles point at the same frame.
    pub fn same_frame(&self, other: &FrameHandle) -> bool {
        Rc::ptr_eq(&self.text, &other.text)
    }
}

impl fmt::Debug for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FrameHandle").field(&&*self.name()).finish()
    }
}

/// Either a frame object or a raw name standing in for one.
///
/// Raw names cover frames built elsewhere, including the client's own base
/// frames such as `"ConsoleUI"`. Both forms resolve to text only at emission.
#[derive(Debug, Clone)]
pub enum FrameRef {
    Named(String),
    Frame(FrameHandle),
}

impl FrameRef {
    /// Writes the resolved name without quotes.
    pub fn write_name(&self, f: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            FrameRef::Named(name) => f.write_str(name),
            FrameRef::Frame(handle) => f.write_str(&handle.name()),
        }
    }

    pub fn resolve(&self) -> String {
        match self {
            FrameRef::Named(name) => name.clone(),
            FrameRef::Frame(handle) => handle.name().to_string(),
        }
    }
}

impl fmt::Display for FrameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_name(f)
    }
}

impl From<&str> for FrameRef {
    fn from(name: &str) -> Self {
        FrameRef::Named(name.to_string())
    }
}

impl From<String> for FrameRef {
    fn from(name: String) -> Self {
        FrameRef::Named(name)
    }
}

impl From<FrameHandle> for FrameRef {
    fn from(handle: FrameHandle) -> Self {
        FrameRef::Frame(handle)
    }
}

impl<F: Frame> From<&F> for FrameRef {
    fn from(frame: &F) -> Self {
        FrameRef::Frame(frame.handle())
    }
}
