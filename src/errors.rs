use thiserror::Error;

/// Errors raised at the edges of the crate.
///
/// Emitting frames never fails; only parsing tokens and writing finished
/// text to an external writer can.
#[derive(Debug, Error)]
pub enum Error {
    /// The output writer refused the generated text.
    #[error("failed to write frame definitions: {0}")]
    Io(#[from] std::io::Error),
    /// The string is not one of the nine frame anchor names.
    #[error("unknown frame point `{0}`")]
    UnknownPoint(String),
    #[error("unknown font justification `{0}`")]
    UnknownJustify(String),
    #[error("unknown layer type `{0}`")]
    UnknownLayer(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
