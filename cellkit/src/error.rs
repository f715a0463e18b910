use std::io;

use thiserror::Error;

/// Failures of the terminal backend and input source.
///
/// Widget logic never returns errors; degenerate geometry and empty
/// collections degrade to drawing nothing.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("input reader stopped")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;
