// File: crates/dash-core/src/error.rs
// Summary: Error type for the fallible plumbing around the renderer (data and options).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A point needs at least an x and a y channel.
    #[error("point size must be at least 2, got {0}")]
    PointSize(usize),

    #[error("buffer length {len} is not a multiple of point size {pointsize}")]
    RaggedBuffer { len: usize, pointsize: usize },

    #[error("invalid dash options: {0}")]
    Options(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
