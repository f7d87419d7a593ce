// error.rs     Crate error taxonomy.
//
//! The error types returned from fallible library entry points (construction,
//! PNG decode/encode, directory traversal).
use std::path::PathBuf;

/// Errors produced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A grid or image of zero width or height was supplied where a
    /// non-empty one is required.
    #[error("cannot operate on an empty image (width or height is zero)")]
    EmptyImage,

    /// The PNG codec failed to decode `path`.
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        /// The file that failed to decode.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: image::ImageError,
    },

    /// The PNG codec failed to encode `path`.
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        /// The file that failed to encode.
        path: PathBuf,
        /// Underlying encoder error.
        #[source]
        source: image::ImageError,
    },

    /// A filesystem operation on `path` failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory involved.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias for this crate's `Result`.
pub type Result<T> = std::result::Result<T, Error>;
