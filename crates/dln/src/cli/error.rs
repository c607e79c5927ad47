//! Error types for the dln command.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::error::{EncodingError, LicenceNumberError, RecordError};

/// Errors surfaced by the command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The person record could not be encoded.
    #[error("cannot encode person: {source}")]
    Encoding {
        /// Underlying encoding error.
        #[from]
        #[source]
        source: EncodingError,
    },
    /// The person record file could not be loaded.
    #[error("person record error: {source}")]
    Record {
        /// Underlying record error.
        #[from]
        #[source]
        source: RecordError,
    },
    /// The code given to `decode` is not a licence number.
    #[error("{source}")]
    LicenceNumber {
        /// Underlying parse error.
        #[from]
        #[source]
        source: LicenceNumberError,
    },
    /// The `--person` path does not end in a file name.
    #[error("person record path must name a file: {path}")]
    NotAFile {
        /// Path as supplied.
        path: Utf8PathBuf,
    },
    /// The directory holding the person record could not be opened.
    #[error("failed to open directory '{path}': {message}")]
    OpenDirectory {
        /// Directory path.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
    /// Configuration layering failed.
    #[error("failed to load configuration: {message}")]
    Settings {
        /// Description of the configuration error.
        message: String,
    },
    /// Decoded output could not be rendered as JSON.
    #[error("failed to render JSON output: {message}")]
    Render {
        /// Serializer error message.
        message: String,
    },
}
