//! Document generation - validation, legal templates and the PDF render engine.
//!
//! The pipeline is split the same way for every document type:
//! - `validation` gates generation on the submitted form,
//! - `templates` holds the fixed legal content and its substitution points,
//! - `engine` materializes assembled content as a PDF via the Typst CLI.

pub mod common;
pub mod engine;
pub mod templates;
pub mod validation;

pub use engine::{DocumentContent, DocumentRenderer, TypstRenderer};
pub use validation::{validate, ValidationError};

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while materializing a document artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] io::Error),
    #[error("failed to stage header image: {0}")]
    StageAsset(#[source] io::Error),
    #[error("failed to write Typst source: {0}")]
    WriteSource(#[source] io::Error),
    #[error("Typst CLI execution failed: {0}")]
    TypstIo(#[source] io::Error),
    #[error("Typst CLI exited with status {0}")]
    TypstExit(i32),
    #[error("failed to place rendered PDF at {path}: {source}")]
    PersistPdf {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
