//! Failure taxonomy for a patch run.
//!
//! A missing end marker is deliberately absent here: the replaced region then
//! runs to end of document.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("anchor not found in {}", path.display())]
    AnchorNotFound { path: PathBuf },
    #[error("write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{name} must not be empty")]
    InvalidLiteral { name: &'static str },
}
