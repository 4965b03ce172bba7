use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid mobileprovision file: {0}")]
    MalformedProfile(String),

    #[error("No application-identifier found in provisioning profile")]
    MissingIdentifier,

    #[error("Failed to sign IPA file:\n{0}")]
    Signer(String),
}

pub type Result<T> = std::result::Result<T, PatchError>;
