use std::fmt::{Display, Formatter};

use gallery_domain::DomainError;

#[derive(Debug)]
pub enum ApplicationError {
    Domain(DomainError),
    NoFolderSelected,
    NoImageSelected,
    Copy(String),
    Delete(String),
    Settings(String),
    Io(String),
    Decode(String),
    Watch(String),
}

impl Display for ApplicationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain(error) => write!(f, "{error}"),
            Self::NoFolderSelected => write!(f, "no image folder selected"),
            Self::NoImageSelected => write!(f, "no image selected"),
            Self::Copy(msg) => write!(f, "copy failed: {msg}"),
            Self::Delete(msg) => write!(f, "delete failed: {msg}"),
            Self::Settings(msg) => write!(f, "settings error: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
            Self::Watch(msg) => write!(f, "watch error: {msg}"),
        }
    }
}

impl std::error::Error for ApplicationError {}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        Self::Domain(value)
    }
}
