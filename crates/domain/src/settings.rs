use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Everything remembered between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "imageFolder", alias = "image_folder", default)]
    pub image_folder: Option<PathBuf>,
}

impl Settings {
    pub fn with_folder(folder: impl Into<PathBuf>) -> Self {
        Self {
            image_folder: Some(folder.into()),
        }
    }
}
