use anyhow::{Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use std::fs;
use std::path::{Path, PathBuf};

/// A captured screenshot with both its file path and base64-encoded data
#[derive(Debug, Clone)]
pub struct Screenshot {
    /// Path where the screenshot is saved
    pub file_path: PathBuf,
    /// Base64-encoded image data for vision requests
    pub image_data: String,
}

impl Screenshot {
    /// Creates a Screenshot from raw image bytes
    pub fn from_raw(file_path: PathBuf, raw_data: &[u8]) -> Self {
        let image_data = BASE64.encode(raw_data);
        Self {
            file_path,
            image_data,
        }
    }

    /// Creates a Screenshot by reading an image file from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw_data = fs::read(path)
            .with_context(|| format!("Failed to read screenshot file {}", path.display()))?;
        Ok(Self::from_raw(path.to_path_buf(), &raw_data))
    }

    /// Path for the sibling description file, with the image extension
    /// replaced by `txt`
    pub fn description_path(&self) -> PathBuf {
        self.file_path.with_extension("txt")
    }
}
