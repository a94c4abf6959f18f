use std::{fs, path::PathBuf};

use anyhow::Context;

use super::DownloadTarget;

#[derive(Debug, Clone)]
pub struct DownloadsFolder {
    dir: PathBuf,
}

impl DownloadsFolder {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's download directory, else the home directory, else the
    /// working directory.
    pub fn user_default() -> Self {
        let dir = dirs::download_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir)
    }
}

impl DownloadTarget for DownloadsFolder {
    fn save_text(&self, filename: &str, content: &str) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create '{}'", self.dir.display()))?;
        let path = self.dir.join(filename);
        fs::write(&path, content)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_file_under_directory() {
        let root = tempfile::tempdir().expect("tempdir");
        let folder = DownloadsFolder::new(root.path().join("nested"));

        let path = folder
            .save_text("arjun-ai-tools-2024-05-01.txt", "नमस्ते")
            .expect("save");

        assert_eq!(path, root.path().join("nested/arjun-ai-tools-2024-05-01.txt"));
        assert_eq!(fs::read_to_string(path).expect("read"), "नमस्ते");
    }
}
