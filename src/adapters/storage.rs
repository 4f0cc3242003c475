use crate::core::Storage;
use crate::utils::error::{PagesError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    async fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).map_err(|source| PagesError::Write {
            path: PathBuf::from(&self.base_path),
            source,
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        fs::write(&full_path, data).map_err(|source| PagesError::Write {
            path: full_path,
            source,
        })
    }

    fn location(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}
