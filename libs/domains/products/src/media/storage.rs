use std::io;
use std::path::PathBuf;
use tokio::fs;

/// Public file area: files live under `root` and are served at `base_url`.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
    base_url: String,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// Writes `bytes` to `<root>/<collection>/<file_name>` and returns the
    /// relative path.
    pub async fn write(&self, collection: &str, file_name: &str, bytes: &[u8]) -> io::Result<String> {
        let dir = self.root.join(collection);
        fs::create_dir_all(&dir).await?;
        fs::write(dir.join(file_name), bytes).await?;
        Ok(format!("{collection}/{file_name}"))
    }

    /// Removes a stored file; a file that is already gone is not an error.
    pub async fn remove(&self, path: &str) -> io::Result<()> {
        match fs::remove_file(self.root.join(path)).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}
