//! Runtime environment helpers

use std::path::Path;

use tracing::info;

/// Create the parent directory of a file-backed SQLite URL so `mode=rwc` can create the file.
pub async fn ensure_sqlite_dir(url: &str) -> anyhow::Result<()> {
    let Some(dir) = sqlite_parent_dir(url) else { return Ok(()) };
    if tokio::fs::metadata(&dir).await.is_ok() {
        return Ok(());
    }
    tokio::fs::create_dir_all(&dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {dir}: {e}"))?;
    info!(%dir, "created sqlite data directory");
    Ok(())
}

fn sqlite_parent_dir(url: &str) -> Option<String> {
    let rest = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    let parent = Path::new(path).parent()?;
    let parent = parent.to_str()?;
    if parent.is_empty() { None } else { Some(parent.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_dir_of_file_urls() {
        assert_eq!(sqlite_parent_dir("sqlite://data/catalog.db?mode=rwc").as_deref(), Some("data"));
        assert_eq!(sqlite_parent_dir("sqlite:/tmp/x/c.db").as_deref(), Some("/tmp/x"));
        assert_eq!(sqlite_parent_dir("sqlite://catalog.db"), None);
        assert_eq!(sqlite_parent_dir("sqlite::memory:"), None);
        assert_eq!(sqlite_parent_dir("postgres://localhost/catalog"), None);
    }

    #[tokio::test]
    async fn creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("data");
        let url = format!("sqlite://{}/catalog.db?mode=rwc", dir.display());
        ensure_sqlite_dir(&url).await.unwrap();
        assert!(dir.is_dir());
    }
}
