//! File-backed override store for the site-content document.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tokio::sync::RwLock;

use darkroom_core::CoreError;

use crate::defaults::default_document;
use crate::merge::deep_merge;

/// Process-wide store for the editable site-content document.
///
/// Constructed once at startup and shared via `Arc` in the app state.
/// The in-memory override is mutated only by [`apply_bulk_update`], and
/// only after the durable write has succeeded, so a crash between the
/// two can never leave memory ahead of disk.
///
/// [`apply_bulk_update`]: SiteConfigStore::apply_bulk_update
pub struct SiteConfigStore {
    path: PathBuf,
    default: Value,
    overrides: RwLock<Value>,
}

impl SiteConfigStore {
    /// Load the store from the override file at `path`.
    ///
    /// A missing file is the normal first-run state and yields empty
    /// overrides. An unreadable or corrupt file also yields empty
    /// overrides, with a warning: the site keeps serving defaults
    /// rather than refusing to start.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        Self::load_with_default(path, default_document()).await
    }

    /// Same as [`load`], with an injected default document. Tests use
    /// this to exercise merge behavior against a small document.
    ///
    /// [`load`]: SiteConfigStore::load
    pub async fn load_with_default(path: impl Into<PathBuf>, default: Value) -> Self {
        let path = path.into();
        let overrides = read_overrides(&path).await;
        Self {
            path,
            default,
            overrides: RwLock::new(overrides),
        }
    }

    /// The effective document: `deep_merge(default, override)`.
    ///
    /// Reads observe some complete prior write or the initial state;
    /// no ordering is guaranteed against a concurrent update beyond
    /// that.
    pub async fn get(&self) -> Value {
        let overrides = self.overrides.read().await;
        deep_merge(self.default.clone(), overrides.clone())
    }

    /// Deep-merge `patch` into the persisted overrides.
    ///
    /// The merged result is written to `<path>.tmp` and renamed over
    /// the override file; only after the rename succeeds is the
    /// in-memory copy replaced. On any failure the update is rejected
    /// whole: file and memory keep their prior state.
    pub async fn apply_bulk_update(&self, patch: Value) -> Result<(), CoreError> {
        if !patch.is_object() {
            return Err(CoreError::Validation(
                "site config update must be a JSON object".to_string(),
            ));
        }

        // Write lock held across the whole merge-write-swap so
        // concurrent updates serialize and readers never see a
        // half-applied document.
        let mut overrides = self.overrides.write().await;
        let merged = deep_merge(overrides.clone(), patch);

        let mut bytes = serde_json::to_vec_pretty(&merged)
            .map_err(|e| CoreError::Internal(format!("serializing site config: {e}")))?;
        bytes.push(b'\n');

        let tmp = tmp_path(&self.path);
        tokio::fs::write(&tmp, &bytes)
            .await
            .map_err(|e| CoreError::Storage(format!("writing {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| CoreError::Storage(format!("renaming over {}: {e}", self.path.display())))?;

        *overrides = merged;
        tracing::info!(path = %self.path.display(), "Site config overrides persisted");
        Ok(())
    }
}

/// Sibling temp file the atomic write goes through. Kept next to the
/// real file so the rename stays on one filesystem.
fn tmp_path(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_owned();
    os.push(".tmp");
    PathBuf::from(os)
}

async fn read_overrides(path: &Path) -> Value {
    match tokio::fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Value>(&bytes) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => {
                tracing::warn!(
                    path = %path.display(),
                    "Site config override file is not a JSON object, starting with empty overrides"
                );
                Value::Object(Map::new())
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Site config override file is corrupt, starting with empty overrides"
                );
                Value::Object(Map::new())
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!(path = %path.display(), "No site config override file, starting with empty overrides");
            Value::Object(Map::new())
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Failed to read site config override file, starting with empty overrides"
            );
            Value::Object(Map::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn small_default() -> Value {
        json!({
            "home": { "hero": { "slides": [{"id": "d1"}] }, "tagline": "default" },
            "contact": { "business": { "name": "Darkroom Studio" } },
        })
    }

    async fn store_at(dir: &tempfile::TempDir) -> SiteConfigStore {
        SiteConfigStore::load_with_default(dir.path().join("site-config.json"), small_default())
            .await
    }

    #[tokio::test]
    async fn missing_file_serves_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir).await;
        assert_eq!(store.get().await, small_default());
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir).await;

        store
            .apply_bulk_update(json!({"home": {"tagline": "edited"}}))
            .await
            .unwrap();

        let effective = store.get().await;
        assert_eq!(effective["home"]["tagline"], "edited");
        // Untouched keys keep their defaults.
        assert_eq!(effective["contact"]["business"]["name"], "Darkroom Studio");

        // A fresh store reads the same overrides back from disk.
        let reloaded = store_at(&dir).await;
        assert_eq!(reloaded.get().await["home"]["tagline"], "edited");
    }

    #[tokio::test]
    async fn second_array_update_wins_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir).await;

        store
            .apply_bulk_update(json!({"home": {"hero": {"slides": [{"id": "s1"}, {"id": "s2"}]}}}))
            .await
            .unwrap();
        store
            .apply_bulk_update(json!({"home": {"hero": {"slides": [{"id": "s3"}]}}}))
            .await
            .unwrap();

        let slides = store.get().await["home"]["hero"]["slides"].clone();
        assert_eq!(slides, json!([{"id": "s3"}]));
    }

    #[tokio::test]
    async fn non_object_patch_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir).await;
        let err = store.apply_bulk_update(json!([1, 2, 3])).await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        // Nothing was written.
        assert!(!dir.path().join("site-config.json").exists());
    }

    #[tokio::test]
    async fn stale_temp_file_never_clobbers_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site-config.json");

        let store = SiteConfigStore::load_with_default(&path, small_default()).await;
        store
            .apply_bulk_update(json!({"home": {"tagline": "first"}}))
            .await
            .unwrap();
        let committed = std::fs::read(&path).unwrap();

        // Simulate a crash mid-update: the temp file was written but the
        // rename never happened.
        std::fs::write(tmp_path(&path), b"{\"home\":{\"tagline\":\"torn\"}}").unwrap();

        // The override file is byte-identical to the last committed
        // write, and a restart serves the committed state.
        assert_eq!(std::fs::read(&path).unwrap(), committed);
        let reloaded = SiteConfigStore::load_with_default(&path, small_default()).await;
        assert_eq!(reloaded.get().await["home"]["tagline"], "first");
    }

    #[tokio::test]
    async fn failed_write_leaves_memory_untouched() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so the temp write fails.
        let path = dir.path().join("missing").join("site-config.json");
        let store = SiteConfigStore::load_with_default(&path, small_default()).await;

        let err = store
            .apply_bulk_update(json!({"home": {"tagline": "never"}}))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));

        // The rejected update is not visible in memory.
        assert_eq!(store.get().await["home"]["tagline"], "default");
    }

    #[tokio::test]
    async fn corrupt_override_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site-config.json");
        std::fs::write(&path, b"{ not json").unwrap();

        let store = SiteConfigStore::load_with_default(&path, small_default()).await;
        assert_eq!(store.get().await, small_default());
    }

    #[tokio::test]
    async fn override_file_is_pretty_printed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_at(&dir).await;
        store
            .apply_bulk_update(json!({"home": {"tagline": "diffable"}}))
            .await
            .unwrap();

        let text = std::fs::read_to_string(dir.path().join("site-config.json")).unwrap();
        // Human-diffable: multi-line, trailing newline.
        assert!(text.lines().count() > 1);
        assert!(text.ends_with('\n'));
    }
}
