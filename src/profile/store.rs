use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::error::AutofillError;
use crate::profile::model::Profile;

// ============================================================================
// Profile store — named profiles persisted as JSON documents
// ============================================================================

/// Key-value persistence for profiles: one `<name>.json` per profile under a
/// directory. The stored document is exactly the import/export format.
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self { dir: dir.as_ref().to_path_buf() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Names of all stored profiles, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = match fs::read_dir(&self.dir) {
            Ok(entries) => entries
                .filter_map(|e| e.ok())
                .filter_map(|e| {
                    let path = e.path();
                    if path.extension().and_then(|x| x.to_str()) == Some("json") {
                        path.file_stem().and_then(|s| s.to_str()).map(String::from)
                    } else {
                        None
                    }
                })
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    pub fn load(&self, name: &str) -> Result<Profile, AutofillError> {
        let path = self.path_for(name);
        let doc = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AutofillError::ProfileNotFound { name: name.to_string() }
            } else {
                AutofillError::ProfileIo { path: path.clone(), source: e }
            }
        })?;

        Profile::from_json(&doc)
            .map_err(|e| AutofillError::ProfileFormat { path, source: e })
    }

    pub fn save(&self, name: &str, profile: &Profile) -> Result<(), AutofillError> {
        fs::create_dir_all(&self.dir).map_err(|e| AutofillError::ProfileIo {
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.path_for(name);
        fs::write(&path, profile.to_json())
            .map_err(|e| AutofillError::ProfileIo { path, source: e })
    }

    /// Import a JSON document as a named profile. The document mirrors the
    /// profile mapping one-to-one, so import is parse-then-save.
    pub fn import(&self, name: &str, doc: &str) -> Result<Profile, AutofillError> {
        let profile = Profile::from_json(doc).map_err(|e| AutofillError::ProfileFormat {
            path: self.path_for(name),
            source: e,
        })?;
        self.save(name, &profile)?;
        Ok(profile)
    }

    /// Export a named profile as its JSON document.
    pub fn export(&self, name: &str) -> Result<String, AutofillError> {
        Ok(self.load(name)?.to_json())
    }
}
