use crate::error::{Result, StashError};
use crate::models::Collection;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The whole collection as one pretty-printed JSON document.
///
/// Every save rewrites the file; there is no partial update.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the store file path
    pub fn get_path(&self) -> &Path {
        &self.path
    }

    /// Read the collection.
    ///
    /// A missing or blank file is the bootstrap case and yields an empty
    /// collection. Unreadable files are `Load` errors, unparsable ones
    /// `CorruptStore`.
    pub fn load(&self) -> Result<Collection> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No store at {:?}, starting empty", self.path);
                return Ok(Collection::default());
            }
            Err(source) => {
                return Err(StashError::Load {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            log::debug!("Store {:?} is blank, starting empty", self.path);
            return Ok(Collection::default());
        }

        let collection: Collection =
            serde_json::from_slice(&bytes).map_err(|source| StashError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "Loaded {} bookmark(s) from {:?}",
            collection.len(),
            self.path
        );
        Ok(collection)
    }

    /// Replace the store file with `collection`.
    ///
    /// Writes to a temporary file next to the target and renames it over the
    /// old one, so a failed write leaves the previous file intact.
    pub fn save(&self, collection: &Collection) -> Result<()> {
        self.write_atomic(collection)
            .map_err(|source| StashError::Save {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("Saved {} bookmark(s) to {:?}", collection.len(), self.path);
        Ok(())
    }

    fn write_atomic(&self, collection: &Collection) -> io::Result<()> {
        let json = serde_json::to_vec_pretty(collection).map_err(io::Error::other)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;

        // NamedTempFile is created 0600
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tmp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Copy the current file aside as `<file>.corrupt`.
    ///
    /// Used after a failed load so the next save cannot destroy the only
    /// copy. Earlier backups are kept: if `<file>.corrupt` is taken the copy
    /// goes to `<file>.corrupt.1`, `.corrupt.2` and so on. Returns the backup
    /// path, or `None` if there was no file.
    pub fn backup_corrupt(&self) -> Result<Option<PathBuf>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut name = self
            .path
            .file_name()
            .ok_or_else(|| StashError::Other(format!("Not a file path: {:?}", self.path)))?
            .to_os_string();
        name.push(".corrupt");

        let mut backup = self.path.with_file_name(&name);
        let mut n = 0u32;
        while backup.exists() {
            n += 1;
            let mut numbered = name.clone();
            numbered.push(format!(".{}", n));
            backup = self.path.with_file_name(numbered);
        }

        fs::copy(&self.path, &backup)?;
        log::warn!("Backed up unreadable store {:?} to {:?}", self.path, backup);
        Ok(Some(backup))
    }
}
