use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use multibase::Base;

use super::{StorageBackend, StorageError};

/// One file per key under a fixed directory.
///
/// File names are the base32 encoding of the key, so arbitrary keys survive
/// filesystems that are case-insensitive or reserve separator characters.
pub struct FileStorage {
    directory: PathBuf,
}

impl FileStorage {
    /// Open a backend rooted at `directory`, creating it when missing.
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let directory = directory.into();

        fs::create_dir_all(&directory)?;

        Ok(Self { directory })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        let name = multibase::encode(Base::Base32Lower, key.as_bytes());

        self.directory.join(name).with_extension("json")
    }
}

impl StorageBackend for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.key_path(key), value)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        assert_eq!(storage.get("feed:posts").unwrap(), None);

        storage.set("feed:posts", "[]").unwrap();
        assert_eq!(storage.get("feed:posts").unwrap(), Some("[]".to_owned()));

        storage.remove("feed:posts").unwrap();
        assert_eq!(storage.get("feed:posts").unwrap(), None);

        // removing twice is fine
        storage.remove("feed:posts").unwrap();
    }

    #[test]
    fn survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        {
            let storage = FileStorage::open(dir.path()).unwrap();
            storage.set("feed:post:1:comments", r#"["olá"]"#).unwrap();
        }

        let storage = FileStorage::open(dir.path()).unwrap();

        assert_eq!(
            storage.get("feed:post:1:comments").unwrap(),
            Some(r#"["olá"]"#.to_owned())
        );
    }

    #[test]
    fn keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path()).unwrap();

        storage.set("feed:post:1:comments", "one").unwrap();
        storage.set("feed:post:11:comments", "eleven").unwrap();

        assert_eq!(
            storage.get("feed:post:1:comments").unwrap(),
            Some("one".to_owned())
        );
        assert_eq!(
            storage.get("feed:post:11:comments").unwrap(),
            Some("eleven".to_owned())
        );
    }
}
