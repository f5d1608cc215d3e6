//! On-disk loot storage.

use std::path::PathBuf;
use std::{fs, io};

use chrono::Utc;

use crate::error::Error;
use crate::store::LootStore;

/// Stores artifacts as timestamped files under a loot directory.
///
/// Artifact names follow `<UTC timestamp>_<type>_<filename>`, so repeated
/// runs against the same target never clobber each other and the artifact
/// type stays greppable.
pub struct DiskLootStore {
    root: PathBuf,
}

impl DiskLootStore {
    pub fn new(root: PathBuf) -> Result<DiskLootStore, Error> {
        let attr = fs::metadata(&root).map_err(|source| Error::RootPathInvalid {
            path: root.clone(),
            source,
        })?;

        if !attr.is_dir() {
            return Err(Error::RootPathInvalid {
                path: root,
                source: io::Error::other("Loot root must be a directory."),
            });
        }

        if attr.permissions().readonly() {
            return Err(Error::RootPathInvalid {
                path: root,
                source: io::Error::other("Loot root must be writable"),
            });
        }

        match root.canonicalize() {
            Ok(root) => Ok(DiskLootStore { root }),
            Err(source) => Err(Error::RootPathInvalid { path: root, source }),
        }
    }
}

impl LootStore for DiskLootStore {
    fn store(
        &mut self,
        ltype: &str,
        data: &str,
        filename: &str,
        info: &str,
    ) -> Result<PathBuf, Error> {
        let stamp = Utc::now().format("%Y%m%d%H%M%S");
        let path = self.root.join(format!("{}_{}_{}", stamp, ltype, filename));

        log::debug!("Writing {}...", path.display());
        fs::write(&path, data).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        log::info!("Stored {} ({}) as {}", ltype, info, path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_artifact_under_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = DiskLootStore::new(PathBuf::from(dir.path())).unwrap();

        let path = store
            .store(
                "aws.ec2.instance.metadata",
                "{\"instance-id\": \"i-0\"}",
                "aws_ec2_instance_metadata.json",
                "AWS EC2 Instance Metadata",
            )
            .unwrap();

        assert!(path.starts_with(dir.path().canonicalize().unwrap()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.contains("aws.ec2.instance.metadata"));
        assert!(name.ends_with("aws_ec2_instance_metadata.json"));

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\"instance-id\": \"i-0\"}");
    }

    #[test]
    fn rejects_missing_root() {
        let result = DiskLootStore::new(PathBuf::from("/nonexistent/path/12345"));
        assert!(matches!(result, Err(Error::RootPathInvalid { .. })));
    }

    #[test]
    fn rejects_file_as_root() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("not-a-dir");
        fs::write(&file_path, b"x").unwrap();

        let result = DiskLootStore::new(file_path);
        assert!(matches!(result, Err(Error::RootPathInvalid { .. })));
    }
}
