//! The loot seam.

use std::path::PathBuf;

use crate::error::Error;

/// Persist a named artifact gathered from a target.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn LootStore>`.
pub trait LootStore {
    /// Store `data` under an artifact type and filename, with a
    /// human-readable label.
    ///
    /// # Returns
    ///
    /// Where the artifact ended up. For non-filesystem stores this is a
    /// symbolic location rather than a real path.
    fn store(
        &mut self,
        ltype: &str,
        data: &str,
        filename: &str,
        info: &str,
    ) -> Result<PathBuf, Error>;
}

impl<T: LootStore + ?Sized> LootStore for &mut T {
    fn store(
        &mut self,
        ltype: &str,
        data: &str,
        filename: &str,
        info: &str,
    ) -> Result<PathBuf, Error> {
        (*self).store(ltype, data, filename, info)
    }
}

impl<T: LootStore + ?Sized> LootStore for Box<T> {
    fn store(
        &mut self,
        ltype: &str,
        data: &str,
        filename: &str,
        info: &str,
    ) -> Result<PathBuf, Error> {
        self.as_mut().store(ltype, data, filename, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::in_memory::MemoryLootStore;

    #[test]
    fn object_safety_works() {
        let mut boxed: Box<dyn LootStore> = Box::new(MemoryLootStore::new());
        let path = boxed.store("t", "data", "artifact.json", "info").unwrap();
        assert_eq!(path, PathBuf::from("artifact.json"));
    }
}
