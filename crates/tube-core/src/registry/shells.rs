//! Derived shell geometry storage.

use std::collections::HashMap;

use crate::geometry::ShellGeometry;

/// Handle to a shell stored in the [`ShellStore`].
///
/// Each handle is owned by exactly one tube entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellHandle(u64);

/// Handle-based storage for derived shell geometry.
///
/// Shells are never authoritative: they can always be rebuilt from
/// [`TubeParams`](crate::TubeParams). Handles are never reused, so a stale
/// handle cannot resolve to a newer shell.
#[derive(Debug)]
pub struct ShellStore {
    shells: HashMap<ShellHandle, ShellGeometry>,
    next_handle: u64,
}

impl ShellStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            shells: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Stores a shell and returns its handle.
    pub fn insert(&mut self, shell: ShellGeometry) -> ShellHandle {
        let handle = ShellHandle(self.next_handle);
        self.next_handle += 1;
        self.shells.insert(handle, shell);
        handle
    }

    /// Gets a shell by handle.
    pub fn get(&self, handle: ShellHandle) -> Option<&ShellGeometry> {
        self.shells.get(&handle)
    }

    /// Releases a shell.
    pub fn release(&mut self, handle: ShellHandle) -> Option<ShellGeometry> {
        self.shells.remove(&handle)
    }

    /// Returns true if the store holds a shell for the handle.
    pub fn contains(&self, handle: ShellHandle) -> bool {
        self.shells.contains_key(&handle)
    }

    /// Number of live shells.
    pub fn len(&self) -> usize {
        self.shells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shells.is_empty()
    }
}

impl Default for ShellStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_not_reused() {
        let mut store = ShellStore::new();
        let shell = ShellGeometry::build(20.0, 20.0, 2.0, 100.0).unwrap();

        let first = store.insert(shell.clone());
        assert!(store.release(first).is_some());
        let second = store.insert(shell);

        assert_ne!(first, second);
        assert!(!store.contains(first));
        assert!(store.contains(second));
        assert_eq!(store.len(), 1);
    }
}
