//! In-process tile registry.

use std::sync::{PoisonError, RwLock};

use indexmap::IndexMap;

use crate::distributed::{DistributedTile, Resolver, SharedGrid};
use vita_core::TileId;

/// A same-process [`Resolver`]: an id-keyed map of shared grids.
///
/// Iteration order is insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tiles: RwLock<IndexMap<TileId, SharedGrid>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `grid` under `id`, returning the grid previously stored
    /// there.
    pub fn insert(&self, id: TileId, grid: SharedGrid) -> Option<SharedGrid> {
        self.tiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, grid)
    }

    /// Register a tile's grid under its id.
    pub fn register(&self, tile: &DistributedTile) -> Option<SharedGrid> {
        self.insert(tile.id(), tile.shared())
    }

    /// The grid stored under `id`.
    pub fn get(&self, id: &TileId) -> Option<SharedGrid> {
        self.tiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    /// Remove and return the grid stored under `id`.
    pub fn remove(&self, id: &TileId) -> Option<SharedGrid> {
        self.tiles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .shift_remove(id)
    }

    /// Registered ids in insertion order.
    pub fn ids(&self) -> Vec<TileId> {
        self.tiles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect()
    }

    /// Number of registered tiles.
    pub fn len(&self) -> usize {
        self.tiles.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no tile is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Resolver for MemoryStore {
    fn resolve(&self, id: &TileId) -> Option<SharedGrid> {
        self.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn register_and_resolve() {
        let store = MemoryStore::new();
        let tile = DistributedTile::generate(4, 4).unwrap();
        assert!(store.register(&tile).is_none());
        let got = store.resolve(&tile.id()).unwrap();
        assert!(Arc::ptr_eq(&got, &tile.shared()));
        assert!(store.resolve(&TileId::generate()).is_none());
    }

    #[test]
    fn ids_keep_insertion_order() {
        let store = MemoryStore::new();
        let tiles: Vec<_> = (0..3)
            .map(|_| DistributedTile::generate(2, 2).unwrap())
            .collect();
        for t in &tiles {
            store.register(t);
        }
        let expected: Vec<TileId> = tiles.iter().map(|t| t.id()).collect();
        assert_eq!(store.ids(), expected);

        store.remove(&expected[1]);
        assert_eq!(store.ids(), vec![expected[0], expected[2]]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
    }
}
