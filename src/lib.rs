use std::sync::{Arc, OnceLock, RwLock};

use error::Error;
use handler::TreeHandler;
use hashbrown::HashMap;
use store::TreeStore;

pub mod error;
pub mod handler;
pub mod node;
pub mod store;

/// A registered store, shared with whoever renders it
pub type SharedStore = Arc<RwLock<dyn TreeHandler + Send + Sync>>;

/// The static instance of the explorer manager
static EXPLORER_MANAGER: OnceLock<Arc<ExplorerManager>> = OnceLock::new();

/// Registry of the tree stores alive in the session.
/// Stores are ephemeral: nothing outlives the session, and a fresh
/// load starts every panel back at the seed forest.
pub struct ExplorerManager {
    stores: Arc<RwLock<HashMap<String, SharedStore>>>,
}

impl ExplorerManager {
    /// Initialize the explorer manager.
    /// Calling it again is a no-op.
    pub fn init_once() {
        let _ = Self::get();
    }

    /// Get the explorer manager
    pub fn get() -> Arc<ExplorerManager> {
        EXPLORER_MANAGER
            .get_or_init(|| {
                Arc::new(ExplorerManager {
                    stores: Arc::new(RwLock::new(HashMap::new())),
                })
            })
            .clone()
    }

    /// Register a tree store under a panel name
    pub fn register_store<T>(&self, name: &str, store: T) -> Result<(), Error>
    where
        T: TreeHandler + Send + Sync + 'static,
    {
        let mut stores = self.stores.write().map_err(|_| Error::ManagerPoisoned)?;

        if stores.contains_key(name) {
            return Err(Error::StoreInUse(name.to_string()));
        }
        stores.insert(name.to_string(), Arc::new(RwLock::new(store)));
        Ok(())
    }

    /// Get a registered store
    pub fn get_store(&self, name: &str) -> Result<SharedStore, Error> {
        let stores = self.stores.read().map_err(|_| Error::ManagerPoisoned)?;

        stores
            .get(name)
            .cloned()
            .ok_or_else(|| Error::NoSuchStore(name.to_string()))
    }

    /// Throw away a registered store and put a fresh seed forest in
    /// its place, as a fresh load of the panel would
    pub fn reset_store(&self, name: &str) -> Result<(), Error> {
        let mut stores = self.stores.write().map_err(|_| Error::ManagerPoisoned)?;

        if !stores.contains_key(name) {
            return Err(Error::NoSuchStore(name.to_string()));
        }
        stores.insert(name.to_string(), Arc::new(RwLock::new(TreeStore::seeded())));
        Ok(())
    }
}
