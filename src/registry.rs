//! Pool registry: creates one [`Pool`] per asset pair and remembers it.
//!
//! Pools are kept in creation order. Nothing is validated about the pair;
//! creating the same pair twice yields two independent pools, and
//! `asset_a == asset_b` is accepted.

use std::collections::HashMap;

use tracing::info;

use crate::config::EngineConfig;
use crate::error::RegistryError;
use crate::pool::Pool;
use crate::types::{Address, AssetId, PoolCreated, PoolId};

#[derive(Debug)]
pub struct PoolRegistry {
    /// Namespace for derived pool addresses
    address: Address,
    config: EngineConfig,
    pools: Vec<Pool>,
    index: HashMap<PoolId, usize>,
    events: Vec<PoolCreated>,
}

impl PoolRegistry {
    pub fn new(address: Address, config: EngineConfig) -> Self {
        Self {
            address,
            config,
            pools: Vec::new(),
            index: HashMap::new(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn address(&self) -> Address {
        self.address
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create a pool bound to `(asset_a, asset_b)` and return its id.
    ///
    /// The id is derived from the registry address and the creation nonce,
    /// so identical creation histories yield identical ids.
    ///
    /// # Example
    ///
    /// ```
    /// use dark_pool::config::EngineConfig;
    /// use dark_pool::registry::PoolRegistry;
    /// use dark_pool::types::Address;
    ///
    /// let mut registry = PoolRegistry::new(Address::from_label("registry"), EngineConfig::default());
    /// let a = Address::from_label("token-a");
    /// let b = Address::from_label("token-b");
    ///
    /// let first = registry.create_pool(Address::from_label("owner"), a, b);
    /// let second = registry.create_pool(Address::from_label("owner"), a, b);
    ///
    /// assert_ne!(first, second);
    /// assert_eq!(registry.list_pools(), vec![first, second]);
    /// ```
    pub fn create_pool(&mut self, creator: Address, asset_a: AssetId, asset_b: AssetId) -> PoolId {
        let nonce = self.pools.len() as u64;
        let id = Address::derive(&self.address, nonce);

        self.index.insert(id, self.pools.len());
        self.pools.push(Pool::new(id, asset_a, asset_b, &self.config));

        let event = PoolCreated::new(creator, id, asset_a, asset_b);
        self.events.push(event);

        info!(%creator, pool = %id, %asset_a, %asset_b, "pool created");
        id
    }

    /// Pool ids in creation order
    pub fn list_pools(&self) -> Vec<PoolId> {
        self.pools.iter().map(Pool::address).collect()
    }

    pub fn pool(&self, id: &PoolId) -> Result<&Pool, RegistryError> {
        self.index
            .get(id)
            .map(|&i| &self.pools[i])
            .ok_or(RegistryError::PoolNotFound(*id))
    }

    pub fn pool_mut(&mut self, id: &PoolId) -> Result<&mut Pool, RegistryError> {
        match self.index.get(id) {
            Some(&i) => Ok(&mut self.pools[i]),
            None => Err(RegistryError::PoolNotFound(*id)),
        }
    }

    /// Creation records, oldest first
    pub fn events(&self) -> &[PoolCreated] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }
}
