//! In-memory product catalog, loaded once at startup.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::shared::{ClientError, Product, ProductId};

/// Mapping product id → product. Never invalidated during a session.
#[derive(Debug, Clone, Default)]
pub struct CatalogCache {
    products: HashMap<ProductId, Product>,
    loaded: bool,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill the cache from a fetch result. A failed fetch leaves it empty.
    ///
    /// Only the first call has an effect.
    pub fn populate(&mut self, result: Result<Vec<Product>, ClientError>) {
        if self.loaded {
            return;
        }
        match result {
            Ok(products) => {
                self.products = products.into_iter().map(|p| (p.id, p)).collect();
                self.loaded = true;
                info!(count = self.products.len(), "catalog loaded");
            }
            Err(e) => {
                warn!(error = %e, "catalog unavailable; product details will be missing");
            }
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
