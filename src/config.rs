//! Volume configuration for a seeding run.
//!
//! Values come from defaults, then an optional YAML file, then CLI flags.
//!
//! ```yaml
//! customers: 100
//! products: 500
//! orders: 10000
//! max_lines_per_order: 3
//! seed: 42
//! strategy: rejection
//! ```

use crate::sampler::SamplerStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CUSTOMERS: usize = 100;
pub const DEFAULT_PRODUCTS: usize = 500;
pub const DEFAULT_ORDERS: usize = 10_000;
pub const DEFAULT_MAX_LINES_PER_ORDER: usize = 3;

/// Inclusive quantity range for an order line
pub const QUANTITY_RANGE: (i64, i64) = (1, 5);
/// Inclusive price range for an order line, in cents
pub const PRICE_CENTS_RANGE: (i64, i64) = (1_000, 11_000);

/// How many rows of each table to generate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Number of customers (N)
    pub customers: usize,
    /// Number of products (P)
    pub products: usize,
    /// Number of orders (M)
    pub orders: usize,
    /// Upper bound on order lines per order (K); each order gets 1..=K
    pub max_lines_per_order: usize,
    /// RNG seed; `None` picks one at random
    pub seed: Option<u64>,
    /// How per-order product ids are drawn
    pub strategy: SamplerStrategy,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            customers: DEFAULT_CUSTOMERS,
            products: DEFAULT_PRODUCTS,
            orders: DEFAULT_ORDERS,
            max_lines_per_order: DEFAULT_MAX_LINES_PER_ORDER,
            seed: None,
            strategy: SamplerStrategy::default(),
        }
    }
}

impl VolumeConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
        let config: VolumeConfig = serde_yaml_ng::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Check the preconditions the generator relies on.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_lines_per_order == 0 {
            anyhow::bail!("max_lines_per_order must be at least 1");
        }
        if self.orders > 0 && self.customers == 0 {
            anyhow::bail!(
                "cannot generate {} orders without any customers",
                self.orders
            );
        }
        if self.orders > 0 && self.products == 0 {
            anyhow::bail!(
                "cannot generate order lines for {} orders without any products",
                self.orders
            );
        }
        if self.orders > 0 && self.max_lines_per_order > self.products {
            anyhow::bail!(
                "max_lines_per_order ({}) exceeds the number of products ({}); \
                 product ids must be distinct within an order",
                self.max_lines_per_order,
                self.products
            );
        }
        Ok(())
    }

    /// Return the configured seed, or pick a random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
