//! Data generator that produces the rows for all four store tables.
//!
//! Generation is deterministic for a given seed and [`VolumeConfig`].
//! Structural draws (foreign keys, line counts, product ids, quantities,
//! prices) and text draws (names, descriptions, SKUs) use separate RNG
//! streams derived from the seed.

use crate::config::{VolumeConfig, PRICE_CENTS_RANGE, QUANTITY_RANGE};
use crate::fake::FakeData;
use crate::model::{Customer, Dataset, IdSequence, Order, OrderLine, Price, Product};
use crate::sampler::draw_distinct;
use ahash::AHashSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Main data generator
pub struct Generator {
    config: VolumeConfig,
    seed: u64,
    rng: ChaCha8Rng,
    fake: FakeData<ChaCha8Rng>,
}

impl Generator {
    /// Create a generator, validating the configuration first.
    ///
    /// If the configuration carries no seed, one is picked at random and
    /// is available through [`Generator::seed`].
    pub fn new(config: VolumeConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let seed = config.resolve_seed();
        let rng = ChaCha8Rng::seed_from_u64(seed);
        let fake_rng = ChaCha8Rng::seed_from_u64(seed.wrapping_add(1));
        Ok(Self {
            config,
            seed,
            rng,
            fake: FakeData::new(fake_rng),
        })
    }

    /// Seed this generator was built from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &VolumeConfig {
        &self.config
    }

    /// Generate every table, in phase order
    pub fn generate(&mut self) -> anyhow::Result<Dataset> {
        let customers = self.generate_customers();
        let products = self.generate_products();
        let orders = self.generate_orders();

        let mut line_ids = IdSequence::new();
        let mut order_lines = Vec::with_capacity(orders.len() * self.config.max_lines_per_order);
        for order in &orders {
            self.generate_order_lines(order.id, &mut line_ids, &mut order_lines)?;
        }

        Ok(Dataset {
            customers,
            products,
            orders,
            order_lines,
        })
    }

    fn generate_customers(&mut self) -> Vec<Customer> {
        (1..=self.config.customers as i64)
            .map(|id| Customer {
                id,
                name: self.fake.full_name(),
            })
            .collect()
    }

    fn generate_products(&mut self) -> Vec<Product> {
        let mut seen_skus = AHashSet::with_capacity(self.config.products);
        (1..=self.config.products as i64)
            .map(|id| {
                let description = self.fake.product_name();
                let mut sku = self.fake.sku();
                while !seen_skus.insert(sku.clone()) {
                    sku = self.fake.sku();
                }
                Product {
                    id,
                    description,
                    sku,
                }
            })
            .collect()
    }

    fn generate_orders(&mut self) -> Vec<Order> {
        let customers = self.config.customers as i64;
        (1..=self.config.orders as i64)
            .map(|id| {
                let description = self.fake.product_description();
                let customer_id = self.rng.random_range(1..=customers);
                Order {
                    id,
                    description,
                    customer_id,
                }
            })
            .collect()
    }

    /// Append 1..=K lines for one order, taking line ids from `line_ids`.
    fn generate_order_lines(
        &mut self,
        order_id: i64,
        line_ids: &mut IdSequence,
        out: &mut Vec<OrderLine>,
    ) -> anyhow::Result<()> {
        let line_count = self.rng.random_range(1..=self.config.max_lines_per_order);
        let product_ids = draw_distinct(
            &mut self.rng,
            self.config.products as i64,
            line_count,
            self.config.strategy,
        )?;

        for product_id in product_ids {
            let quantity = self.rng.random_range(QUANTITY_RANGE.0..=QUANTITY_RANGE.1);
            let cents = self
                .rng
                .random_range(PRICE_CENTS_RANGE.0..=PRICE_CENTS_RANGE.1);
            out.push(OrderLine {
                id: line_ids.next_id(),
                order_id,
                product_id,
                quantity,
                price: Price::from_cents(cents),
            });
        }
        Ok(())
    }
}
