//! Synthetic seed data for the store schema.
//!
//! Generates deterministic, FK-consistent rows for `customer`, `product`,
//! `"order"` and `product_order`, and renders them as SQL inserts.
//!
//! # Example
//!
//! ```rust
//! use store_seed::{Generator, RenderOptions, VolumeConfig};
//!
//! let config = VolumeConfig {
//!     customers: 2,
//!     products: 3,
//!     orders: 1,
//!     max_lines_per_order: 3,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut gen = Generator::new(config).unwrap();
//! let data = gen.generate().unwrap();
//!
//! let sql = store_seed::render_to_string(&data, RenderOptions::default()).unwrap();
//! println!("{}", sql);
//! ```

pub mod config;
pub mod fake;
pub mod generator;
pub mod model;
pub mod sampler;
pub mod validate;
pub mod writer;

pub use config::VolumeConfig;
pub use generator::Generator;
pub use model::{Customer, Dataset, IdSequence, Order, OrderLine, Phase, Price, Product};
pub use sampler::{draw_distinct, sample_unique, SampleError, SamplerStrategy};
pub use validate::{validate, ValidationReport};
pub use writer::{render_to_string, HeaderInfo, RenderOptions, RenderStats, SqlWriter};
