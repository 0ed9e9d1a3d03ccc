//! Integrity checks for a generated [`Dataset`].
//!
//! Checks:
//! - ids of each table form the contiguous range `1..=count`
//! - SKUs are non-empty and unique
//! - order customer ids and line order/product ids reference existing rows
//! - every order has between 1 and K lines, with no repeated product
//! - order lines are grouped by ascending order id
//! - quantity and price stay in range

use crate::config::{VolumeConfig, PRICE_CENTS_RANGE, QUANTITY_RANGE};
use crate::model::{Dataset, Phase};
use ahash::{AHashMap, AHashSet};
use std::fmt;

/// Maximum number of issues to collect before stopping
const MAX_ISSUES: usize = 100;

/// A single integrity violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub phase: Phase,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// Outcome of validating a dataset
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub rows_checked: usize,
    pub issues: Vec<ValidationIssue>,
    pub truncated: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Turn the report into an error carrying the first issues found
    pub fn into_result(self) -> anyhow::Result<()> {
        if self.is_valid() {
            return Ok(());
        }
        let shown: Vec<String> = self.issues.iter().take(5).map(|i| i.to_string()).collect();
        anyhow::bail!(
            "generated data failed validation ({} issue{}{}):\n  {}",
            self.issues.len(),
            if self.issues.len() == 1 { "" } else { "s" },
            if self.truncated { ", truncated" } else { "" },
            shown.join("\n  ")
        )
    }

    fn push(&mut self, phase: Phase, message: String) {
        if self.issues.len() >= MAX_ISSUES {
            self.truncated = true;
            return;
        }
        self.issues.push(ValidationIssue { phase, message });
    }
}

/// Validate `dataset` against the volumes it was generated for
pub fn validate(dataset: &Dataset, config: &VolumeConfig) -> ValidationReport {
    let mut report = ValidationReport {
        rows_checked: dataset.total_rows(),
        ..Default::default()
    };

    check_contiguous(
        &mut report,
        Phase::Customers,
        dataset.customers.iter().map(|c| c.id),
        config.customers,
    );
    check_contiguous(
        &mut report,
        Phase::Products,
        dataset.products.iter().map(|p| p.id),
        config.products,
    );
    check_contiguous(
        &mut report,
        Phase::Orders,
        dataset.orders.iter().map(|o| o.id),
        config.orders,
    );

    let mut skus = AHashSet::with_capacity(dataset.products.len());
    for product in &dataset.products {
        if product.sku.is_empty() {
            report.push(
                Phase::Products,
                format!("product {} has an empty sku", product.id),
            );
        } else if !skus.insert(product.sku.as_str()) {
            report.push(
                Phase::Products,
                format!("product {} repeats sku {}", product.id, product.sku),
            );
        }
    }

    let customer_count = dataset.customers.len() as i64;
    for order in &dataset.orders {
        if !(1..=customer_count).contains(&order.customer_id) {
            report.push(
                Phase::Orders,
                format!(
                    "order {} references missing customer {}",
                    order.id, order.customer_id
                ),
            );
        }
    }

    check_order_lines(&mut report, dataset, config);
    report
}

fn check_contiguous(
    report: &mut ValidationReport,
    phase: Phase,
    ids: impl Iterator<Item = i64>,
    expected: usize,
) {
    let mut count = 0usize;
    for (index, id) in ids.enumerate() {
        count += 1;
        let want = index as i64 + 1;
        if id != want {
            report.push(phase, format!("expected id {} at position {}, found {}", want, index, id));
        }
    }
    if count != expected {
        report.push(phase, format!("expected {} rows, found {}", expected, count));
    }
}

fn check_order_lines(report: &mut ValidationReport, dataset: &Dataset, config: &VolumeConfig) {
    let phase = Phase::OrderLines;
    let order_count = dataset.orders.len() as i64;
    let product_count = dataset.products.len() as i64;

    let mut per_order: AHashMap<i64, AHashSet<i64>> = AHashMap::new();
    let mut previous_order = 0i64;

    for (index, line) in dataset.order_lines.iter().enumerate() {
        let want = index as i64 + 1;
        if line.id != want {
            report.push(phase, format!("expected line id {}, found {}", want, line.id));
        }
        if line.order_id < previous_order {
            report.push(
                phase,
                format!(
                    "line {} for order {} follows order {}",
                    line.id, line.order_id, previous_order
                ),
            );
        }
        previous_order = line.order_id;

        if !(1..=order_count).contains(&line.order_id) {
            report.push(
                phase,
                format!("line {} references missing order {}", line.id, line.order_id),
            );
        }
        if !(1..=product_count).contains(&line.product_id) {
            report.push(
                phase,
                format!(
                    "line {} references missing product {}",
                    line.id, line.product_id
                ),
            );
        }
        if !per_order
            .entry(line.order_id)
            .or_default()
            .insert(line.product_id)
        {
            report.push(
                phase,
                format!(
                    "order {} contains product {} more than once",
                    line.order_id, line.product_id
                ),
            );
        }
        if !(QUANTITY_RANGE.0..=QUANTITY_RANGE.1).contains(&line.quantity) {
            report.push(
                phase,
                format!("line {} has quantity {}", line.id, line.quantity),
            );
        }
        if !(PRICE_CENTS_RANGE.0..=PRICE_CENTS_RANGE.1).contains(&line.price.cents()) {
            report.push(phase, format!("line {} has price {}", line.id, line.price));
        }
    }

    for order in &dataset.orders {
        let lines = per_order.get(&order.id).map_or(0, |products| products.len());
        if lines == 0 || lines > config.max_lines_per_order {
            report.push(
                phase,
                format!(
                    "order {} has {} lines, expected 1..={}",
                    order.id, lines, config.max_lines_per_order
                ),
            );
        }
    }
}
