//! SQL rendering of a [`Dataset`].
//!
//! Statements are written one per line, in [`Phase::ALL`] order:
//!
//! ```sql
//! INSERT INTO customer (id, name) VALUES (1, 'Ada Lovelace');
//! INSERT INTO product (id, description, sku) VALUES (1, 'Rustic Steel Chair', '...');
//! INSERT INTO "order" (id, description, customer_id) VALUES (1, '...', 17);
//! INSERT INTO product_order (id, order_id, product_id, quantity, price) VALUES (1, 1, 42, 3, 57.10);
//! ```

use crate::config::VolumeConfig;
use crate::model::{Customer, Dataset, Order, OrderLine, Phase, Product};
use std::io::{BufWriter, Write};

pub const WRITER_BUFFER_SIZE: usize = 256 * 1024;

/// Progress callbacks fire every this many statements
const PROGRESS_INTERVAL: u64 = 1_000;

/// Quote a text value as a SQL string literal, doubling embedded quotes.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if c == '\'' {
            out.push('\'');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// What to put around the insert statements
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Leading comment block naming the seed and volumes
    pub header: Option<HeaderInfo>,
    /// Trailing `setval` calls so identity sequences start past the seeded ids
    pub reset_sequences: bool,
}

/// Provenance written into the header comment
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub seed: u64,
    pub config: VolumeConfig,
}

/// Counts from a render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Insert statements written, per phase, in phase order
    pub rows: Vec<(Phase, usize)>,
    /// All statements written, including sequence resets
    pub statements: u64,
}

impl RenderStats {
    pub fn rows_for(&self, phase: Phase) -> usize {
        self.rows
            .iter()
            .find(|(p, _)| *p == phase)
            .map_or(0, |(_, n)| *n)
    }
}

/// Writes a dataset as SQL to any output
pub struct SqlWriter<W: Write> {
    writer: BufWriter<W>,
    options: RenderOptions,
    statements: u64,
    progress_fn: Option<Box<dyn Fn(u64)>>,
}

impl<W: Write> SqlWriter<W> {
    pub fn new(output: W, options: RenderOptions) -> Self {
        Self {
            writer: BufWriter::with_capacity(WRITER_BUFFER_SIZE, output),
            options,
            statements: 0,
            progress_fn: None,
        }
    }

    /// Set a callback receiving the running statement count
    pub fn with_progress<F: Fn(u64) + 'static>(mut self, f: F) -> Self {
        self.progress_fn = Some(Box::new(f));
        self
    }

    /// Render every phase, then the optional sequence resets, and flush
    pub fn write_dataset(&mut self, dataset: &Dataset) -> std::io::Result<RenderStats> {
        if let Some(header) = self.options.header.clone() {
            self.write_header(&header)?;
        }

        let mut stats = RenderStats::default();
        for phase in Phase::ALL {
            let rows = match phase {
                Phase::Customers => self.write_rows(phase, &dataset.customers, customer_values)?,
                Phase::Products => self.write_rows(phase, &dataset.products, product_values)?,
                Phase::Orders => self.write_rows(phase, &dataset.orders, order_values)?,
                Phase::OrderLines => {
                    self.write_rows(phase, &dataset.order_lines, order_line_values)?
                }
            };
            stats.rows.push((phase, rows));
        }

        if self.options.reset_sequences {
            for phase in Phase::ALL {
                let max_id = dataset.row_count(phase);
                if max_id > 0 {
                    let stmt = format!(
                        "SELECT setval(pg_get_serial_sequence({}, 'id'), {});",
                        quote_literal(phase.table()),
                        max_id
                    );
                    self.write_statement(&stmt)?;
                }
            }
        }

        self.writer.flush()?;
        if let Some(ref cb) = self.progress_fn {
            cb(self.statements);
        }
        stats.statements = self.statements;
        Ok(stats)
    }

    /// Unwrap the underlying output
    pub fn into_inner(self) -> std::io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }

    fn write_header(&mut self, header: &HeaderInfo) -> std::io::Result<()> {
        let config = &header.config;
        writeln!(self.writer, "-- store-seed")?;
        writeln!(self.writer, "-- seed: {}", header.seed)?;
        writeln!(
            self.writer,
            "-- customers: {}, products: {}, orders: {}, max lines per order: {}",
            config.customers, config.products, config.orders, config.max_lines_per_order
        )?;
        writeln!(self.writer, "-- sampler: {}", config.strategy)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_rows<T>(
        &mut self,
        phase: Phase,
        rows: &[T],
        values: fn(&T) -> String,
    ) -> std::io::Result<usize> {
        let prefix = format!(
            "INSERT INTO {} ({}) VALUES (",
            phase.table(),
            phase.columns().join(", ")
        );
        for row in rows {
            self.writer.write_all(prefix.as_bytes())?;
            self.writer.write_all(values(row).as_bytes())?;
            self.writer.write_all(b");\n")?;
            self.bump()?;
        }
        Ok(rows.len())
    }

    fn write_statement(&mut self, stmt: &str) -> std::io::Result<()> {
        self.writer.write_all(stmt.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.bump()
    }

    fn bump(&mut self) -> std::io::Result<()> {
        self.statements += 1;
        if self.statements % PROGRESS_INTERVAL == 0 {
            if let Some(ref cb) = self.progress_fn {
                cb(self.statements);
            }
        }
        Ok(())
    }
}

fn customer_values(c: &Customer) -> String {
    format!("{}, {}", c.id, quote_literal(&c.name))
}

fn product_values(p: &Product) -> String {
    format!(
        "{}, {}, {}",
        p.id,
        quote_literal(&p.description),
        quote_literal(&p.sku)
    )
}

fn order_values(o: &Order) -> String {
    format!(
        "{}, {}, {}",
        o.id,
        quote_literal(&o.description),
        o.customer_id
    )
}

fn order_line_values(l: &OrderLine) -> String {
    format!(
        "{}, {}, {}, {}, {}",
        l.id, l.order_id, l.product_id, l.quantity, l.price
    )
}

/// Render a dataset to a string
pub fn render_to_string(dataset: &Dataset, options: RenderOptions) -> std::io::Result<String> {
    let mut writer = SqlWriter::new(Vec::new(), options);
    writer.write_dataset(dataset)?;
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Price;

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("plain"), "'plain'");
        assert_eq!(quote_literal("O'Hara"), "'O''Hara'");
        assert_eq!(quote_literal(""), "''");
    }

    #[test]
    fn test_order_line_values() {
        let line = OrderLine {
            id: 7,
            order_id: 2,
            product_id: 42,
            quantity: 3,
            price: Price::from_cents(5710),
        };
        assert_eq!(order_line_values(&line), "7, 2, 42, 3, 57.10");
    }

    #[test]
    fn test_order_table_is_quoted() {
        let dataset = Dataset {
            customers: vec![Customer {
                id: 1,
                name: "Ada".to_string(),
            }],
            orders: vec![Order {
                id: 1,
                description: "Desc".to_string(),
                customer_id: 1,
            }],
            ..Default::default()
        };
        let sql = render_to_string(&dataset, RenderOptions::default()).unwrap();
        assert!(sql.contains(
            "INSERT INTO \"order\" (id, description, customer_id) VALUES (1, 'Desc', 1);"
        ));
    }

    #[test]
    fn test_reset_sequences_skips_empty_tables() {
        let dataset = Dataset {
            customers: vec![Customer {
                id: 1,
                name: "Ada".to_string(),
            }],
            ..Default::default()
        };
        let options = RenderOptions {
            reset_sequences: true,
            ..Default::default()
        };
        let sql = render_to_string(&dataset, options).unwrap();
        assert!(sql.contains("SELECT setval(pg_get_serial_sequence('customer', 'id'), 1);"));
        assert!(!sql.contains("'product'"));
    }
}
