//! Record types for the store schema and the phase order they are emitted in.

use std::fmt;

/// A `customer` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
}

/// A `product` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub description: String,
    /// External identifier (UUID string), unique across products
    pub sku: String,
}

/// An `"order"` row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: i64,
    pub description: String,
    pub customer_id: i64,
}

/// A `product_order` row linking one order to one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: Price,
}

/// A decimal price held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const fn from_cents(cents: i64) -> Self {
        Price(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        write!(f, "{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

/// Monotonic id accumulator owned by a generation loop.
///
/// Hands out 1, 2, 3, ... and never reuses a value.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: i64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Take the next id
    pub fn next_id(&mut self) -> i64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> i64 {
        self.next - 1
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// One table group in the fixed emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Customers,
    Products,
    Orders,
    OrderLines,
}

impl Phase {
    /// Emission order: every customer, then every product, then every order,
    /// then every order line grouped by ascending order id.
    pub const ALL: [Phase; 4] = [
        Phase::Customers,
        Phase::Products,
        Phase::Orders,
        Phase::OrderLines,
    ];

    /// Table name as written in SQL (already quoted where it is a keyword)
    pub fn table(&self) -> &'static str {
        match self {
            Phase::Customers => "customer",
            Phase::Products => "product",
            Phase::Orders => "\"order\"",
            Phase::OrderLines => "product_order",
        }
    }

    /// Column list, in insert order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Phase::Customers => &["id", "name"],
            Phase::Products => &["id", "description", "sku"],
            Phase::Orders => &["id", "description", "customer_id"],
            Phase::OrderLines => &["id", "order_id", "product_id", "quantity", "price"],
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Customers => write!(f, "customer"),
            Phase::Products => write!(f, "product"),
            Phase::Orders => write!(f, "order"),
            Phase::OrderLines => write!(f, "product_order"),
        }
    }
}

/// All generated records for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
    /// Grouped by ascending order id
    pub order_lines: Vec<OrderLine>,
}

impl Dataset {
    /// Number of rows in a phase
    pub fn row_count(&self, phase: Phase) -> usize {
        match phase {
            Phase::Customers => self.customers.len(),
            Phase::Products => self.products.len(),
            Phase::Orders => self.orders.len(),
            Phase::OrderLines => self.order_lines.len(),
        }
    }

    /// Total number of statements the dataset renders to
    pub fn total_rows(&self) -> usize {
        Phase::ALL.iter().map(|&phase| self.row_count(phase)).sum()
    }

    /// Order lines belonging to one order
    pub fn lines_for_order(&self, order_id: i64) -> impl Iterator<Item = &OrderLine> {
        self.order_lines
            .iter()
            .filter(move |line| line.order_id == order_id)
    }
}
