//! Record definitions
//!
//! One shoe's inventory entry.

use std::fmt;

/// A single shoe in the inventory
///
/// `country`, `code` and `product` identify the shoe and are only replaced
/// wholesale; `quantity` changes through restocking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub country: String,
    pub code: String,
    pub product: String,

    /// Unit cost, whole currency units
    pub cost: u64,

    /// Units in stock
    pub quantity: u64,
}

impl Record {
    /// Create a new record
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: u64,
        quantity: u64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// Stock value of this item (cost x quantity)
    pub fn value(&self) -> u64 {
        self.cost.saturating_mul(self.quantity)
    }
}

/// Multi-line card used by search, restock and on-sale output
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Country:    {}", self.country)?;
        writeln!(f, "Code:       {}", self.code)?;
        writeln!(f, "Product:    {}", self.product)?;
        writeln!(f, "Cost:       {}", self.cost)?;
        write!(f, "Quantity:   {}", self.quantity)
    }
}
