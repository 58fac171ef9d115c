use std::fmt;

use rust_decimal::Decimal;

/// Point-in-time view of the order being built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub quantity: u32,
    pub flavor: String,
    pub date: String,
    pub price: Decimal,
}

/// Read-only handoff produced when the order is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub quantity: u32,
    pub flavor: String,
    pub date: String,
    pub price: String,
}

impl OrderSummary {
    /// Plain-text order details sent to the shop.
    pub fn body(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for OrderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quantity: {}", cupcakes(self.quantity))?;
        writeln!(f, "Flavor: {}", self.flavor)?;
        writeln!(f, "Pickup date: {}", self.date)?;
        write!(f, "Total: {}", self.price)
    }
}

fn cupcakes(quantity: u32) -> String {
    match quantity {
        1 => "1 cupcake".to_string(),
        n => format!("{n} cupcakes"),
    }
}
