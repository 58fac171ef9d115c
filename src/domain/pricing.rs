use rust_decimal::Decimal;

/// Price of a single cupcake.
pub const PRICE_PER_CUPCAKE: Decimal = Decimal::from_parts(200, 0, 0, false, 2);

/// Surcharge for picking the order up on the day it was placed.
pub const SAME_DAY_PICKUP_FEE: Decimal = Decimal::from_parts(300, 0, 0, false, 2);

/// The amounts used to derive an order's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceList {
    pub per_unit: Decimal,
    pub same_day_fee: Decimal,
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            per_unit: PRICE_PER_CUPCAKE,
            same_day_fee: SAME_DAY_PICKUP_FEE,
        }
    }
}

/// Derives the order price from its quantity and whether pickup is same-day.
pub fn calculate_price(quantity: u32, is_same_day: bool, prices: &PriceList) -> Decimal {
    let mut price = Decimal::from(quantity) * prices.per_unit;
    if is_same_day {
        price += prices.same_day_fee;
    }
    price
}
