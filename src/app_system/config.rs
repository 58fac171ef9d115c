use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::PriceList;
use crate::error::ConfigError;

pub const DEFAULT_RECIPIENT: &str = "cupcakes@example.com";
pub const DEFAULT_SUBJECT: &str = "New Cupcake Order";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Shop settings for one running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopConfig {
    pub price_list: PriceList,
    pub recipient: String,
    pub subject: String,
    pub currency_symbol: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            price_list: PriceList::default(),
            recipient: DEFAULT_RECIPIENT.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

impl ShopConfig {
    /// Defaults overridden by `CUPCAKE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(recipient) = lookup("CUPCAKE_ORDER_EMAIL") {
            config.recipient = recipient;
        }
        if let Some(subject) = lookup("CUPCAKE_ORDER_SUBJECT") {
            config.subject = subject;
        }
        if let Some(symbol) = lookup("CUPCAKE_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }
        if let Some(amount) = lookup("CUPCAKE_PRICE_PER_UNIT") {
            config.price_list.per_unit = parse_amount("CUPCAKE_PRICE_PER_UNIT", &amount)?;
        }
        if let Some(amount) = lookup("CUPCAKE_SAME_DAY_FEE") {
            config.price_list.same_day_fee = parse_amount("CUPCAKE_SAME_DAY_FEE", &amount)?;
        }

        Ok(config)
    }
}

fn parse_amount(var: &str, value: &str) -> Result<Decimal, ConfigError> {
    let invalid = || ConfigError::InvalidAmount {
        var: var.to_string(),
        value: value.to_string(),
    };
    let amount = Decimal::from_str(value.trim()).map_err(|_| invalid())?;
    if amount.is_sign_negative() {
        return Err(invalid());
    }
    Ok(amount)
}
