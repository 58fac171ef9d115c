use rust_decimal::{Decimal, RoundingStrategy};

/// Turns a raw price into display text.
pub trait PriceFormatter: Send + Sync {
    fn format(&self, amount: Decimal) -> String;
}

/// Symbol-prefixed currency with two fraction digits and comma grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    symbol: String,
}

impl CurrencyFormatter {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self { symbol: symbol.into() }
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::new("$")
    }
}

impl PriceFormatter for CurrencyFormatter {
    fn format(&self, amount: Decimal) -> String {
        let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(2);

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let digits = rounded.abs().to_string();
        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        format!("{sign}{}{}.{fraction}", self.symbol, group_thousands(whole))
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
