use rust_decimal::Decimal;

/// Change notification delivered to observers after a mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderEvent {
    QuantityChanged(u32),
    FlavorChanged(String),
    DateChanged(String),
    /// Carries both the raw amount and its display text.
    PriceChanged { price: Decimal, text: String },
}

/// Handle returned by `OrderState::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

pub(crate) type Observer = Box<dyn FnMut(&OrderEvent) + Send>;
