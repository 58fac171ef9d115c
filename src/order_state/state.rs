use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::{debug, instrument, warn};

use crate::domain::{
    calculate_price, CurrencyFormatter, Order, OrderSummary, PickupOptions, PriceFormatter,
    PriceList,
};
use crate::order_state::events::Observer;
use crate::order_state::{ObserverId, OrderEvent};

/// Single source of truth for the order in progress.
///
/// Every screen of a session works against the same instance. Mutations
/// recompute the price where needed, then notify callback observers
/// synchronously in registration order and publish a fresh snapshot on the
/// watch channel.
pub struct OrderState {
    quantity: u32,
    flavor: String,
    date: String,
    price: Decimal,
    options: PickupOptions,
    prices: PriceList,
    formatter: Box<dyn PriceFormatter>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer_id: u64,
    snapshots: watch::Sender<Order>,
}

impl OrderState {
    /// A fresh order in its canonical empty state.
    pub fn with_pickup_options(options: PickupOptions) -> Self {
        let date = options.same_day().to_string();
        let prices = PriceList::default();
        let price = calculate_price(0, true, &prices);
        let (snapshots, _) = watch::channel(Order {
            quantity: 0,
            flavor: String::new(),
            date: date.clone(),
            price,
        });

        Self {
            quantity: 0,
            flavor: String::new(),
            date,
            price,
            options,
            prices,
            formatter: Box::new(CurrencyFormatter::default()),
            observers: Vec::new(),
            next_observer_id: 1,
            snapshots,
        }
    }

    pub fn with_price_list(mut self, prices: PriceList) -> Self {
        self.prices = prices;
        self.update_price();
        self.notify_price();
        self.publish();
        self
    }

    pub fn with_formatter(mut self, formatter: impl PriceFormatter + 'static) -> Self {
        self.formatter = Box::new(formatter);
        self.notify_price();
        self
    }

    // --- Observation ---

    /// Registers a callback invoked after every change, in registration order.
    pub fn subscribe(&mut self, observer: impl FnMut(&OrderEvent) + Send + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        self.observers.push((id, Box::new(observer)));
        debug!(observer_id = id.0, "Observer registered");
        id
    }

    /// Returns false if the observer was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        before != self.observers.len()
    }

    /// Receiver that always holds the latest snapshot.
    pub fn watch(&self) -> watch::Receiver<Order> {
        self.snapshots.subscribe()
    }

    // --- Mutations ---

    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, quantity: u32) {
        debug!("Setting quantity");
        self.quantity = quantity;
        self.update_price();
        self.notify(OrderEvent::QuantityChanged(quantity));
        self.notify_price();
        self.publish();
    }

    #[instrument(skip(self))]
    pub fn set_flavor(&mut self, flavor: &str) {
        debug!("Setting flavor");
        self.flavor = flavor.to_string();
        self.notify(OrderEvent::FlavorChanged(self.flavor.clone()));
        self.publish();
    }

    #[instrument(skip(self))]
    pub fn set_date(&mut self, date: &str) {
        debug!("Setting pickup date");
        if !self.options.contains(date) {
            warn!("Pickup date is not one of the offered options");
        }
        self.date = date.to_string();
        self.update_price();
        self.notify(OrderEvent::DateChanged(self.date.clone()));
        self.notify_price();
        self.publish();
    }

    /// Restores the canonical empty order: no cupcakes, no flavor, same-day pickup.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting order");
        self.quantity = 0;
        self.flavor.clear();
        self.date = self.options.same_day().to_string();
        self.update_price();

        self.notify(OrderEvent::QuantityChanged(self.quantity));
        self.notify(OrderEvent::FlavorChanged(String::new()));
        self.notify(OrderEvent::DateChanged(self.date.clone()));
        self.notify_price();
        self.publish();
    }

    // --- Queries ---

    pub fn has_no_flavor_set(&self) -> bool {
        self.flavor.is_empty()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn price_text(&self) -> String {
        self.formatter.format(self.price)
    }

    pub fn date_options(&self) -> &[String] {
        self.options.labels()
    }

    pub fn pickup_options(&self) -> &PickupOptions {
        &self.options
    }

    pub fn snapshot(&self) -> Order {
        Order {
            quantity: self.quantity,
            flavor: self.flavor.clone(),
            date: self.date.clone(),
            price: self.price,
        }
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            quantity: self.quantity,
            flavor: self.flavor.clone(),
            date: self.date.clone(),
            price: self.price_text(),
        }
    }

    // --- Internals ---

    fn update_price(&mut self) {
        let is_same_day = self.options.is_same_day(&self.date);
        self.price = calculate_price(self.quantity, is_same_day, &self.prices);
    }

    fn notify_price(&mut self) {
        let event = OrderEvent::PriceChanged {
            price: self.price,
            text: self.price_text(),
        };
        self.notify(event);
    }

    fn notify(&mut self, event: OrderEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }

    fn publish(&self) {
        self.snapshots.send_replace(self.snapshot());
    }
}
