use tracing::{info, instrument, warn};

use crate::clients::{OrderShare, ShareRequest};
use crate::domain::{CurrencyFormatter, PickupOptions};
use crate::error::FlowError;
use crate::order_state::OrderState;
use crate::app_system::ShopConfig;

/// Quantities offered on the start screen.
pub const QUANTITY_CHOICES: [u32; 3] = [1, 6, 12];

/// Screens of the linear order flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Flavor,
    Pickup,
    Summary,
}

/// Drives one session through start → flavor → pickup → summary.
///
/// Owns the session's `OrderState`; screens read and write it through
/// [`OrderFlow::order`] and [`OrderFlow::order_mut`]. The same state is reset
/// and reused when an order is sent or cancelled.
pub struct OrderFlow<S: OrderShare> {
    order: OrderState,
    screen: Screen,
    share: S,
    config: ShopConfig,
}

impl<S: OrderShare> OrderFlow<S> {
    #[instrument(name = "order_flow", skip(config, share))]
    pub fn new(config: ShopConfig, share: S) -> Result<Self, FlowError> {
        let options = PickupOptions::today()?;
        Ok(Self::with_pickup_options(config, share, options))
    }

    pub fn with_pickup_options(config: ShopConfig, share: S, options: PickupOptions) -> Self {
        let order = OrderState::with_pickup_options(options)
            .with_price_list(config.price_list)
            .with_formatter(CurrencyFormatter::new(config.currency_symbol.clone()));

        info!(first_pickup = %order.date(), "Order flow started");

        Self {
            order,
            screen: Screen::Start,
            share,
            config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn order(&self) -> &OrderState {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut OrderState {
        &mut self.order
    }

    pub fn share_target(&self) -> &S {
        &self.share
    }

    /// Picks the quantity on the start screen and moves to flavor selection.
    #[instrument(skip(self))]
    pub fn start_order(&mut self, quantity: u32) -> Result<(), FlowError> {
        self.expect_screen(Screen::Start)?;
        self.order.set_quantity(quantity);
        self.go_to(Screen::Flavor);
        Ok(())
    }

    /// Advances to the next screen. Leaving flavor selection requires a flavor.
    #[instrument(skip(self))]
    pub fn next(&mut self) -> Result<Screen, FlowError> {
        let next = match self.screen {
            Screen::Flavor => {
                if self.order.has_no_flavor_set() {
                    warn!("Cannot continue without a flavor");
                    return Err(FlowError::NoFlavorSelected);
                }
                Screen::Pickup
            }
            Screen::Pickup => Screen::Summary,
            Screen::Start => {
                return Err(FlowError::WrongScreen {
                    expected: Screen::Flavor,
                    actual: Screen::Start,
                })
            }
            Screen::Summary => return Err(FlowError::EndOfFlow),
        };
        self.go_to(next);
        Ok(next)
    }

    /// Returns to the previous screen, keeping the order as it is.
    #[instrument(skip(self))]
    pub fn back(&mut self) -> Result<Screen, FlowError> {
        let previous = match self.screen {
            Screen::Summary => Screen::Pickup,
            Screen::Pickup => Screen::Flavor,
            Screen::Flavor => Screen::Start,
            Screen::Start => {
                return Err(FlowError::WrongScreen {
                    expected: Screen::Flavor,
                    actual: Screen::Start,
                })
            }
        };
        self.go_to(previous);
        Ok(previous)
    }

    /// Drops the order in progress and returns to the start screen.
    #[instrument(skip(self))]
    pub fn cancel(&mut self) {
        info!(screen = ?self.screen, "Order cancelled");
        self.order.reset();
        self.go_to(Screen::Start);
    }

    /// Shares the summary with the shop, then starts over.
    ///
    /// On failure the order and screen are left untouched.
    #[instrument(skip(self))]
    pub fn send_order(&mut self) -> Result<ShareRequest, FlowError> {
        self.expect_screen(Screen::Summary)?;

        let request = ShareRequest {
            recipient: self.config.recipient.clone(),
            subject: self.config.subject.clone(),
            body: self.order.summary().body(),
        };

        if let Err(e) = self.share.share(&request) {
            warn!(error = %e, "Order could not be shared");
            return Err(e.into());
        }

        info!(quantity = self.order.quantity(), total = %self.order.price_text(), "Order sent");
        self.order.reset();
        self.go_to(Screen::Start);
        Ok(request)
    }

    fn expect_screen(&self, expected: Screen) -> Result<(), FlowError> {
        if self.screen == expected {
            Ok(())
        } else {
            Err(FlowError::WrongScreen {
                expected,
                actual: self.screen,
            })
        }
    }

    fn go_to(&mut self, screen: Screen) {
        info!(from = ?self.screen, to = ?screen, "Navigating");
        self.screen = screen;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShareError;
    use crate::mock_framework::{FailingShare, RecordingShare};
    use chrono::NaiveDate;

    fn flow<S: OrderShare>(share: S) -> OrderFlow<S> {
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        OrderFlow::with_pickup_options(ShopConfig::default(), share, PickupOptions::starting_on(today).unwrap())
    }

    #[test]
    fn test_start_order_sets_quantity() {
        let mut flow = flow(RecordingShare::default());
        flow.start_order(QUANTITY_CHOICES[2]).unwrap();
        assert_eq!(flow.screen(), Screen::Flavor);
        assert_eq!(flow.order().quantity(), 12);
        assert_eq!(flow.order().price_text(), "$27.00");
    }

    #[test]
    fn test_flavor_required_to_continue() {
        let mut flow = flow(RecordingShare::default());
        flow.start_order(6).unwrap();
        assert_eq!(flow.next(), Err(FlowError::NoFlavorSelected));
        assert_eq!(flow.screen(), Screen::Flavor);

        flow.order_mut().set_flavor("Vanilla");
        assert_eq!(flow.next(), Ok(Screen::Pickup));
        assert_eq!(flow.next(), Ok(Screen::Summary));
    }

    #[test]
    fn test_wrong_screen() {
        let mut flow = flow(RecordingShare::default());
        assert_eq!(
            flow.next(),
            Err(FlowError::WrongScreen { expected: Screen::Flavor, actual: Screen::Start })
        );
        assert_eq!(
            flow.send_order(),
            Err(FlowError::WrongScreen { expected: Screen::Summary, actual: Screen::Start })
        );
        flow.start_order(1).unwrap();
        assert_eq!(
            flow.start_order(1),
            Err(FlowError::WrongScreen { expected: Screen::Start, actual: Screen::Flavor })
        );
    }

    #[test]
    fn test_next_on_summary_is_end_of_flow() {
        let mut flow = flow(RecordingShare::default());
        flow.start_order(1).unwrap();
        flow.order_mut().set_flavor("Vanilla");
        flow.next().unwrap();
        flow.next().unwrap();
        assert_eq!(flow.next(), Err(FlowError::EndOfFlow));
        assert_eq!(flow.screen(), Screen::Summary);
    }

    #[test]
    fn test_back_walks_to_start_keeping_order() {
        let mut flow = flow(RecordingShare::default());
        flow.start_order(6).unwrap();
        flow.order_mut().set_flavor("Chocolate");
        flow.next().unwrap();
        flow.next().unwrap();

        assert_eq!(flow.back(), Ok(Screen::Pickup));
        assert_eq!(flow.back(), Ok(Screen::Flavor));
        assert_eq!(flow.back(), Ok(Screen::Start));
        assert_eq!(
            flow.back(),
            Err(FlowError::WrongScreen { expected: Screen::Flavor, actual: Screen::Start })
        );
        assert_eq!(flow.order().quantity(), 6);
        assert_eq!(flow.order().flavor(), "Chocolate");
    }

    #[test]
    fn test_back_from_summary_to_change_date() {
        let share = RecordingShare::default();
        let mut flow = flow(share.clone());
        flow.start_order(12).unwrap();
        flow.order_mut().set_flavor("Vanilla");
        flow.next().unwrap();
        flow.next().unwrap();
        assert_eq!(flow.order().price_text(), "$27.00");

        assert_eq!(flow.back(), Ok(Screen::Pickup));
        let later = flow.order().date_options()[3].clone();
        flow.order_mut().set_date(&later);
        assert_eq!(flow.order().price_text(), "$24.00");
        assert_eq!(flow.next(), Ok(Screen::Summary));

        let request = flow.send_order().unwrap();
        assert_eq!(
            request.body,
            "Quantity: 12 cupcakes\nFlavor: Vanilla\nPickup date: Tue Oct 20\nTotal: $24.00"
        );
        assert_eq!(share.requests(), vec![request]);
    }

    #[test]
    fn test_cancel_resets_from_any_screen() {
        let mut flow = flow(RecordingShare::default());
        flow.start_order(6).unwrap();
        flow.order_mut().set_flavor("Chocolate");
        flow.next().unwrap();
        flow.cancel();

        assert_eq!(flow.screen(), Screen::Start);
        assert_eq!(flow.order().quantity(), 0);
        assert!(flow.order().has_no_flavor_set());
        assert_eq!(flow.order().price_text(), "$3.00");
    }

    #[test]
    fn test_share_failure_keeps_order() {
        let mut flow = flow(FailingShare(ShareError::NoHandler));
        flow.start_order(1).unwrap();
        flow.order_mut().set_flavor("Lemon");
        flow.next().unwrap();
        flow.next().unwrap();

        assert_eq!(flow.send_order(), Err(FlowError::Share(ShareError::NoHandler)));
        assert_eq!(flow.screen(), Screen::Summary);
        assert_eq!(flow.order().flavor(), "Lemon");
    }

    #[test]
    fn test_config_drives_prices() {
        let mut config = ShopConfig::default();
        config.currency_symbol = "€".to_string();
        config.price_list.same_day_fee = rust_decimal::Decimal::ZERO;
        let today = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let mut flow = OrderFlow::with_pickup_options(
            config,
            RecordingShare::default(),
            PickupOptions::starting_on(today).unwrap(),
        );
        flow.start_order(6).unwrap();
        assert_eq!(flow.order().price_text(), "€12.00");
    }
}
