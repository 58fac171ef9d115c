//! Session orchestration, configuration and observability setup.
//!
//! - [`OrderFlow`] owns the session's order state and moves it through the screens
//! - [`ShopConfig`] holds prices, currency and the share recipient
//! - [`setup_tracing`] initializes logging

pub mod config;
pub mod order_flow;
pub mod tracing;

pub use config::*;
pub use order_flow::*;
pub use self::tracing::*;
