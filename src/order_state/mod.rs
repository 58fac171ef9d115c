//! The shared, observable state of the order being built.
//!
//! - [`OrderState`] holds quantity, flavor, pickup date and the derived price
//! - [`OrderEvent`] is what observers receive after every mutation

pub mod events;
pub mod state;

pub use events::*;
pub use state::*;
