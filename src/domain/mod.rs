pub mod order;
pub mod pickup;
pub mod pricing;
pub mod currency;

pub use order::*;
pub use pickup::*;
pub use pricing::*;
pub use currency::*;
