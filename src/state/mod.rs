//! Application state module

mod app_state;
mod cart;
mod currency;
mod debounce;
mod reducer;
mod registration;
mod validation;

pub use app_state::*;
pub use cart::ShoppingCart;
pub use currency::{Currency, CurrencyConverter};
pub use registration::{Field, FormState};
pub use validation::Outcome;
