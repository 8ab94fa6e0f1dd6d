//! Eco Trend storefront core.
//!
//! Coordinates the four pieces of session state — catalog, cart, filters
//! and checkout status — and the two asynchronous integrations: the remote
//! catalog fetch and the simulated checkout pipeline.
//!
//! The [`Session`] is the single state value the rendering surface works
//! from: it applies user [`Intent`]s, derives the visible product list and
//! drives the checkout pipeline. [`view`] turns that state into markup;
//! the `eco` binary drives the same machinery from the terminal.

pub mod checkout;
pub mod config;
pub mod persist;
pub mod session;
pub mod view;

pub use checkout::{AutoApprove, CheckoutGate, CheckoutOutcome, CheckoutStatus};
pub use config::StorefrontConfig;
pub use persist::CartStore;
pub use session::{Intent, Session};
