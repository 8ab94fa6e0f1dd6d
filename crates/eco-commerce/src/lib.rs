//! Commerce domain types and logic for the Eco Trend storefront.
//!
//! This crate holds the pure, side-effect-free half of the storefront:
//!
//! - **Catalog**: products and the closed category set of the product feed
//! - **Money**: centavo-based BRL amounts with pt-BR formatting
//! - **Cart**: an ordered, position-addressed sequence of product copies
//! - **Filter**: category and price-band filtering of the catalog
//!
//! # Example
//!
//! ```rust
//! use eco_commerce::prelude::*;
//!
//! let catalog = vec![
//!     Product::new(1, "Caneca de bambu", Money::from_reais(49.9), Category::Casa),
//!     Product::new(2, "Camiseta orgânica", Money::from_reais(89.9), Category::Roupas),
//! ];
//!
//! let filter = FilterState {
//!     category: CategoryFilter::Only(Category::Casa),
//!     price_band: PriceBand::UpTo100,
//! };
//! let visible = filter_products(&catalog, &filter);
//! assert_eq!(visible.len(), 1);
//!
//! let mut cart = Cart::new();
//! cart.add(visible[0].clone());
//! assert_eq!(cart.total().display(), "R$ 49,90");
//! ```

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod money;

pub use cart::Cart;
pub use catalog::{Category, Product, ProductId};
pub use filter::{filter_products, CategoryFilter, FilterState, PriceBand};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::Cart;
    pub use crate::catalog::{Category, Product, ProductId};
    pub use crate::filter::{filter_products, CategoryFilter, FilterState, PriceBand};
    pub use crate::money::Money;
}
