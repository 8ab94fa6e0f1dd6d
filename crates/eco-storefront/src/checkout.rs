//! Simulated checkout pipeline types.
//!
//! Checkout runs two strictly sequential stages — order validation, then
//! payment — each a timed suspension followed by a decision point. The
//! decision points live behind [`CheckoutGate`] so refusal paths stay
//! reachable even though the shipped gate, [`AutoApprove`], approves every
//! attempt.

use async_trait::async_trait;
use eco_commerce::{Cart, Money};

/// Message shown when checkout is attempted with an empty cart.
pub const MSG_EMPTY_CART: &str = "O carrinho está vazio!";
/// Message shown when order validation refuses the attempt.
pub const MSG_VALIDATION_FAILED: &str = "Erro na validação dos dados.";
/// Message shown when payment authorization refuses the attempt.
pub const MSG_PAYMENT_FAILED: &str = "Falha no processamento do pagamento.";
/// Message shown when the order goes through.
pub const MSG_SUCCESS: &str = "Pedido finalizado com sucesso!";

/// Outcome of a checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart had no items; nothing was attempted.
    EmptyCart,
    /// Another attempt was already in flight; nothing was touched.
    AlreadyInFlight,
    /// Order validation refused the attempt.
    ValidationFailed,
    /// Payment authorization refused the attempt.
    PaymentFailed,
    /// The order went through; cart and persisted value were cleared.
    Completed,
}

/// User-facing status of the checkout pipeline.
///
/// Reset at the start of every attempt; `loading` doubles as the mutual
/// exclusion for the finalize trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutStatus {
    /// True while an attempt is in flight.
    pub loading: bool,
    /// Last status or error message; empty when there is none.
    pub message: String,
}

/// Decision points of the checkout pipeline.
#[async_trait]
pub trait CheckoutGate: Send + Sync {
    /// Whether the order data is valid.
    async fn validate_order(&self, cart: &Cart) -> bool;

    /// Whether the payment is approved.
    async fn authorize_payment(&self, total: Money) -> bool;
}

/// Gate that approves every attempt.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoApprove;

#[async_trait]
impl CheckoutGate for AutoApprove {
    async fn validate_order(&self, _cart: &Cart) -> bool {
        true
    }

    async fn authorize_payment(&self, _total: Money) -> bool {
        true
    }
}
