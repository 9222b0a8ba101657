//! Payment gateway used to gate registrations for paid events
//!
//! Only a simulated gateway exists: it waits a fixed delay and approves.

use async_trait::async_trait;
use std::time::Duration;

/// Payment methods offered in the payment dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [Self::Card, Self::Upi, Self::NetBanking];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Upi => "UPI/Wallet",
            Self::NetBanking => "Net Banking",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            Self::Card => "Visa, Mastercard, Amex",
            Self::Upi => "Google Pay, PayTM, etc.",
            Self::NetBanking => "All major banks",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Card => Self::Upi,
            Self::Upi => Self::NetBanking,
            Self::NetBanking => Self::Card,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Card => Self::NetBanking,
            Self::Upi => Self::Card,
            Self::NetBanking => Self::Upi,
        }
    }
}

/// Result reported by a payment gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Approved,
    Declined(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Charge `amount` using `method`
    async fn charge(&self, amount: f64, method: PaymentMethod) -> PaymentOutcome;
}

/// Gateway that approves every charge after a fixed delay
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    delay: Duration,
}

impl SimulatedGateway {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn charge(&self, amount: f64, method: PaymentMethod) -> PaymentOutcome {
        tracing::info!(amount, method = method.label(), "simulating payment");
        tokio::time::sleep(self.delay).await;
        PaymentOutcome::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_method_cycle() {
        let mut method = PaymentMethod::default();
        for _ in 0..PaymentMethod::ALL.len() {
            method = method.next();
        }
        assert_eq!(method, PaymentMethod::Card);
        assert_eq!(PaymentMethod::Card.prev(), PaymentMethod::NetBanking);
        assert_eq!(PaymentMethod::Upi.prev(), PaymentMethod::Card);
    }

    #[test]
    fn test_method_labels() {
        let labels: Vec<_> = PaymentMethod::ALL.iter().map(|m| m.label()).collect();
        assert_eq!(labels, vec!["Credit/Debit Card", "UPI/Wallet", "Net Banking"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_gateway_waits_then_approves() {
        let gateway = SimulatedGateway::default();
        let started = tokio::time::Instant::now();
        let outcome = gateway.charge(499.0, PaymentMethod::Upi).await;
        assert_eq!(outcome, PaymentOutcome::Approved);
        assert!(started.elapsed() >= SimulatedGateway::DEFAULT_DELAY);
    }
}
