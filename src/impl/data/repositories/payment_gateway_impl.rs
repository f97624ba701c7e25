use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use chrono::Local;
use fractic_server_error::ServerError;

use crate::{
    domain::repositories::payment_gateway::{ChargeOutcome, PaymentGateway},
    entities::{PaymentData, Settlement, TransactionId},
    errors::ClockBeforeEpoch,
};

/// Decides whether a simulated charge goes through. Injectable so tests can
/// force either outcome instead of depending on clock entropy.
pub trait OutcomeDecider: Send + Sync {
    fn approve(&self) -> bool;
}

/// Default decider: approves ~90% of attempts, drawing entropy from the
/// system clock's subsecond nanos (no RNG dependency in this stack).
pub struct ClockOutcomeDecider;

impl OutcomeDecider for ClockOutcomeDecider {
    fn approve(&self) -> bool {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        nanos % 10 != 0
    }
}

/// Approves every attempt.
pub struct AlwaysApprove;

impl OutcomeDecider for AlwaysApprove {
    fn approve(&self) -> bool {
        true
    }
}

/// Declines every attempt.
pub struct AlwaysDecline;

impl OutcomeDecider for AlwaysDecline {
    fn approve(&self) -> bool {
        false
    }
}

/// Stand-in for a real processor: waits out a fixed settlement delay, then
/// resolves per the configured decider. No card-network validation happens
/// here; transaction ids are derived from the submission timestamp.
pub struct SimulatedGatewayImpl<D = ClockOutcomeDecider>
where
    D: OutcomeDecider,
{
    delay: Duration,
    decider: D,
}

impl SimulatedGatewayImpl {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(3),
            decider: ClockOutcomeDecider,
        }
    }
}

impl Default for SimulatedGatewayImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedGatewayImpl<AlwaysApprove> {
    /// Deterministic success, no delay. For tests and demos.
    pub fn always_approve() -> Self {
        Self {
            delay: Duration::ZERO,
            decider: AlwaysApprove,
        }
    }
}

impl SimulatedGatewayImpl<AlwaysDecline> {
    /// Deterministic failure, no delay. For tests and demos.
    pub fn always_decline() -> Self {
        Self {
            delay: Duration::ZERO,
            decider: AlwaysDecline,
        }
    }
}

impl<D: OutcomeDecider> SimulatedGatewayImpl<D> {
    pub fn with_decider(delay: Duration, decider: D) -> Self {
        Self { delay, decider }
    }
}

#[async_trait]
impl<D: OutcomeDecider> PaymentGateway for SimulatedGatewayImpl<D> {
    async fn charge(&self, _data: &PaymentData) -> Result<ChargeOutcome, ServerError> {
        tokio::time::sleep(self.delay).await;

        if !self.decider.approve() {
            return Ok(ChargeOutcome::Declined {
                message: "Payment failed. Please try again.".to_string(),
            });
        }

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| ClockBeforeEpoch::with_debug(&e))?
            .as_millis();
        Ok(ChargeOutcome::Approved(Settlement {
            transaction_id: TransactionId(format!("TXN{}", millis)),
            completed_on: Local::now().date_naive(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;
    use crate::entities::{MethodKind, PaymentMethod, PaymentType};

    fn data() -> PaymentData {
        PaymentData {
            amount: 500.0,
            currency: Currency::USD,
            method: PaymentMethod {
                id: "paypal".to_string(),
                kind: MethodKind::Paypal,
                name: "PayPal".to_string(),
                icon: "paypal".to_string(),
                description: "Pay with your PayPal account".to_string(),
            },
            card_details: None,
            billing_address: Default::default(),
            payment_type: PaymentType::Salary,
            teacher_id: None,
            description: "Monthly salary".to_string(),
        }
    }

    #[tokio::test]
    async fn approve_yields_timestamped_transaction_id() {
        let gateway = SimulatedGatewayImpl::always_approve();
        let ChargeOutcome::Approved(settlement) = gateway.charge(&data()).await.unwrap() else {
            panic!("expected an approval");
        };
        assert!(settlement.transaction_id.value().starts_with("TXN"));
        assert!(settlement.transaction_id.value().len() > 3);
    }

    #[tokio::test]
    async fn decline_is_an_outcome_with_a_message() {
        let gateway = SimulatedGatewayImpl::always_decline();
        let ChargeOutcome::Declined { message } = gateway.charge(&data()).await.unwrap() else {
            panic!("expected a decline");
        };
        assert!(!message.is_empty());
    }
}
