use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{PaymentData, Settlement};

/// Processor response for one charge attempt. A decline is a normal,
/// user-recoverable outcome; only infrastructure faults use the error
/// channel.
#[derive(Debug, Clone)]
pub enum ChargeOutcome {
    Approved(Settlement),
    Declined { message: String },
}

/// Settlement channel for one assembled payment.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, data: &PaymentData) -> Result<ChargeOutcome, ServerError>;
}
