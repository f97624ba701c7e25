use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::repositories::payment_gateway_impl::SimulatedGatewayImpl,
    domain::repositories::payment_gateway::{ChargeOutcome, PaymentGateway},
    entities::{PaymentData, WizardOutcome},
};

/// Drives the terminal wizard transition: hand the assembled payment to the
/// gateway and fold the response into a [`WizardOutcome`]. A decline is a
/// normal outcome here, not an error; only non-payment faults propagate.
#[async_trait]
pub trait CheckoutUsecase: Send + Sync {
    async fn submit(&self, data: PaymentData) -> Result<WizardOutcome, ServerError>;
}

pub(crate) struct CheckoutUsecaseImpl<
    G = SimulatedGatewayImpl, // Default.
> where
    G: PaymentGateway,
{
    gateway: G,
}

#[async_trait]
impl<G> CheckoutUsecase for CheckoutUsecaseImpl<G>
where
    G: PaymentGateway,
{
    async fn submit(&self, data: PaymentData) -> Result<WizardOutcome, ServerError> {
        match self.gateway.charge(&data).await? {
            ChargeOutcome::Approved(settlement) => Ok(WizardOutcome::Approved { settlement, data }),
            ChargeOutcome::Declined { message } => Ok(WizardOutcome::Declined { message }),
        }
    }
}

impl CheckoutUsecaseImpl {
    pub(crate) fn new() -> Self {
        CheckoutUsecaseImpl {
            gateway: SimulatedGatewayImpl::new(),
        }
    }
}

impl<G: PaymentGateway> CheckoutUsecaseImpl<G> {
    pub(crate) fn with_gateway(gateway: G) -> Self {
        CheckoutUsecaseImpl { gateway }
    }
}
