//! DutyClock port - how long a decision-maker has been on duty.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait DutyClock: Send + Sync {
    /// Minutes the decision-maker has been on duty.
    async fn time_on_duty(&self, decision_maker_id: &str) -> Result<u32, DomainError>;
}
