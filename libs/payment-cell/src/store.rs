use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::models::{Payment, PaymentError, PaymentStatus};

/// Persistence seam for simulated payments, keyed by the caller-chosen
/// payment id.
#[async_trait]
pub trait PaymentStore: Send + Sync {
    async fn insert(&self, payment: Payment) -> Result<Payment, PaymentError>;
    async fn find(&self, payment_id: &str) -> Option<Payment>;
    async fn update_status(
        &self,
        payment_id: &str,
        status: PaymentStatus,
    ) -> Result<Payment, PaymentError>;
}

pub struct MemoryPaymentStore {
    payments: RwLock<Vec<Payment>>,
}

impl MemoryPaymentStore {
    pub fn new() -> Self {
        Self {
            payments: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryPaymentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentStore for MemoryPaymentStore {
    async fn insert(&self, payment: Payment) -> Result<Payment, PaymentError> {
        let mut payments = self.payments.write().await;
        if payments.iter().any(|p| p.payment_id == payment.payment_id) {
            return Err(PaymentError::DuplicateId);
        }

        payments.push(payment.clone());
        Ok(payment)
    }

    async fn find(&self, payment_id: &str) -> Option<Payment> {
        self.payments
            .read()
            .await
            .iter()
            .find(|p| p.payment_id == payment_id)
            .cloned()
    }

    async fn update_status(
        &self,
        payment_id: &str,
        status: PaymentStatus,
    ) -> Result<Payment, PaymentError> {
        let mut payments = self.payments.write().await;
        let payment = payments
            .iter_mut()
            .find(|p| p.payment_id == payment_id)
            .ok_or(PaymentError::NotFound)?;

        payment.status = status;
        payment.updated_at = Utc::now();
        Ok(payment.clone())
    }
}
