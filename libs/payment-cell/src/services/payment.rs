use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::models::{
    CreatePaymentRequest, Payment, PaymentAppointmentData, PaymentError, PaymentStatus,
};
use crate::store::PaymentStore;

pub struct PaymentService {
    store: Arc<dyn PaymentStore>,
}

impl PaymentService {
    pub fn new(store: Arc<dyn PaymentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreatePaymentRequest) -> Result<Payment, PaymentError> {
        self.create_pending(request.payment_id, request.appointment_data)
            .await
    }

    pub async fn create_pending(
        &self,
        payment_id: String,
        appointment_data: PaymentAppointmentData,
    ) -> Result<Payment, PaymentError> {
        let now = Utc::now();
        let payment = Payment {
            payment_id,
            appointment_data,
            status: PaymentStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        let stored = self.store.insert(payment).await?;
        info!("Payment {} created (pending)", stored.payment_id);
        Ok(stored)
    }

    pub async fn get(&self, payment_id: &str) -> Result<Payment, PaymentError> {
        self.store
            .find(payment_id)
            .await
            .ok_or(PaymentError::NotFound)
    }

    pub async fn update_status(
        &self,
        payment_id: &str,
        status: PaymentStatus,
    ) -> Result<Payment, PaymentError> {
        let payment = self.store.update_status(payment_id, status).await?;
        info!("Payment {} is now {}", payment.payment_id, payment.status);
        Ok(payment)
    }

    pub async fn confirm(&self, payment_id: &str) -> Result<Payment, PaymentError> {
        self.update_status(payment_id, PaymentStatus::Completed).await
    }

    pub async fn cancel(&self, payment_id: &str) -> Result<Payment, PaymentError> {
        self.update_status(payment_id, PaymentStatus::Cancelled).await
    }
}
