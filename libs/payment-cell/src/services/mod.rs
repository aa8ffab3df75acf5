pub mod payment;
pub mod workflow;
