pub mod classifier;
pub mod lifecycle;
