// Domain layer - Payload and chart models
pub mod chart;
pub mod error;
pub mod payload;
