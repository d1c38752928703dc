// Vehicle records, field rules and the dropdown catalog
pub mod vehicle;

// Encoders, feature layout, scaling and metrics
pub mod ml;

// Domain-specific error types
pub mod errors;
