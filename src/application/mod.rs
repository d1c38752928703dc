pub mod context;
pub mod ml;
pub mod pricing;
pub mod training;
