pub mod artifacts;
pub mod predictor;
pub mod smartcore_predictor;

pub use artifacts::{ArtifactManifest, ModelArtifacts};
pub use predictor::PriceModel;
pub use smartcore_predictor::LinearPriceModel;
