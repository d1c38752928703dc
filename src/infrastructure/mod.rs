pub mod artifact_store;
pub mod dataset;

pub use artifact_store::ArtifactStore;
