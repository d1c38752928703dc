pub mod encoder;
pub mod feature_registry;
pub mod metrics;
pub mod scaler;

pub use encoder::{CategoryEncoder, CategoryEncoders, EncodedCategories};
pub use feature_registry::{FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
pub use metrics::RegressionMetrics;
pub use scaler::StandardScaler;
