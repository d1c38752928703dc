//! Dataset and artifact location configuration.

use std::env;
use std::path::PathBuf;

/// Data environment configuration
#[derive(Debug, Clone)]
pub struct DataEnvConfig {
    pub artifacts_dir: PathBuf,
    pub train_data_path: PathBuf,
    pub test_data_path: PathBuf,
}

impl Default for DataEnvConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("artifacts"),
            train_data_path: PathBuf::from("Data/train-data.csv"),
            test_data_path: PathBuf::from("Data/test-data.csv"),
        }
    }
}

impl DataEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            artifacts_dir: env::var("ARTIFACTS_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.artifacts_dir),
            train_data_path: env::var("TRAIN_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.train_data_path),
            test_data_path: env::var("TEST_DATA_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.test_data_path),
        }
    }
}
