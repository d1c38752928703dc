pub mod catalog;
pub mod fields;
pub mod record;
pub mod validator;

pub use catalog::{CarCatalog, CatalogBuilder};
pub use fields::{CategoricalField, Field};
pub use record::{FeatureRecord, Listing, RawRecord};
