pub mod error;
pub mod record;
pub mod store;

pub use error::{Result, StoreError};
pub use record::StudentRecord;
pub use store::RecordStore;
