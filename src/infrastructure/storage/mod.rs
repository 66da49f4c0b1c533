mod local_store;
mod s3_store;
mod store_factory;

pub use local_store::LocalContentStore;
pub use s3_store::{S3ContentStore, S3Credentials};
pub use store_factory::ContentStoreFactory;
