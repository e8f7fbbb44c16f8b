mod object_store;

pub use object_store::{ObjectStore, UploadError};
