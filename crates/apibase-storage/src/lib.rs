//! # apibase-storage
//!
//! Storage backends for the file-upload flow: a local filesystem store
//! rooted at the uploads directory, and an S3-compatible object store with
//! presigned retrieval URLs.

pub mod local;
pub mod s3;

pub use local::LocalStore;
pub use s3::S3Store;
