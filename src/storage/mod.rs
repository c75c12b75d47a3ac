//! Blob storage addressing and transport
//!
//! This module covers the two storage concerns of the functions:
//! - Splitting composite storage addresses into account/container/path
//! - Downloading and uploading blobs via the [`BlobStore`] trait

mod address;
mod blob;
mod error;

pub use address::BlobAddress;
pub use blob::{AzureBlobClient, BlobStore};
pub use error::StorageError;
