//! Object storage for published webpages and generated images.
//!
//! Objects are addressed by a slash-separated key (`webpages/1_2.html`,
//! `uploads/generated_image_42.png`) and exposed to clients through the URL
//! returned by [`ObjectStore::url_for`].

mod error;
mod key;
mod traits;

pub mod filesystem;
#[cfg(feature = "s3")]
pub mod s3;

pub use error::StorageError;
pub use key::validate_key;
pub use traits::ObjectStore;
