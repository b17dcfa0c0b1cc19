//! Kinesis client module
//!
//! Production implementation of [`ListShardsApi`](crate::pagination::ListShardsApi)
//! on top of the AWS SDK. Credentials, region resolution and retries are
//! handled by the SDK; this module only converts requests, pages and errors.

mod client;

pub use client::KinesisClient;
