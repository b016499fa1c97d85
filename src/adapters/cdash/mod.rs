//! CDash dashboard adapter.

pub mod client;

pub use client::CdashHttpFetcher;
