//! HTTP plumbing shared by the GraphQL transport

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
