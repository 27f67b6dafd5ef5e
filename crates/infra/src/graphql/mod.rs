//! GraphQL transport over HTTP

pub mod transport;

pub use transport::ReqwestTransport;
