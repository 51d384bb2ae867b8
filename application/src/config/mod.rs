//! Application-level configuration.
//!
//! - [`RequestParams`]: per-request timeouts for the flow and chat use cases

pub mod request_params;

pub use request_params::RequestParams;
