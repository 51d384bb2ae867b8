//! Pending indicators for backend requests

pub mod reporter;
