//! Recommendation domains.
//!
//! Each domain (exhibition, festival, tour) is one entry in the
//! [`registry`]: its field schema, endpoint, request body shape and
//! response normalizer. Code outside this module never branches on the
//! domain tag; it asks the registry.

pub mod answers;
pub mod card;
pub mod domain;
pub mod normalize;
pub mod registry;
pub mod request;
pub mod schema;

mod exhibition;
mod festival;
mod tour;
