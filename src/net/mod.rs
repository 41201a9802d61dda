//! Network boundary: wire types and the auth API client.

pub mod api;
pub mod types;
