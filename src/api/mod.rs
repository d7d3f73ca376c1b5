// Catalog API layer: TMDB wire types, URL building, and the fail-closed client.

pub mod error;
pub mod images;
pub mod models;
pub mod tmdb;
