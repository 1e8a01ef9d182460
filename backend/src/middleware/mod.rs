/// Permissive CORS headers and `OPTIONS` handling
pub mod cors;

pub use cors::allow_any_origin;
