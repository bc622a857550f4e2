//! Background Tasks Module
//!
//! Work that runs outside the request path.
//!
//! # Tasks
//! - Cache priming: Fills the cache from the persistent store at startup

mod prime;

pub use prime::prime_cache;
