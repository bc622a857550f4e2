//! Service Module
//!
//! Cache-consistency coordination between the cache and the persistent store.

mod user_service;


pub use user_service::UserService;
