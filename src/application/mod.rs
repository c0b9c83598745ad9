//! Application layer - Use cases orchestrating the domain over the stores
//!
//! Services depend on the outbound ports only, so any store implementation
//! (JSON document, in-memory) can back them.

pub mod ports;
pub mod services;
