//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `profile_api` - Profile persistence (HTTP, in-memory)

pub mod profile_api;

pub use profile_api::{HttpProfileWriterConfig, HttpRiskProfileWriter, InMemoryRiskProfileWriter};
