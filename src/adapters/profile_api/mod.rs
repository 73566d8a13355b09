//! Profile API adapters.
//!
//! Implements the `RiskProfileWriter` port:
//! - `HttpRiskProfileWriter` - backend REST API (`PUT /auth/profile`)
//! - `InMemoryRiskProfileWriter` - records updates, for tests and offline runs

mod http_writer;
mod in_memory_writer;

pub use http_writer::{HttpProfileWriterConfig, HttpRiskProfileWriter};
pub use in_memory_writer::InMemoryRiskProfileWriter;
