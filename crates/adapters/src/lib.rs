//! ToxiScan Adapters
//!
//! Provider-specific HTTP adapters for the ToxiScan aggregator. Each
//! adapter isolates the failures of its own upstream source: transport,
//! parse, and decode faults never escape the adapter boundary.

pub mod composition;
pub mod encyclopedia;
pub mod http;
pub mod registry;
pub mod structure;

pub use composition::CompositionAdapter;
pub use encyclopedia::EncyclopediaAdapter;
pub use http::build_client;
pub use registry::RegistryAdapter;
pub use structure::StructureAdapter;
pub use toxiscan_types::{ProviderError, ProviderOutcome, ProviderResult};
