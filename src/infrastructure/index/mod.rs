//! Vector index implementations

mod in_memory;
mod upstash;

pub use in_memory::InMemoryVectorIndex;
pub use upstash::UpstashVectorIndex;
