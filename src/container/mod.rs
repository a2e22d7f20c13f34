//! Container core: named stacks and queues over one shared chain
//!
//! The two access disciplines share every primitive:
//! - Stack: insert at the front, remove from the front (LIFO)
//! - Queue: insert at the back, remove from the front (FIFO)
//!
//! Containers are keyed by name in per-element-type registries.

mod chain;
mod registry;
mod types;

pub use chain::Chain;
pub use registry::{ContainerSummary, Registry, RegistrySet};
pub use types::Container;
