extern crate chain;
extern crate parking_lot;

mod block_ancestors;
mod block_provider;
mod block_ref;
mod error;
mod memory_store;

pub use block_ancestors::BlockAncestors;
pub use block_provider::{BlockHeaderProvider, NoopStore};
pub use block_ref::BlockRef;
pub use error::Error;
pub use memory_store::MemoryHeaderStore;
