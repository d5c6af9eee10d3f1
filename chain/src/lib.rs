extern crate byteorder;
extern crate primitives;
extern crate serialization as ser;

mod block_header;
mod heighted_header;
mod indexed_header;
mod read_and_hash;

pub use primitives::{compact, U256};

pub use block_header::{BlockHeader, BLOCK_HEADER_SIZE};
pub use heighted_header::HeightedHeader;
pub use indexed_header::IndexedBlockHeader;
pub use read_and_hash::{HashedData, ReadAndHash};
