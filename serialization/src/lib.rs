extern crate bitcrypto;
extern crate byteorder;
extern crate primitives;

mod impls;
mod reader;
mod stream;

pub use primitives::compact;

pub use reader::{deserialize, deserialize_iterator, Deserializable, Error, ReadIterator, Reader};
pub use stream::{serialize, Serializable, Stream};
