use crate::reader::{Deserializable, Error, Reader};
use crate::stream::{Serializable, Stream};
use bitcrypto::{Hash, SHA256D};
use byteorder::{ByteOrder, LittleEndian};
use primitives::compact::Compact;
use std::io;

macro_rules! impl_ser_for_le_int {
	($int: ty, $size: expr, $write: ident, $read: ident) => {
		impl Serializable for $int {
			fn serialize(&self, stream: &mut Stream) {
				let mut buffer = [0u8; $size];
				LittleEndian::$write(&mut buffer, *self);
				stream.append_slice(&buffer);
			}

			#[inline]
			fn serialized_size(&self) -> usize {
				$size
			}
		}

		impl Deserializable for $int {
			fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
			where
				T: io::Read,
			{
				let mut buffer = [0u8; $size];
				reader.read_slice(&mut buffer)?;
				Ok(LittleEndian::$read(&buffer))
			}
		}
	};
}

impl_ser_for_le_int!(u32, 4, write_u32, read_u32);
impl_ser_for_le_int!(i32, 4, write_i32, read_i32);

impl Serializable for Compact {
	fn serialize(&self, stream: &mut Stream) {
		stream.append(&u32::from(*self));
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		4
	}
}

impl Deserializable for Compact {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
	where
		T: io::Read,
	{
		reader.read::<u32>().map(Compact::new)
	}
}

impl Serializable for SHA256D {
	fn serialize(&self, stream: &mut Stream) {
		stream.append_slice(&self.into_inner());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		32
	}
}

impl Deserializable for SHA256D {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error>
	where
		T: io::Read,
	{
		let mut s = [0u8; 32];
		reader.read_slice(&mut s)?;
		SHA256D::from_slice(&s).map_err(|_| Error::MalformedData)
	}
}
