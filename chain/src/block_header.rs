use crate::compact::Compact;
use bitcrypto::{dhash256, FromHex, Hash, SHA256D};
use byteorder::{ByteOrder, LittleEndian};
use ser::{deserialize, Deserializable, Error as ReaderError, Reader, Serializable, Stream};
use std::{fmt, io};

/// Size of a serialized block header.
pub const BLOCK_HEADER_SIZE: usize = 80;

#[derive(PartialEq, Eq, Clone, Copy)]
pub struct BlockHeader {
	pub version: i32,
	pub previous_header_hash: SHA256D,
	pub merkle_root_hash: SHA256D,
	pub time: u32,
	pub bits: Compact,
	pub nonce: u32,
}

impl BlockHeader {
	/// Compute hash of the block header.
	pub fn hash(&self) -> SHA256D {
		block_header_hash(self)
	}

	/// Decodes the first 80 bytes of `bytes`. Anything after them is left untouched.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReaderError> {
		Reader::new(bytes).read()
	}

	/// Fixed-width wire encoding, little-endian integers and hashes in internal byte order.
	pub fn to_bytes(&self) -> [u8; BLOCK_HEADER_SIZE] {
		let mut bytes = [0u8; BLOCK_HEADER_SIZE];
		LittleEndian::write_i32(&mut bytes[0..4], self.version);
		bytes[4..36].copy_from_slice(&self.previous_header_hash.into_inner());
		bytes[36..68].copy_from_slice(&self.merkle_root_hash.into_inner());
		LittleEndian::write_u32(&mut bytes[68..72], self.time);
		LittleEndian::write_u32(&mut bytes[72..76], self.bits.into());
		LittleEndian::write_u32(&mut bytes[76..80], self.nonce);
		bytes
	}
}

impl fmt::Debug for BlockHeader {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_struct("BlockHeader")
			.field("version", &self.version)
			.field("previous_header_hash", &self.previous_header_hash)
			.field("merkle_root_hash", &self.merkle_root_hash)
			.field("time", &self.time)
			.field("bits", &u32::from(self.bits))
			.field("nonce", &self.nonce)
			.finish()
	}
}

impl From<&'static str> for BlockHeader {
	fn from(s: &'static str) -> Self {
		let bytes: Vec<u8> = FromHex::from_hex(s).expect("static block header literals are valid hex; qed");
		deserialize(&bytes as &[u8]).expect("static block header literals are exactly 80 bytes; qed")
	}
}

impl Serializable for BlockHeader {
	fn serialize(&self, stream: &mut Stream) {
		stream.append_slice(&self.to_bytes());
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		BLOCK_HEADER_SIZE
	}
}

impl Deserializable for BlockHeader {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError>
	where
		T: io::Read,
	{
		Ok(BlockHeader {
			version: reader.read()?,
			previous_header_hash: reader.read()?,
			merkle_root_hash: reader.read()?,
			time: reader.read()?,
			bits: reader.read()?,
			nonce: reader.read()?,
		})
	}
}

pub(crate) fn block_header_hash(block_header: &BlockHeader) -> SHA256D {
	dhash256(&block_header.to_bytes())
}

#[cfg(test)]
mod tests {
	use super::{BlockHeader, BLOCK_HEADER_SIZE};
	use crate::compact::Compact;
	use bitcrypto::{FromHex, FromStr, Hash, SHA256D};
	use proptest::prelude::*;
	use ser::{serialize, Error as ReaderError, Reader};

	const GENESIS: &str = "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c";

	#[test]
	fn test_block_header_decode() {
		let header: BlockHeader = GENESIS.into();
		assert_eq!(header.version, 1);
		assert_eq!(header.previous_header_hash, SHA256D::default());
		assert_eq!(
			header.merkle_root_hash,
			SHA256D::from_str("4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b").unwrap()
		);
		assert_eq!(header.time, 1231006505);
		assert_eq!(header.bits, Compact::new(0x1d00ffff));
		assert_eq!(header.nonce, 2083236893);
	}

	#[test]
	fn test_block_header_hash() {
		let header: BlockHeader = GENESIS.into();
		assert_eq!(
			header.hash(),
			SHA256D::from_str("000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f").unwrap()
		);
	}

	#[test]
	fn test_block_header_stream() {
		let block_header = BlockHeader {
			version: 1,
			previous_header_hash: SHA256D::from_inner([2; 32]),
			merkle_root_hash: SHA256D::from_inner([3; 32]),
			time: 4,
			bits: 5.into(),
			nonce: 6,
		};

		let mut expected = vec![1u8, 0, 0, 0];
		expected.extend_from_slice(&[2; 32]);
		expected.extend_from_slice(&[3; 32]);
		expected.extend_from_slice(&[4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0]);

		assert_eq!(serialize(&block_header), expected);
		assert_eq!(&block_header.to_bytes()[..], &expected[..]);
	}

	#[test]
	fn test_block_header_reader() {
		let mut buffer = vec![1u8, 0, 0, 0];
		buffer.extend_from_slice(&[2; 32]);
		buffer.extend_from_slice(&[3; 32]);
		buffer.extend_from_slice(&[4, 0, 0, 0, 5, 0, 0, 0, 6, 0, 0, 0]);

		let mut reader = Reader::new(&buffer);

		let expected = BlockHeader {
			version: 1,
			previous_header_hash: SHA256D::from_inner([2; 32]),
			merkle_root_hash: SHA256D::from_inner([3; 32]),
			time: 4,
			bits: 5.into(),
			nonce: 6,
		};

		assert_eq!(expected, reader.read().unwrap());
		assert_eq!(ReaderError::UnexpectedEnd, reader.read::<BlockHeader>().unwrap_err());
	}

	#[test]
	fn test_negative_version() {
		let mut bytes = Vec::<u8>::from_hex(GENESIS).unwrap();
		bytes[0..4].copy_from_slice(&[0xff, 0xff, 0xff, 0xff]);
		let header = BlockHeader::from_bytes(&bytes).unwrap();
		assert_eq!(header.version, -1);
		assert_eq!(&header.to_bytes()[..], &bytes[..]);
	}

	#[test]
	fn test_trailing_bytes_are_ignored() {
		let mut bytes = Vec::<u8>::from_hex(GENESIS).unwrap();
		bytes.extend_from_slice(&[0xde, 0xad]);
		let header = BlockHeader::from_bytes(&bytes).unwrap();
		assert_eq!(&header.to_bytes()[..], &bytes[..BLOCK_HEADER_SIZE]);
	}

	#[test]
	fn test_short_buffers_are_truncated() {
		let bytes = Vec::<u8>::from_hex(GENESIS).unwrap();
		for len in 0..BLOCK_HEADER_SIZE {
			assert_eq!(BlockHeader::from_bytes(&bytes[..len]), Err(ReaderError::UnexpectedEnd));
		}
	}

	proptest! {
		#[test]
		fn bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), BLOCK_HEADER_SIZE)) {
			let header = BlockHeader::from_bytes(&bytes).unwrap();
			prop_assert_eq!(&header.to_bytes()[..], &bytes[..]);
			prop_assert_eq!(BlockHeader::from_bytes(&header.to_bytes()).unwrap(), header);
		}
	}
}
