mod bits;
mod check;
mod hash;
mod verify;

pub use self::bits::bits;
pub use self::check::check;
pub use self::hash::hash;
pub use self::verify::verify;

use bitcrypto::FromHex;
use chain::{IndexedBlockHeader, BLOCK_HEADER_SIZE};

/// Decodes a hex encoded header. Bytes after the first 80 are ignored.
pub fn parse_header(hex: &str) -> Result<IndexedBlockHeader, String> {
	let bytes: Vec<u8> = FromHex::from_hex(hex.trim()).map_err(|err| format!("Invalid hex: {}", err))?;
	if bytes.len() > BLOCK_HEADER_SIZE {
		warn!("Ignoring {} bytes after the header", bytes.len() - BLOCK_HEADER_SIZE);
	}
	IndexedBlockHeader::from_bytes(&bytes).map_err(|err| format!("Invalid header: {}", err))
}
