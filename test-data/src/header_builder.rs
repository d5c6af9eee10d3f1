use bitcrypto::{Hash, SHA256D};
use chain::BlockHeader;
use primitives::compact::Compact;
use primitives::U256;

pub struct HeaderBuilder {
	version: i32,
	parent: SHA256D,
	merkle_root: SHA256D,
	time: u32,
	bits: Compact,
	nonce: u32,
}

impl Default for HeaderBuilder {
	fn default() -> Self {
		HeaderBuilder {
			version: 1,
			parent: SHA256D::default(),
			merkle_root: SHA256D::default(),
			time: 0,
			bits: Compact::max_value(),
			nonce: 0,
		}
	}
}

impl HeaderBuilder {
	pub fn version(mut self, version: i32) -> Self {
		self.version = version;
		self
	}

	pub fn parent(mut self, parent: SHA256D) -> Self {
		self.parent = parent;
		self
	}

	pub fn merkle_root(mut self, merkle_root: SHA256D) -> Self {
		self.merkle_root = merkle_root;
		self
	}

	pub fn time(mut self, time: u32) -> Self {
		self.time = time;
		self
	}

	pub fn bits<T: Into<Compact>>(mut self, bits: T) -> Self {
		self.bits = bits.into();
		self
	}

	pub fn nonce(mut self, nonce: u32) -> Self {
		self.nonce = nonce;
		self
	}

	pub fn build(self) -> BlockHeader {
		BlockHeader {
			version: self.version,
			previous_header_hash: self.parent,
			merkle_root_hash: self.merkle_root,
			time: self.time,
			bits: self.bits,
			nonce: self.nonce,
		}
	}
}

/// Increments the nonce until the header hash meets its own target.
///
/// Only meant for the easy targets used in tests.
pub fn mine(mut header: BlockHeader) -> BlockHeader {
	let target = header.bits.to_target();
	loop {
		if U256::from_little_endian(&header.hash().into_inner()) <= target {
			return header;
		}
		header.nonce = header.nonce.checked_add(1).expect("target is reachable within the nonce range");
	}
}
