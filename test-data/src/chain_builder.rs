use crate::header_builder::{mine, HeaderBuilder};
use bitcrypto::dhash256;
use chain::IndexedBlockHeader;
use primitives::compact::Compact;

/// Extends an anchor header with synthetic headers.
///
/// Each pushed header links to the previous one and is `spacing` seconds younger. Merkle roots
/// are derived from the position in the chain so headers never collide.
pub struct ChainBuilder {
	headers: Vec<IndexedBlockHeader>,
	spacing: u32,
	bits: Compact,
	mined: bool,
}

impl ChainBuilder {
	pub fn new(anchor: IndexedBlockHeader) -> Self {
		ChainBuilder {
			spacing: 600,
			bits: anchor.raw.bits,
			mined: false,
			headers: vec![anchor],
		}
	}

	pub fn spacing(mut self, spacing: u32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn bits<T: Into<Compact>>(mut self, bits: T) -> Self {
		self.bits = bits.into();
		self
	}

	/// Mine pushed headers so they meet their own target.
	pub fn mined(mut self) -> Self {
		self.mined = true;
		self
	}

	pub fn push(mut self, count: usize) -> Self {
		for _ in 0..count {
			let last = self.last();
			let position = self.headers.len() as u32;
			let header = HeaderBuilder::default()
				.parent(last.hash)
				.merkle_root(dhash256(&position.to_le_bytes()))
				.time(last.raw.time + self.spacing)
				.bits(self.bits)
				.build();
			let header = if self.mined { mine(header) } else { header };
			self.headers.push(header.into());
		}
		self
	}

	pub fn last(&self) -> IndexedBlockHeader {
		*self.headers.last().expect("builder starts with the anchor header")
	}

	/// Anchor followed by the pushed headers.
	pub fn headers(&self) -> &[IndexedBlockHeader] {
		&self.headers
	}

	/// Pushed headers, without the anchor.
	pub fn build(mut self) -> Vec<IndexedBlockHeader> {
		self.headers.remove(0);
		self.headers
	}
}
