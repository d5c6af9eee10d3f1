use crate::{BlockHeaderProvider, BlockRef, Error};
use bitcrypto::SHA256D;
use chain::{HeightedHeader, IndexedBlockHeader};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Best header chain kept in memory, anchored at a trusted header.
///
/// Headers are only appended on top of the current best header; reorganisations are not supported.
pub struct MemoryHeaderStore {
	inner: RwLock<MemoryHeaderStoreInner>,
}

struct MemoryHeaderStoreInner {
	anchor_height: u32,
	headers: Vec<IndexedBlockHeader>,
	heights: HashMap<SHA256D, u32>,
}

impl MemoryHeaderStore {
	pub fn new(anchor_height: u32, anchor: IndexedBlockHeader) -> Self {
		let mut heights = HashMap::new();
		heights.insert(anchor.hash, anchor_height);
		MemoryHeaderStore {
			inner: RwLock::new(MemoryHeaderStoreInner {
				anchor_height,
				headers: vec![anchor],
				heights,
			}),
		}
	}

	/// Appends `header` on top of the best header and returns its height.
	pub fn insert(&self, header: IndexedBlockHeader) -> Result<u32, Error> {
		let mut inner = self.inner.write();
		if inner.heights.contains_key(&header.hash) {
			return Err(Error::Duplicate(header.hash));
		}

		let best = inner.best();
		if header.raw.previous_header_hash != best.header.hash {
			return Err(Error::UnknownParent(header.raw.previous_header_hash));
		}

		let height = best.height + 1;
		inner.heights.insert(header.hash, height);
		inner.headers.push(header);
		Ok(height)
	}

	pub fn best_header(&self) -> HeightedHeader {
		self.inner.read().best()
	}

	pub fn anchor_height(&self) -> u32 {
		self.inner.read().anchor_height
	}
}

impl MemoryHeaderStoreInner {
	fn best(&self) -> HeightedHeader {
		let header = *self.headers.last().expect("store is created with its anchor header; qed");
		HeightedHeader::new(self.anchor_height + self.headers.len() as u32 - 1, header)
	}

	fn header_at(&self, height: u32) -> Option<IndexedBlockHeader> {
		let index = height.checked_sub(self.anchor_height)? as usize;
		self.headers.get(index).cloned()
	}
}

impl BlockHeaderProvider for MemoryHeaderStore {
	fn block_header(&self, block_ref: BlockRef) -> Option<IndexedBlockHeader> {
		let inner = self.inner.read();
		match block_ref {
			BlockRef::Number(height) => inner.header_at(height),
			BlockRef::Hash(hash) => inner.heights.get(&hash).and_then(|height| inner.header_at(*height)),
		}
	}
}
