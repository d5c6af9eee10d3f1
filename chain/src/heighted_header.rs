use crate::IndexedBlockHeader;

/// Header paired with the height the caller's header chain assigns to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightedHeader {
	pub height: u32,
	pub header: IndexedBlockHeader,
}

impl HeightedHeader {
	pub fn new(height: u32, header: IndexedBlockHeader) -> Self {
		HeightedHeader { height, header }
	}
}
