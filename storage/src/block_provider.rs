use crate::BlockRef;
use chain::IndexedBlockHeader;

/// Ancestor lookup used by difficulty retargeting. Implemented by whatever keeps the header chain.
pub trait BlockHeaderProvider {
	/// resolves header by block reference (number/hash)
	fn block_header(&self, block_ref: BlockRef) -> Option<IndexedBlockHeader>;
}

/// Provider without any headers, for callers that keep no history.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopStore;

impl BlockHeaderProvider for NoopStore {
	fn block_header(&self, _block_ref: BlockRef) -> Option<IndexedBlockHeader> {
		None
	}
}
