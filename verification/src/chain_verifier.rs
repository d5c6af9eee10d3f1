use crate::accept_header::HeaderAcceptor;
use crate::network::ConsensusParams;
use crate::storage::MemoryHeaderStore;
use crate::verify_header::HeaderVerifier;
use crate::work::{block_work, next_retarget_header, retarget_boundary_height};
use crate::Error;
use chain::{HeightedHeader, IndexedBlockHeader};
use primitives::U256;

/// Verifies a header chain one header at a time, on top of a trusted anchor.
///
/// Keeps every accepted header in memory, so the minimum difficulty walk on test networks
/// always finds the ancestors it needs, and tracks the first header of the current retarget window.
pub struct ChainVerifier<'a> {
	consensus: &'a ConsensusParams,
	store: MemoryHeaderStore,
	retarget_header: IndexedBlockHeader,
	work: U256,
}

impl<'a> ChainVerifier<'a> {
	/// # Panics
	///
	/// When `anchor` is not at a retarget boundary.
	pub fn new(consensus: &'a ConsensusParams, anchor: HeightedHeader) -> Self {
		assert_eq!(
			retarget_boundary_height(anchor.height, consensus),
			anchor.height,
			"chain verification starts at a retarget boundary"
		);

		ChainVerifier {
			consensus,
			store: MemoryHeaderStore::new(anchor.height, anchor.header),
			retarget_header: anchor.header,
			work: U256::zero(),
		}
	}

	pub fn from_genesis(consensus: &'a ConsensusParams) -> Self {
		Self::new(consensus, HeightedHeader::new(0, consensus.genesis_header()))
	}

	/// Verifies `header` on top of the best header and returns its height.
	pub fn verify(&mut self, header: IndexedBlockHeader) -> Result<u32, Error> {
		let parent = self.store.best_header();
		HeaderVerifier::new(&header, self.consensus).check()?;
		HeaderAcceptor::new(&self.store, self.consensus, &header, &parent, &self.retarget_header.raw).check()?;

		let height = self.store.insert(header)?;
		self.retarget_header = next_retarget_header(height, &header, &self.retarget_header, self.consensus);
		self.work = match self.work.overflowing_add(block_work(header.raw.bits)) {
			(work, false) => work,
			(_, true) => U256::max_value(),
		};

		debug!(target: "verification", "Accepted header {} at height {}", header.hash, height);
		Ok(height)
	}

	pub fn best_header(&self) -> HeightedHeader {
		self.store.best_header()
	}

	pub fn retarget_header(&self) -> &IndexedBlockHeader {
		&self.retarget_header
	}

	/// Work of the headers verified so far, the anchor excluded.
	pub fn chain_work(&self) -> U256 {
		self.work
	}

	pub fn store(&self) -> &MemoryHeaderStore {
		&self.store
	}
}
