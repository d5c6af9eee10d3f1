use crate::network::ConsensusParams;
use crate::storage::BlockHeaderProvider;
use crate::work::work_required;
use crate::Error;
use chain::{BlockHeader, HeightedHeader, IndexedBlockHeader};

/// Returns true if `header` builds directly on `previous`.
pub fn is_connected(header: &BlockHeader, previous: &BlockHeader) -> bool {
	header.previous_header_hash == previous.hash()
}

/// Checks of a header against the chain it extends.
pub struct HeaderAcceptor<'a> {
	pub linkage: HeaderLinkage<'a>,
	pub work: HeaderWork<'a>,
}

impl<'a> HeaderAcceptor<'a> {
	pub fn new(
		store: &'a dyn BlockHeaderProvider,
		consensus: &'a ConsensusParams,
		header: &'a IndexedBlockHeader,
		parent: &'a HeightedHeader,
		retarget_header: &'a BlockHeader,
	) -> Self {
		trace!(target: "verification", "Header verification {} at height {}", header.hash, parent.height + 1);
		HeaderAcceptor {
			linkage: HeaderLinkage::new(header, parent),
			work: HeaderWork::new(header, parent, retarget_header, store, consensus),
		}
	}

	pub fn check(&self) -> Result<(), Error> {
		self.linkage.check()?;
		self.work.check()?;
		Ok(())
	}
}

pub struct HeaderLinkage<'a> {
	header: &'a IndexedBlockHeader,
	parent: &'a HeightedHeader,
}

impl<'a> HeaderLinkage<'a> {
	fn new(header: &'a IndexedBlockHeader, parent: &'a HeightedHeader) -> Self {
		HeaderLinkage { header, parent }
	}

	fn check(&self) -> Result<(), Error> {
		if self.header.raw.previous_header_hash == self.parent.header.hash {
			Ok(())
		} else {
			Err(Error::Disconnected {
				expected: self.parent.header.hash,
				actual: self.header.raw.previous_header_hash,
			})
		}
	}
}

pub struct HeaderWork<'a> {
	header: &'a IndexedBlockHeader,
	parent: &'a HeightedHeader,
	retarget_header: &'a BlockHeader,
	store: &'a dyn BlockHeaderProvider,
	consensus: &'a ConsensusParams,
}

impl<'a> HeaderWork<'a> {
	fn new(
		header: &'a IndexedBlockHeader,
		parent: &'a HeightedHeader,
		retarget_header: &'a BlockHeader,
		store: &'a dyn BlockHeaderProvider,
		consensus: &'a ConsensusParams,
	) -> Self {
		HeaderWork {
			header,
			parent,
			retarget_header,
			store,
			consensus,
		}
	}

	fn check(&self) -> Result<(), Error> {
		let work = work_required(self.parent, self.header.raw.time, self.retarget_header, self.store, self.consensus);
		if work == self.header.raw.bits {
			Ok(())
		} else {
			Err(Error::Difficulty {
				expected: work,
				actual: self.header.raw.bits,
			})
		}
	}
}

#[cfg(test)]
mod tests {
	use super::{is_connected, HeaderAcceptor};
	use crate::network::{ConsensusParams, Network};
	use crate::storage::NoopStore;
	use crate::Error;
	use assert_matches::assert_matches;
	use chain::{BlockHeader, HeightedHeader, IndexedBlockHeader};
	use primitives::compact::Compact;

	const BLOCK_1: &str = "010000006fe28c0ab6f1b372c1a6a246ae63f74f931e8365e15a089c68d6190000000000982051fd1e4ba744bbbe680e1fee14677ba1a3c3540bf7b1cdb606e857233e0e61bc6649ffff001d01e36299";

	#[test]
	fn test_is_connected() {
		let genesis = ConsensusParams::new(Network::Mainnet).genesis_header().raw;
		let block_1: BlockHeader = BLOCK_1.into();
		assert!(is_connected(&block_1, &genesis));
		assert!(!is_connected(&genesis, &block_1));
	}

	#[test]
	fn test_header_acceptor() {
		let consensus = ConsensusParams::new(Network::Mainnet);
		let genesis = consensus.genesis_header();
		let parent = HeightedHeader::new(0, genesis);
		let block_1 = IndexedBlockHeader::from_raw(BLOCK_1.into());
		assert_eq!(HeaderAcceptor::new(&NoopStore, &consensus, &block_1, &parent, &genesis.raw).check(), Ok(()));

		let easier = IndexedBlockHeader::from_raw(BlockHeader {
			bits: Compact::new(0x1d00fffe),
			..block_1.raw
		});
		assert_eq!(
			HeaderAcceptor::new(&NoopStore, &consensus, &easier, &parent, &genesis.raw).check(),
			Err(Error::Difficulty {
				expected: Compact::new(0x1d00ffff),
				actual: Compact::new(0x1d00fffe),
			})
		);

		let parent = HeightedHeader::new(0, block_1);
		assert_matches!(
			HeaderAcceptor::new(&NoopStore, &consensus, &block_1, &parent, &genesis.raw).check(),
			Err(Error::Disconnected { .. })
		);
	}
}
