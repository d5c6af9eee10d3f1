use crate::network::ConsensusParams;
use crate::work::verify_proof_of_work;
use crate::Error;
use chain::IndexedBlockHeader;

/// Checks that need nothing but the header itself.
pub struct HeaderVerifier<'a> {
	pub proof_of_work: HeaderProofOfWork<'a>,
}

impl<'a> HeaderVerifier<'a> {
	pub fn new(header: &'a IndexedBlockHeader, consensus: &'a ConsensusParams) -> Self {
		HeaderVerifier {
			proof_of_work: HeaderProofOfWork::new(header, consensus),
		}
	}

	pub fn check(&self) -> Result<(), Error> {
		self.proof_of_work.check()?;
		Ok(())
	}
}

pub struct HeaderProofOfWork<'a> {
	header: &'a IndexedBlockHeader,
	consensus: &'a ConsensusParams,
}

impl<'a> HeaderProofOfWork<'a> {
	fn new(header: &'a IndexedBlockHeader, consensus: &'a ConsensusParams) -> Self {
		HeaderProofOfWork { header, consensus }
	}

	fn check(&self) -> Result<(), Error> {
		verify_proof_of_work(self.header, self.consensus)
	}
}

#[cfg(test)]
mod tests {
	use super::HeaderVerifier;
	use crate::network::{ConsensusParams, Network};
	use crate::Error;
	use assert_matches::assert_matches;
	use chain::IndexedBlockHeader;

	#[test]
	fn test_header_verifier() {
		let consensus = ConsensusParams::new(Network::Mainnet);
		let genesis = consensus.genesis_header();
		assert_eq!(HeaderVerifier::new(&genesis, &consensus).check(), Ok(()));

		let mut raw = genesis.raw;
		raw.nonce += 1;
		let header = IndexedBlockHeader::from_raw(raw);
		assert_matches!(HeaderVerifier::new(&header, &consensus).check(), Err(Error::Pow));

		// regtest genesis is far too easy for mainnet
		let regtest = ConsensusParams::new(Network::Regtest).genesis_header();
		assert_matches!(HeaderVerifier::new(&regtest, &consensus).check(), Err(Error::TargetAboveLimit));
	}
}
