extern crate chain;
extern crate network;
extern crate proptest;
extern crate test_data;
extern crate verification;

use chain::IndexedBlockHeader;
use network::{ConsensusParams, Network};
use proptest::prelude::*;
use verification::{check_header_proof_of_work, check_headers_proof_of_work, check_proof_of_work, Error};

#[test]
fn historical_headers() {
	let consensus = ConsensusParams::new(Network::Mainnet);
	assert!(check_proof_of_work(&test_data::genesis(), &consensus));
	assert!(check_proof_of_work(&test_data::block_h1(), &consensus));
	assert!(check_proof_of_work(&test_data::block_h125552(), &consensus));
	assert!(check_header_proof_of_work(&test_data::block_h125552().to_bytes(), &consensus));
}

#[test]
fn malformed_input_is_invalid() {
	let bytes = test_data::block_h125552().to_bytes();
	for network in &[Network::Mainnet, Network::Testnet, Network::Testnet4, Network::Signet, Network::Regtest] {
		let consensus = ConsensusParams::new(*network);
		for len in 0..bytes.len() {
			assert!(!check_header_proof_of_work(&bytes[..len], &consensus));
		}
	}
}

#[test]
fn batch_reports_first_failure() {
	let consensus = ConsensusParams::new(Network::Mainnet);
	let mut mutated = test_data::block_h125552();
	mutated.nonce += 1;

	let valid: Vec<IndexedBlockHeader> = vec![test_data::genesis().into(), test_data::block_h1().into(), test_data::block_h125552().into()];
	assert_eq!(check_headers_proof_of_work(&valid, &consensus), Ok(()));

	let mut invalid = valid.clone();
	invalid.insert(2, mutated.into());
	invalid.push(mutated.into());
	assert_eq!(check_headers_proof_of_work(&invalid, &consensus), Err((2, Error::Pow)));
}

proptest! {
	#[test]
	fn proof_of_work_is_deterministic(bytes in proptest::collection::vec(any::<u8>(), 0..100)) {
		let consensus = ConsensusParams::new(Network::Regtest);
		let first = check_header_proof_of_work(&bytes, &consensus);
		prop_assert_eq!(first, check_header_proof_of_work(&bytes, &consensus));
		if bytes.len() < 80 {
			prop_assert!(!first);
		}
	}
}
