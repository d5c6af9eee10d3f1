//! Bitcoin network
//! https://www.anintegratedworld.com/unravelling-the-mysterious-block-chain-magic-number/

use chain::IndexedBlockHeader;
use primitives::compact::Compact;
use primitives::U256;
use std::fmt;

lazy_static! {
	static ref MAX_BITS_MAINNET: U256 = "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
		.parse()
		.expect("hardcoded value should parse without errors");
	static ref MAX_BITS_TESTNET: U256 = "00000000ffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
		.parse()
		.expect("hardcoded value should parse without errors");
	static ref MAX_BITS_SIGNET: U256 = "00000377ae000000000000000000000000000000000000000000000000000000"
		.parse()
		.expect("hardcoded value should parse without errors");
	static ref MAX_BITS_REGTEST: U256 = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"
		.parse()
		.expect("hardcoded value should parse without errors");
}

/// Network selection. Each variant owns a fixed, immutable parameter set.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Network {
	/// The original and main network for Bitcoin transactions, where satoshis have real economic value.
	Mainnet,
	/// Testnet3, with the minimum difficulty exception.
	Testnet,
	/// Testnet4, retargeting from the first block of the window (BIP94).
	Testnet4,
	/// Default signet, difficulty retargeting as on mainnet.
	Signet,
	/// Local regression network, fixed minimum difficulty.
	Regtest,
	/// Testnet for unittests, proof of work difficulty is almost 0
	Unitest,
}

impl Default for Network {
	fn default() -> Self {
		Network::Mainnet
	}
}

impl fmt::Display for Network {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match *self {
			Network::Mainnet => "mainnet",
			Network::Testnet => "testnet",
			Network::Testnet4 => "testnet4",
			Network::Signet => "signet",
			Network::Regtest => "regtest",
			Network::Unitest => "unitest",
		};
		f.write_str(name)
	}
}

impl Network {
	/// Easiest target a header on this network may claim.
	pub fn max_bits(&self) -> U256 {
		match *self {
			Network::Mainnet => *MAX_BITS_MAINNET,
			Network::Testnet | Network::Testnet4 => *MAX_BITS_TESTNET,
			Network::Signet => *MAX_BITS_SIGNET,
			Network::Regtest => *MAX_BITS_REGTEST,
			Network::Unitest => Compact::max_value().into(),
		}
	}

	pub fn genesis_header(&self) -> IndexedBlockHeader {
		let raw = match *self {
			Network::Mainnet => "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a29ab5f49ffff001d1dac2b7c",
			Network::Testnet => "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4adae5494dffff001d1aa4ae18",
			Network::Testnet4 => "0100000000000000000000000000000000000000000000000000000000000000000000004e7b2b9128fe0291db0693af2ae418b767e657cd407e80cb1434221eaea7a07a046f3566ffff001dbb0c7817",
			Network::Signet => "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4a008f4d5fae77031e8ad22203",
			Network::Regtest | Network::Unitest => "0100000000000000000000000000000000000000000000000000000000000000000000003ba3edfd7a7b12b27ac72c3e67768f617fc81bc3888a51323a9fb8aa4b1e5e4adae5494dffff7f2002000000",
		};
		IndexedBlockHeader::from_raw(raw.into())
	}
}
