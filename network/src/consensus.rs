use crate::Network;
use bitcrypto::FromHex;
use chain::IndexedBlockHeader;
use primitives::compact::Compact;
use primitives::U256;

const DEFAULT_SIGNET_CHALLENGE: &str = "512103ad5e0edad18cb1f0fc0d28a3d4f1f3e445640337489abb10404f2d1e086be430210359ef5021964fe22d6f8e05b2463c9540ce96883fe3b278760f048f5189f2e6c452ae";

#[derive(Debug, Clone, PartialEq)]
/// Parameters that influence header proof-of-work and difficulty retargeting.
pub struct ConsensusParams {
	/// Network.
	pub network: Network,
	/// Easiest allowed target.
	pub pow_limit: U256,
	/// Expected time between two blocks, in seconds. Must be positive.
	pub pow_target_spacing: u32,
	/// Expected duration of one retarget window, in seconds. Must be at least `pow_target_spacing`.
	pub pow_target_timespan: u32,
	/// Blocks arriving more than twice the target spacing after their parent may use the easiest target.
	pub pow_allow_min_difficulty_blocks: bool,
	/// Difficulty never changes.
	pub pow_no_retargeting: bool,
	/// Retarget scales the bits of the first block of the window instead of the last.
	/// See https://github.com/bitcoin/bips/blob/master/bip-0094.mediawiki
	pub enforce_bip94: bool,
	/// Script that signet block solutions must satisfy. Carried, not evaluated.
	pub signet_challenge: Option<Vec<u8>>,
}

impl ConsensusParams {
	pub fn new(network: Network) -> Self {
		let params = ConsensusParams {
			network,
			pow_limit: network.max_bits(),
			pow_target_spacing: 10 * 60,
			pow_target_timespan: 14 * 24 * 60 * 60,
			pow_allow_min_difficulty_blocks: false,
			pow_no_retargeting: false,
			enforce_bip94: false,
			signet_challenge: None,
		};

		match network {
			Network::Mainnet | Network::Unitest => params,
			Network::Testnet => ConsensusParams {
				pow_allow_min_difficulty_blocks: true,
				..params
			},
			Network::Testnet4 => ConsensusParams {
				pow_allow_min_difficulty_blocks: true,
				enforce_bip94: true,
				..params
			},
			Network::Signet => ConsensusParams {
				signet_challenge: Some(FromHex::from_hex(DEFAULT_SIGNET_CHALLENGE).expect("hardcoded challenge is valid hex; qed")),
				..params
			},
			Network::Regtest => ConsensusParams {
				pow_allow_min_difficulty_blocks: true,
				pow_no_retargeting: true,
				..params
			},
		}
	}

	/// Number of blocks between two difficulty retargets.
	///
	/// # Panics
	///
	/// When the target timespan does not cover at least one target spacing.
	pub fn difficulty_adjustment_interval(&self) -> u32 {
		assert!(
			self.pow_target_spacing != 0 && self.pow_target_timespan >= self.pow_target_spacing,
			"retarget window must cover at least one block"
		);
		self.pow_target_timespan / self.pow_target_spacing
	}

	/// `pow_limit` in its canonical compact form.
	pub fn pow_limit_bits(&self) -> Compact {
		Compact::from_u256(self.pow_limit)
	}

	pub fn genesis_header(&self) -> IndexedBlockHeader {
		self.network.genesis_header()
	}
}

impl Default for ConsensusParams {
	fn default() -> Self {
		ConsensusParams::new(Network::default())
	}
}
