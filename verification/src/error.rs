use bitcrypto::SHA256D;
use primitives::compact::Compact;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
/// All possible verification errors
pub enum Error {
	/// Header bytes could not be decoded.
	#[error("Header could not be decoded: {0}")]
	Deserialize(#[from] ser::Error),
	/// Target encoded by nBits is zero, negative or overflows 256 bits.
	#[error("Header target is zero, negative or overflowing")]
	InvalidTarget,
	/// Target encoded by nBits is easier than the network allows.
	#[error("Header target is above the proof-of-work limit")]
	TargetAboveLimit,
	/// Header hash is above its target.
	#[error("Header hash is above its target")]
	Pow,
	/// nBits differ from the value required by the difficulty rules.
	#[error("Header bits {actual} do not match required bits {expected}")]
	Difficulty { expected: Compact, actual: Compact },
	/// Header does not extend the previous header.
	#[error("Header extends {actual} instead of {expected}")]
	Disconnected { expected: SHA256D, actual: SHA256D },
	/// Accepted header could not be stored.
	#[error("Header could not be stored: {0}")]
	Store(#[from] storage::Error),
}

impl Error {
	/// True when the header bytes themselves were unusable, false for consensus violations.
	pub fn is_structural(&self) -> bool {
		match *self {
			Error::Deserialize(_) => true,
			_ => false,
		}
	}
}
