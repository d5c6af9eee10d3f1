use bitcrypto::SHA256D;
use std::fmt;

#[derive(Debug, PartialEq)]
pub enum Error {
	/// Header does not extend the current best header.
	UnknownParent(SHA256D),
	/// Header is already stored.
	Duplicate(SHA256D),
}

impl fmt::Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Error::UnknownParent(hash) => write!(f, "Block parent {} is unknown", hash),
			Error::Duplicate(hash) => write!(f, "Block {} is already stored", hash),
		}
	}
}

impl std::error::Error for Error {}
