//! Header-only proof-of-work verification and difficulty retargeting.
//!
//! Context-free checks (`HeaderVerifier`) only look at the header itself. Contextual checks (`HeaderAcceptor`)
//! need the parent header, the first header of the retarget window and, on networks with the minimum
//! difficulty exception, access to older ancestors through `BlockHeaderProvider`.

#[macro_use]
extern crate log;
extern crate bitcrypto;
extern crate chain;
extern crate network;
extern crate primitives;
extern crate rayon;
extern crate serialization as ser;
extern crate storage;

mod accept_header;
mod chain_verifier;
mod error;
mod verify_header;
mod work;

pub use primitives::{compact, U256};

pub use crate::accept_header::{is_connected, HeaderAcceptor, HeaderLinkage, HeaderWork};
pub use crate::chain_verifier::ChainVerifier;
pub use crate::error::Error;
pub use crate::verify_header::{HeaderProofOfWork, HeaderVerifier};
pub use crate::work::{
	block_work, chain_work, check_header_proof_of_work, check_headers_proof_of_work, check_proof_of_work, is_valid_proof_of_work,
	is_valid_proof_of_work_hash, next_retarget_header, permitted_difficulty_transition, retarget_boundary_height, retarget_timespan,
	validate_required_bits, verify_header_proof_of_work, verify_proof_of_work, work_required, work_required_retarget,
	work_required_testnet,
};
