use crate::network::ConsensusParams;
use crate::storage::{BlockAncestors, BlockHeaderProvider};
use crate::Error;
use bitcrypto::{Hash, SHA256D};
use chain::{BlockHeader, HeightedHeader, IndexedBlockHeader};
use primitives::compact::Compact;
use primitives::U256;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use std::cmp;

/// Returns true if hash is lower or equal than target represented by compact bits
pub fn is_valid_proof_of_work_hash(bits: Compact, hash: &SHA256D) -> bool {
	let target = match bits.to_u256() {
		Ok(target) => target,
		_err => return false,
	};

	let value = U256::from_little_endian(&hash.into_inner());
	value <= target
}

/// Returns true if hash is lower or equal than target and target is lower or equal
/// than current network maximum
pub fn is_valid_proof_of_work(max_work_bits: &U256, bits: Compact, hash: &SHA256D) -> bool {
	bits.is_below_or_equal_limit(max_work_bits) && is_valid_proof_of_work_hash(bits, hash)
}

/// Checks that `header` claims a usable target and that its hash meets it.
pub fn verify_proof_of_work(header: &IndexedBlockHeader, consensus: &ConsensusParams) -> Result<(), Error> {
	let target = match header.raw.bits.to_u256() {
		Ok(target) if !target.is_zero() => target,
		_ => return Err(Error::InvalidTarget),
	};

	if target > consensus.pow_limit {
		return Err(Error::TargetAboveLimit);
	}

	if !is_valid_proof_of_work_hash(header.raw.bits, &header.hash) {
		return Err(Error::Pow);
	}

	Ok(())
}

pub fn check_proof_of_work(header: &BlockHeader, consensus: &ConsensusParams) -> bool {
	verify_proof_of_work(&IndexedBlockHeader::from_raw(*header), consensus).is_ok()
}

/// Decodes the first 80 bytes of `bytes` and checks their proof of work.
pub fn verify_header_proof_of_work(bytes: &[u8], consensus: &ConsensusParams) -> Result<IndexedBlockHeader, Error> {
	let header = IndexedBlockHeader::from_bytes(bytes)?;
	verify_proof_of_work(&header, consensus)?;
	Ok(header)
}

/// Boolean form of `verify_header_proof_of_work`. Undecodable input is reported as invalid.
pub fn check_header_proof_of_work(bytes: &[u8], consensus: &ConsensusParams) -> bool {
	match verify_header_proof_of_work(bytes, consensus) {
		Ok(_) => true,
		Err(err) => {
			debug!(target: "verification", "Header rejected: {}", err);
			false
		}
	}
}

/// Checks proof of work of independent headers in parallel. Reports the first failing header.
pub fn check_headers_proof_of_work(headers: &[IndexedBlockHeader], consensus: &ConsensusParams) -> Result<(), (usize, Error)> {
	headers
		.par_iter()
		.enumerate()
		.fold(
			|| Ok(()),
			|result, (index, header)| result.and_then(|_| verify_proof_of_work(header, consensus).map_err(|err| (index, err))),
		)
		.reduce(|| Ok(()), |acc, check| acc.and(check))
}

/// Returns work required for the header following `parent`, created at `time`.
///
/// `retarget_header` is the first header of the window that `parent` closes, at height
/// `parent.height - (interval - 1)`. It is only read when the next header starts a new window.
pub fn work_required(
	parent: &HeightedHeader,
	time: u32,
	retarget_header: &BlockHeader,
	store: &dyn BlockHeaderProvider,
	consensus: &ConsensusParams,
) -> Compact {
	if consensus.pow_no_retargeting {
		return consensus.pow_limit_bits();
	}

	let height = parent.height + 1;
	if height % consensus.difficulty_adjustment_interval() != 0 {
		if consensus.pow_allow_min_difficulty_blocks {
			return work_required_testnet(parent, time, store, consensus);
		}
		return parent.header.raw.bits;
	}

	work_required_retarget(&parent.header.raw, retarget_header, consensus)
}

/// Minimum difficulty exception between retarget boundaries.
///
/// A header delayed by more than two target spacings may use the easiest target. Otherwise the
/// required bits are those of the last ancestor that was not such a minimum difficulty header.
///
/// # Panics
///
/// When `store` cannot provide an ancestor the walk needs.
pub fn work_required_testnet(parent: &HeightedHeader, time: u32, store: &dyn BlockHeaderProvider, consensus: &ConsensusParams) -> Compact {
	let max_bits = consensus.pow_limit_bits();
	if u64::from(time) > u64::from(parent.header.raw.time) + u64::from(consensus.pow_target_spacing) * 2 {
		return max_bits;
	}

	let interval = consensus.difficulty_adjustment_interval();
	let mut height = parent.height;
	let mut bits = parent.header.raw.bits;
	let mut ancestors = BlockAncestors::new(parent.header.raw.previous_header_hash.into(), store);
	while height % interval != 0 && bits == max_bits {
		let ancestor = ancestors
			.next()
			.expect("ancestors down to the last retarget boundary are provided by the caller; qed");
		height -= 1;
		bits = ancestor.raw.bits;
	}

	trace!(target: "verification", "Minimum difficulty walk stopped at height {} with bits {}", height, bits);
	bits
}

/// Algorithm used for retargeting the difficulty at the end of each window.
pub fn work_required_retarget(parent: &BlockHeader, retarget_header: &BlockHeader, consensus: &ConsensusParams) -> Compact {
	let bits = if consensus.enforce_bip94 {
		retarget_header.bits
	} else {
		parent.bits
	};

	let timespan = retarget_timespan(retarget_header.time, parent.time, consensus);
	// target * timespan wraps at 256 bits
	let retarget = U256::from(bits).overflowing_mul(U256::from(timespan)).0 / U256::from(consensus.pow_target_timespan);

	trace!(target: "verification", "Retarget from {} over {} seconds", bits, timespan);
	if retarget > consensus.pow_limit {
		consensus.pow_limit_bits()
	} else {
		retarget.into()
	}
}

/// Time elapsed over a window, clamped to a quarter and four times the target timespan.
pub fn retarget_timespan(retarget_timestamp: u32, last_timestamp: u32, consensus: &ConsensusParams) -> u32 {
	let timespan = i64::from(last_timestamp) - i64::from(retarget_timestamp);
	let min_timespan = i64::from(consensus.pow_target_timespan / 4);
	let max_timespan = i64::from(consensus.pow_target_timespan) * 4;
	cmp::min(cmp::max(timespan, min_timespan), max_timespan) as u32
}

/// Compares `header.bits` with the required work.
///
/// Also returns the first header of the window `header` belongs to: `header` itself when it
/// starts a new window, `retarget_header` otherwise.
pub fn validate_required_bits(
	parent: &HeightedHeader,
	header: &IndexedBlockHeader,
	retarget_header: &IndexedBlockHeader,
	store: &dyn BlockHeaderProvider,
	consensus: &ConsensusParams,
) -> (bool, IndexedBlockHeader) {
	let required = work_required(parent, header.raw.time, &retarget_header.raw, store, consensus);
	let next = next_retarget_header(parent.height + 1, header, retarget_header, consensus);
	(required == header.raw.bits, next)
}

/// First header of the window that contains the header at `height`.
pub fn next_retarget_header(
	height: u32,
	header: &IndexedBlockHeader,
	retarget_header: &IndexedBlockHeader,
	consensus: &ConsensusParams,
) -> IndexedBlockHeader {
	if height % consensus.difficulty_adjustment_interval() == 0 {
		*header
	} else {
		*retarget_header
	}
}

/// Height of the last retarget boundary at or below `height`.
pub fn retarget_boundary_height(height: u32, consensus: &ConsensusParams) -> u32 {
	height - height % consensus.difficulty_adjustment_interval()
}

/// Expected number of hashes needed to meet the target, `2^256 / (target + 1)`.
/// Zero when `bits` do not encode a positive target.
pub fn block_work(bits: Compact) -> U256 {
	match bits.to_u256() {
		Ok(target) if !target.is_zero() => (!target / (target + U256::one())) + U256::one(),
		_ => U256::zero(),
	}
}

/// Sum of `block_work` over `headers`, saturating at `U256::max_value()`.
pub fn chain_work<'a, I>(headers: I) -> U256
where
	I: IntoIterator<Item = &'a BlockHeader>,
{
	headers.into_iter().fold(U256::zero(), |acc, header| match acc.overflowing_add(block_work(header.bits)) {
		(sum, false) => sum,
		(_, true) => U256::max_value(),
	})
}

/// Checks whether the difficulty may change from `old_bits` to `new_bits` at `height`,
/// without looking at any header.
pub fn permitted_difficulty_transition(consensus: &ConsensusParams, height: u32, old_bits: Compact, new_bits: Compact) -> bool {
	if consensus.pow_allow_min_difficulty_blocks {
		return true;
	}

	if height % consensus.difficulty_adjustment_interval() != 0 {
		return old_bits == new_bits;
	}

	let timespan = U256::from(consensus.pow_target_timespan);
	let old_target = U256::from(old_bits);
	let observed_target = U256::from(new_bits);
	let bound = |scaled_timespan: u32| {
		let target = old_target.overflowing_mul(U256::from(scaled_timespan)).0 / timespan;
		let target = cmp::min(target, consensus.pow_limit);
		// rounded the same way as an actual retarget
		U256::from(Compact::from_u256(target))
	};

	let maximum_target = bound(consensus.pow_target_timespan * 4);
	let minimum_target = bound(consensus.pow_target_timespan / 4);
	minimum_target <= observed_target && observed_target <= maximum_target
}
