//! Compact representation of `U256`, the "nBits" field of a block header.

use crate::U256;
use std::fmt;

const SIGN_BIT: u32 = 0x0080_0000;
const MANTISSA_MASK: u32 = 0x007f_ffff;

/// Compact representation of `U256`
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Hash)]
pub struct Compact(u32);

impl From<u32> for Compact {
	fn from(u: u32) -> Self {
		Compact(u)
	}
}

impl From<Compact> for u32 {
	fn from(c: Compact) -> Self {
		c.0
	}
}

impl From<U256> for Compact {
	fn from(u: U256) -> Self {
		Compact::from_u256(u)
	}
}

impl From<Compact> for U256 {
	fn from(c: Compact) -> Self {
		c.to_target()
	}
}

impl fmt::Display for Compact {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:#010x}", self.0)
	}
}

impl Compact {
	pub fn new(u: u32) -> Self {
		Compact(u)
	}

	pub fn max_value() -> Self {
		U256::max_value().into()
	}

	/// Splits the compact value into the shifted mantissa and the negative and overflow flags.
	///
	/// Bits shifted past the 256th are dropped, so an overflowing value is truncated rather than saturated.
	fn expand(&self) -> (U256, bool, bool) {
		let size = self.0 >> 24;
		let mut word = self.0 & MANTISSA_MASK;

		let value = if size <= 3 {
			word >>= 8 * (3 - size);
			U256::from(word)
		} else {
			U256::from(word) << (8 * (size as usize - 3))
		};

		let is_negative = word != 0 && (self.0 & SIGN_BIT) != 0;
		let is_overflow = word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

		(value, is_negative, is_overflow)
	}

	/// Computes the target [0, T] that a blockhash must land in to be valid.
	/// Returns value in error, if there is an overflow or its negative value.
	pub fn to_u256(&self) -> Result<U256, U256> {
		match self.expand() {
			(value, false, false) => Ok(value),
			(value, _, _) => Err(value),
		}
	}

	/// Target encoded by this value.
	///
	/// A set sign bit always yields zero. Overflowing values yield whatever bits survived the shift.
	pub fn to_target(&self) -> U256 {
		if self.0 & SIGN_BIT != 0 {
			return U256::zero();
		}

		self.expand().0
	}

	pub fn is_negative(&self) -> bool {
		self.expand().1
	}

	pub fn is_overflow(&self) -> bool {
		self.expand().2
	}

	/// Returns true if the encoded target is positive, does not overflow and does not exceed `limit`.
	pub fn is_below_or_equal_limit(&self, limit: &U256) -> bool {
		match self.to_u256() {
			Ok(target) => !target.is_zero() && target <= *limit,
			Err(_) => false,
		}
	}

	/// Encodes `val` in canonical form, with the smallest possible exponent.
	pub fn from_u256(val: U256) -> Self {
		let mut size = (val.bits() + 7) / 8;
		let mut compact = if size <= 3 {
			(val.low_u64() << (8 * (3 - size))) as u32
		} else {
			let bn = val >> (8 * (size - 3));
			bn.low_u32()
		};

		if (compact & SIGN_BIT) != 0 {
			compact >>= 8;
			size += 1;
		}

		debug_assert!((compact & !MANTISSA_MASK) == 0);
		Compact(compact | (size << 24) as u32)
	}

	/// Difficulty relative to the easiest mainnet target `0x1d00ffff`.
	pub fn to_f64(&self) -> f64 {
		let mut shift = (self.0 >> 24) & 0xff;
		let mut diff = f64::from(0x0000_ffffu32) / f64::from(self.0 & 0x00ff_ffffu32);
		while shift < 29 {
			diff *= f64::from(256);
			shift += 1;
		}
		while shift > 29 {
			diff /= f64::from(256.0);
			shift -= 1;
		}
		diff
	}
}

#[cfg(test)]
mod tests {
	use super::Compact;
	use crate::U256;
	use proptest::prelude::*;

	#[test]
	fn test_compact_to_u256() {
		assert_eq!(Compact::new(0x01003456).to_u256(), Ok(0.into()));
		assert_eq!(Compact::new(0x01123456).to_u256(), Ok(0x12.into()));
		assert_eq!(Compact::new(0x02008000).to_u256(), Ok(0x80.into()));
		assert_eq!(Compact::new(0x02123456).to_u256(), Ok(0x1234.into()));
		assert_eq!(Compact::new(0x03123456).to_u256(), Ok(0x123456.into()));
		assert_eq!(Compact::new(0x04123456).to_u256(), Ok(0x12345600u64.into()));
		assert_eq!(Compact::new(0x05009234).to_u256(), Ok(0x92340000u64.into()));
		assert_eq!(
			Compact::new(0x20123456).to_u256(),
			Ok("1234560000000000000000000000000000000000000000000000000000000000".parse().unwrap())
		);
	}

	#[test]
	fn test_compact_zero_mantissa() {
		for bits in &[0u32, 0x00123456, 0x02000056, 0x03000000, 0x04000000, 0x00923456, 0x01803456, 0x02800056, 0x03800000, 0x04800000] {
			let compact = Compact::new(*bits);
			assert_eq!(compact.to_u256(), Ok(U256::zero()), "bits {:08x}", bits);
			assert_eq!(compact.to_target(), U256::zero());
		}
	}

	#[test]
	fn test_compact_negative() {
		// -0x12345600
		let compact = Compact::new(0x04923456);
		assert!(compact.is_negative());
		assert_eq!(compact.to_u256(), Err(0x12345600u64.into()));
		assert_eq!(compact.to_target(), U256::zero());

		let compact = Compact::new(0x01fedcba);
		assert!(compact.is_negative());
		assert_eq!(compact.to_u256(), Err(0x7e.into()));
		assert_eq!(compact.to_target(), U256::zero());
	}

	#[test]
	fn test_compact_overflow() {
		let compact = Compact::new(0xff123456);
		assert!(compact.is_overflow());
		assert!(!compact.is_negative());
		assert_eq!(compact.to_u256(), Err(U256::zero()));
		assert_eq!(compact.to_target(), U256::zero());

		// 0x123456 shifted by 30 bytes keeps its two low bytes only
		let compact = Compact::new(0x21123456);
		assert!(compact.is_overflow());
		assert_eq!(compact.to_target(), U256::from(0x3456) << 240);

		assert!(!Compact::new(0x22000001).is_overflow());
		assert!(Compact::new(0x22000100).is_overflow());
		assert!(!Compact::new(0x21000100).is_overflow());
		assert!(Compact::new(0x21010000).is_overflow());
	}

	#[test]
	fn test_from_u256() {
		let test1 = U256::from(1000u64);
		assert_eq!(Compact::new(0x0203e800), Compact::from_u256(test1));

		let test2 = (U256::one() << 224) - U256::one();
		assert_eq!(Compact::new(0x1d00ffff), Compact::from_u256(test2));

		assert_eq!(Compact::new(0x02008000), Compact::from_u256(0x80.into()));
		assert_eq!(Compact::new(0x01120000), Compact::from_u256(0x12.into()));
		assert_eq!(Compact::new(0), Compact::from_u256(U256::zero()));
	}

	#[test]
	fn test_compact_to_from_u256() {
		for bits in &[0x1d00ffffu32, 0x05009234, 0x04123456, 0x03123456, 0x1b0404cb, 0x207fffff, 0x1e0377ae] {
			let compact = Compact::new(*bits);
			let compact2 = Compact::from_u256(compact.to_u256().unwrap());
			assert_eq!(compact, compact2);
		}
	}

	#[test]
	fn test_is_below_or_equal_limit() {
		let limit = Compact::new(0x1d00ffff).to_target();
		assert!(Compact::new(0x1d00ffff).is_below_or_equal_limit(&limit));
		assert!(Compact::new(0x1c05a3f4).is_below_or_equal_limit(&limit));
		assert!(!Compact::new(0x1d010000).is_below_or_equal_limit(&limit));
		assert!(!Compact::new(0x1d000000).is_below_or_equal_limit(&limit));
		assert!(!Compact::new(0x04923456).is_below_or_equal_limit(&U256::max_value()));
		assert!(!Compact::new(0xff123456).is_below_or_equal_limit(&U256::max_value()));
	}

	#[test]
	fn test_compact_display() {
		assert_eq!(Compact::new(0x1d00ffff).to_string(), "0x1d00ffff");
		assert_eq!(Compact::new(0x0203e800).to_string(), "0x0203e800");
	}

	#[test]
	fn difficulty() {
		fn compare_f64(v1: f64, v2: f64) -> bool {
			(v1 - v2).abs() < 0.00001
		}

		assert!(compare_f64(Compact::new(0x1d00ffff).to_f64(), 1.0));
		assert!(compare_f64(Compact::new(0x1b0404cb).to_f64(), 16307.42094));
		assert!(compare_f64(Compact::new(0x1f111111).to_f64(), 0.000001));
		assert!(compare_f64(Compact::new(0x1ef88f6f).to_f64(), 0.000016));
		assert!(compare_f64(Compact::new(0x1df88f6f).to_f64(), 0.004023));
		assert!(compare_f64(Compact::new(0x1cf88f6f).to_f64(), 1.029916));
		assert!(compare_f64(Compact::new(0x12345678).to_f64(), 5913134931067755359633408.0));
	}

	proptest! {
		#[test]
		fn canonical_bits_round_trip(exponent in 3u32..=32, mantissa in 0x01_0000u32..=0x7f_ffff) {
			let bits = (exponent << 24) | mantissa;
			let compact = Compact::new(bits);
			prop_assert_eq!(Compact::from_u256(compact.to_u256().unwrap()), compact);
		}

		#[test]
		fn encoding_is_idempotent(low in any::<u64>(), shift in 0usize..192) {
			let compact = Compact::from_u256(U256::from(low) << shift);
			let target = compact.to_u256().unwrap();
			prop_assert_eq!(Compact::from_u256(target), compact);
		}
	}
}
