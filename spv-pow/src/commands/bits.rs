use crate::config::Config;
use bitcrypto::ToHex;
use clap::ArgMatches;
use primitives::compact::Compact;
use verification::block_work;

fn parse_bits(value: &str) -> Result<Compact, String> {
	let bits = if value.starts_with("0x") || value.starts_with("0X") {
		u32::from_str_radix(&value[2..], 16)
	} else {
		value.parse()
	};
	bits.map(Compact::new).map_err(|err| format!("Invalid bits {}: {}", value, err))
}

pub fn bits(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let bits = parse_bits(matches.value_of("BITS").expect("BITS is required; qed"))?;

	let mut target = [0u8; 32];
	bits.to_target().to_big_endian(&mut target);

	println!("bits: {}", bits);
	println!("target: {}", target[..].to_hex());
	println!("negative: {}", bits.is_negative());
	println!("overflow: {}", bits.is_overflow());
	println!("difficulty: {}", bits.to_f64());
	println!("work: {}", block_work(bits));
	println!("within {} limit: {}", cfg.network, bits.is_below_or_equal_limit(&cfg.consensus.pow_limit));
	Ok(())
}
