use crate::config::Config;
use clap::ArgMatches;
use verification::{block_work, verify_proof_of_work};

pub fn check(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let header = super::parse_header(matches.value_of("HEADER").expect("HEADER is required; qed"))?;

	println!("hash: {}", header.hash);
	println!("bits: {}", header.raw.bits);
	verify_proof_of_work(&header, &cfg.consensus).map_err(|err| format!("Proof of work is invalid on {}: {}", cfg.network, err))?;

	println!("difficulty: {}", header.raw.bits.to_f64());
	println!("work: {}", block_work(header.raw.bits));
	info!("Proof of work is valid on {}", cfg.network);
	Ok(())
}
