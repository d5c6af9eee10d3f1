use super::parse_header;
use crate::config::Config;
use chain::HeightedHeader;
use clap::ArgMatches;
use std::fs;
use verification::{retarget_boundary_height, ChainVerifier};

pub fn verify(cfg: &Config, matches: &ArgMatches) -> Result<(), String> {
	let path = matches.value_of("FILE").expect("FILE is required; qed");
	let start_height = match matches.value_of("start-height") {
		Some(height) => height.parse::<u32>().map_err(|err| format!("Invalid start height {}: {}", height, err))?,
		None => 0,
	};

	if retarget_boundary_height(start_height, &cfg.consensus) != start_height {
		return Err(format!("Start height {} is not a retarget boundary", start_height));
	}

	let contents = fs::read_to_string(path).map_err(|err| format!("Cannot read {}: {}", path, err))?;
	let mut headers = contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.enumerate()
		.map(|(index, line)| parse_header(line).map_err(|err| format!("Header {} in {}: {}", index, path, err)));

	let anchor = match headers.next() {
		Some(anchor) => anchor?,
		None => return Err(format!("No headers found in {}", path)),
	};

	if start_height == 0 {
		let genesis_hash = cfg.consensus.genesis_header().hash;
		if anchor.hash != genesis_hash {
			return Err(format!("Genesis header mismatch. Expected {}, found {}", genesis_hash, anchor.hash));
		}
	}

	info!("Verifying {} headers from height {}", cfg.network, start_height);
	let mut verifier = ChainVerifier::new(&cfg.consensus, HeightedHeader::new(start_height, anchor));
	for header in headers {
		let header = header?;
		let height = verifier
			.verify(header)
			.map_err(|err| format!("Error verifying header {} at height {}: {}", header.hash, verifier.best_header().height + 1, err))?;

		if height % 1000 == 0 {
			info!("Verified headers up to height {}", height);
		}
	}

	let best = verifier.best_header();
	println!("best: {} {}", best.height, best.header.hash);
	println!("work: {}", verifier.chain_work());
	info!("Header chain verification from height {} to {} completed successfully", start_height, best.height);
	Ok(())
}
