use clap::ArgMatches;
use network::{ConsensusParams, Network};

pub struct Config {
	pub network: Network,
	pub consensus: ConsensusParams,
	pub quiet: bool,
}

pub fn parse(matches: &ArgMatches) -> Result<Config, String> {
	let quiet = matches.is_present("quiet");
	let network = match (
		matches.is_present("testnet"),
		matches.is_present("testnet4"),
		matches.is_present("signet"),
		matches.is_present("regtest"),
	) {
		(false, false, false, false) => Network::Mainnet,
		(true, false, false, false) => Network::Testnet,
		(false, true, false, false) => Network::Testnet4,
		(false, false, true, false) => Network::Signet,
		(false, false, false, true) => Network::Regtest,
		_ => return Err("Only one of --testnet, --testnet4, --signet and --regtest can be used".into()),
	};

	Ok(Config {
		network,
		consensus: ConsensusParams::new(network),
		quiet,
	})
}

#[cfg(test)]
mod tests {
	use super::parse;
	use network::Network;

	fn parse_args(args: &[&str]) -> Result<super::Config, String> {
		let yaml = load_yaml!("cli.yml");
		let matches = clap::App::from_yaml(yaml).get_matches_from(args.to_vec());
		parse(&matches)
	}

	#[test]
	fn test_parse_network() {
		let cfg = parse_args(&["spv-pow", "bits", "0x1d00ffff"]).unwrap();
		assert_eq!(cfg.network, Network::Mainnet);
		assert!(!cfg.quiet);

		let cfg = parse_args(&["spv-pow", "--testnet4", "-q", "bits", "0x1d00ffff"]).unwrap();
		assert_eq!(cfg.network, Network::Testnet4);
		assert!(cfg.consensus.enforce_bip94);
		assert!(cfg.quiet);

		let cfg = parse_args(&["spv-pow", "--regtest", "bits", "0x207fffff"]).unwrap();
		assert!(cfg.consensus.pow_no_retargeting);
	}

	#[test]
	fn test_parse_conflicting_networks() {
		assert!(parse_args(&["spv-pow", "--testnet", "--signet", "bits", "0x1d00ffff"]).is_err());
	}
}
