//! spv-pow client.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;
extern crate bitcrypto;
extern crate chain;
extern crate env_logger;
extern crate logs;
extern crate network;
extern crate primitives;
extern crate verification;

mod commands;
mod config;

use std::process;

pub const LOG_INFO: &str = "info";

fn main() {
	let yaml = load_yaml!("cli.yml");
	let matches = clap::App::from_yaml(yaml).version(crate_version!()).get_matches();
	let cfg = match config::parse(&matches) {
		Ok(cfg) => cfg,
		Err(err) => {
			// logger is not installed yet
			eprintln!("{}", err);
			process::exit(1);
		}
	};

	if !cfg.quiet {
		if cfg!(windows) {
			logs::init(LOG_INFO, logs::DateLogFormatter);
		} else {
			logs::init(LOG_INFO, logs::DateAndColorLogFormatter);
		}
	} else {
		env_logger::init();
	}

	if let Err(err) = run(&cfg, &matches) {
		error!("{}", err);
		process::exit(1);
	}
}

fn run(cfg: &config::Config, matches: &clap::ArgMatches) -> Result<(), String> {
	match matches.subcommand() {
		("hash", Some(hash_matches)) => commands::hash(hash_matches),
		("check", Some(check_matches)) => commands::check(cfg, check_matches),
		("bits", Some(bits_matches)) => commands::bits(cfg, bits_matches),
		("verify", Some(verify_matches)) => commands::verify(cfg, verify_matches),
		_ => Err("No command given, see --help".into()),
	}
}
