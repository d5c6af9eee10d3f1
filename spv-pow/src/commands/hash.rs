use clap::ArgMatches;

pub fn hash(matches: &ArgMatches) -> Result<(), String> {
	let header = super::parse_header(matches.value_of("HEADER").expect("HEADER is required; qed"))?;
	println!("{}", header.hash);
	Ok(())
}
