extern crate ansi_term;
extern crate env_logger;
extern crate log;
extern crate time;

use ansi_term::Colour as Color;
use env_logger::Builder;
use log::Record;
use std::env;
use std::io::Write;

fn strftime() -> String {
	time::strftime("%Y-%m-%d %H:%M:%S %Z", &time::now()).expect("Time is incorrectly formatted")
}

pub trait LogFormatter: Send + Sync + 'static {
	fn format(&self, log_record: &Record) -> String;
}

pub struct DateLogFormatter;

impl LogFormatter for DateLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = strftime();
		format!("{} {} {} {}", timestamp, record.level(), record.target(), record.args())
	}
}

pub struct DateAndColorLogFormatter;

impl LogFormatter for DateAndColorLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = strftime();
		format!(
			"{} {} {} {}",
			Color::Black.bold().paint(timestamp),
			record.level(),
			Color::White.bold().paint(record.target()),
			record.args()
		)
	}
}

/// Installs the global logger. `RUST_LOG` directives are applied on top of `filters`.
pub fn init<T>(filters: &str, formatter: T)
where
	T: LogFormatter,
{
	let mut builder = Builder::new();

	let filters = match env::var("RUST_LOG") {
		Ok(env_filters) => format!("{},{}", filters, env_filters),
		Err(_) => filters.into(),
	};

	builder.parse_filters(&filters);
	builder.format(move |buf, record| writeln!(buf, "{}", formatter.format(record)));
	builder.init();
}
