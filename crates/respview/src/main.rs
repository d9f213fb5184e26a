use log::warn;
use respview::config::Cli;
use respview::config::Parser;
use respview::inspect::inspect;
use respview::inspect::read_input;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let cli = Cli::parse();
	telemetry::init(&cli.log_level)?;

	let buf = read_input(cli.input.as_deref())?;
	let report = inspect(&buf, &cli)?;

	if !report.complete {
		warn!("Reply does not end with a terminator; output may be partial");
	}
	if report.generic_error {
		warn!("Server replied with a generic ERR error");
	}

	println!("{}", report.text);
	Ok(())
}
