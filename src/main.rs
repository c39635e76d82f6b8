use clap::{arg, command, value_parser, Command};
use color_eyre::eyre::WrapErr;
use eyre::Result;
use std::sync::Arc;

mod log;

use camelback_common::{progress, progress::Step, Settings};

fn cli() -> Command {
	command!()
		.author("Camelback")
		.version(env!("CARGO_PKG_VERSION"))
		.propagate_version(true)
		.subcommand_required(true)
		.arg_required_else_help(true)
		.subcommand(
			Command::new("server").about("Start the demo json server").arg(
				arg!(--port <PORT> "Port to listen on (overrides settings)")
					.value_parser(value_parser!(u16)),
			),
		)
}

fn main() -> Result<()> {
	log::setup()?;

	match cli().get_matches().subcommand() {
		Some(("server", opts)) => {
			progress::show(Step::Settings);
			let mut settings = Settings::new()?;
			if let Some(port) = opts.get_one::<u16>("port") {
				settings.server.port = *port;
			}

			camelback_server::start(Arc::new(settings)).wrap_err("Could not start server")?;
		}
		_ => unreachable!("No command found"),
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_server_port() {
		let matches = cli().try_get_matches_from(["camelback", "server", "--port", "8080"]).unwrap();
		let (name, opts) = matches.subcommand().unwrap();

		assert_eq!(name, "server");
		assert_eq!(opts.get_one::<u16>("port"), Some(&8080));
	}

	#[test]
	fn test_server_rejects_unknown_flags() {
		assert!(cli().try_get_matches_from(["camelback", "server", "--plain"]).is_err());
		assert!(cli().try_get_matches_from(["camelback", "server", "--port", "http"]).is_err());
	}
}
