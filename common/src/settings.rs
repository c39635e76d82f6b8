use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use directories::BaseDirs;
use eyre::Result;
use serde::Deserialize;
use std::{
	fs,
	fs::OpenOptions,
	net::{Ipv4Addr, Ipv6Addr},
	path::PathBuf,
};

use crate::{errors::AppError, progress};

pub static DEFAULT_SETTINGS_FILENAME: &str = "camelback.toml";
pub static DEFAULT_SETTINGS_CONTENT: &str = r#"
[server]
ip_v4 = "0.0.0.0"
ip_v6 = "" # eg: "::"
port = 22780
timeout = 30 # in seconds
"#;

#[derive(Debug, Deserialize)]
pub struct Settings {
	pub server: Server,
}

#[derive(Debug, Deserialize)]
pub struct Server {
	pub ip_v4: String,
	pub ip_v6: String,
	pub port: u16,
	pub timeout: u64,
}

impl Settings {
	pub fn new() -> Result<Self> {
		// create a default file if doesn't exist
		if OpenOptions::new().write(true).create_new(true).open(DEFAULT_SETTINGS_FILENAME).is_ok() {
			fs::write(DEFAULT_SETTINGS_FILENAME, DEFAULT_SETTINGS_CONTENT.trim())?;
		}

		let mut s = Self::defaults()
			.add_source(File::new(DEFAULT_SETTINGS_FILENAME, FileFormat::Toml).required(false));

		if let Some(dir) = BaseDirs::new() {
			s = s.add_source(
				File::from(
					PathBuf::from(dir.config_dir())
						.join("camelback")
						.join(DEFAULT_SETTINGS_FILENAME),
				)
				.required(false),
			);
		}

		s = s.add_source(
			Environment::with_prefix("CAMELBACK").prefix_separator("_").separator("__"),
		);

		let settings: Settings = match s.build().and_then(|c| c.try_deserialize()) {
			Ok(settings) => settings,
			Err(e) => progress::quit(AppError::SettingsLoad { error: e.to_string() }),
		};

		if let Err(e) = settings.validate() {
			progress::quit(e);
		}

		Ok(settings)
	}

	pub fn from_toml(content: &str) -> Result<Self> {
		let settings: Settings = Self::defaults()
			.add_source(File::from_str(content, FileFormat::Toml))
			.build()?
			.try_deserialize()?;

		settings.validate()?;
		Ok(settings)
	}

	fn defaults() -> ConfigBuilder<DefaultState> {
		Config::builder().add_source(File::from_str(DEFAULT_SETTINGS_CONTENT, FileFormat::Toml))
	}

	pub fn validate(&self) -> Result<(), AppError> {
		// test: ipv4
		if self.server.ip_v4.parse::<Ipv4Addr>().is_err() {
			return Err(AppError::InvalidSetting {
				key: "server.ip_v4".to_string(),
				value: self.server.ip_v4.clone(),
			});
		}

		// test: ipv6 (empty means disabled)
		if !self.server.ip_v6.is_empty() && self.server.ip_v6.parse::<Ipv6Addr>().is_err() {
			return Err(AppError::InvalidSetting {
				key: "server.ip_v6".to_string(),
				value: self.server.ip_v6.clone(),
			});
		}

		// test: timeout
		if self.server.timeout == 0 {
			return Err(AppError::InvalidSetting {
				key: "server.timeout".to_string(),
				value: self.server.timeout.to_string(),
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let settings = Settings::from_toml("").unwrap();

		assert_eq!(settings.server.ip_v4, "0.0.0.0");
		assert!(settings.server.ip_v6.is_empty());
		assert_eq!(settings.server.port, 22780);
		assert_eq!(settings.server.timeout, 30);
	}

	#[test]
	fn test_overrides() {
		let settings = Settings::from_toml(
			r#"
			[server]
			ip_v6 = "::"
			port = 8080
			"#,
		)
		.unwrap();

		assert_eq!(settings.server.ip_v4, "0.0.0.0");
		assert_eq!(settings.server.ip_v6, "::");
		assert_eq!(settings.server.port, 8080);
	}

	#[test]
	fn test_invalid_ip() {
		let e = Settings::from_toml("[server]\nip_v4 = \"localhost\"").unwrap_err();
		assert_eq!(e.to_string(), "Invalid setting for `server.ip_v4`: `localhost`.");
	}

	#[test]
	fn test_invalid_timeout() {
		assert!(Settings::from_toml("[server]\ntimeout = 0").is_err());
	}
}
