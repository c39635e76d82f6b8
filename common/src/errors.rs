use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum AppError {
	#[display(fmt = "Failed to install signal handler.")]
	SignalHandler,

	#[display(fmt = "Could not start server @ `{url}`: {error}")]
	ServerStartup { url: String, error: String },

	#[display(fmt = "Invalid setting for `{key}`: `{value}`.")]
	InvalidSetting { key: String, value: String },

	#[display(fmt = "Could not load settings:\n{error}")]
	SettingsLoad { error: String },
}

impl AppError {
	pub fn exit_code(&self) -> exitcode::ExitCode {
		match self {
			AppError::SignalHandler => exitcode::OSERR,
			AppError::ServerStartup { .. } => exitcode::UNAVAILABLE,
			AppError::InvalidSetting { .. } | AppError::SettingsLoad { .. } => exitcode::CONFIG,
		}
	}
}
