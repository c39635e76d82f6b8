use console::{style, Emoji};
use std::process;

use crate::errors::AppError;

static SETTINGS: Emoji<'_, '_> = Emoji("📝  ", "");
static LISTENING: Emoji<'_, '_> = Emoji("🟢  ", "");
static ERROR: Emoji<'_, '_> = Emoji("⛔️  ", "");

pub enum Step {
	Settings,
	Listening(String),
}

pub fn show(step: Step) {
	match step {
		Step::Settings => {
			println!("{} {}Loading settings…", style("[1/2]").bold().dim(), SETTINGS);
		}
		Step::Listening(addr) => {
			println!("{} {}Listening on {}…", style("[2/2]").bold().dim(), LISTENING, addr);
		}
	}
}

pub fn quit(app_error: AppError) -> ! {
	println!("{} {}{}", style("[err]").bold().red(), ERROR, style(&app_error).red());
	process::exit(app_error.exit_code());
}
