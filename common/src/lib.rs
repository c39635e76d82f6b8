pub use errors::AppError;
pub use settings::Settings;

pub mod casing;
pub mod errors;
pub mod nullness;
pub mod progress;
pub mod settings;
