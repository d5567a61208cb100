pub mod duration;
pub mod flags;
pub mod paths;
pub mod settings;
pub mod store;

pub use flags::FlagSource;
pub use paths::{STATE_DIR, StatePaths};
pub use settings::Settings;
pub use store::{SaveOutcome, SettingsStore};
