//! Environment-driven service configuration.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_COUNTER_FILE: &str = "Employee_ID_Tracker.txt";
pub const DEFAULT_LOGO_FILE: &str = "static/letterhead.jpg";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root under which the Employer/ and Employee/ trees are created.
    pub output_dir: PathBuf,
    /// Durable counter record for employee identifiers.
    pub counter_file: PathBuf,
    /// Letterhead image, omitted when the asset is not present.
    pub logo_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let output_dir = env::var("OFFER_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));
        let counter_file = env::var("OFFER_COUNTER_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| output_dir.join(DEFAULT_COUNTER_FILE));
        let logo_path = env::var("OFFER_LOGO_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOGO_FILE));
        let logo_path = logo_path.exists().then_some(logo_path);

        Self {
            output_dir,
            counter_file,
            logo_path,
        }
    }
}
