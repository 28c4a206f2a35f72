pub mod badge;
pub mod crash_report;
pub mod external;
pub mod paths;

pub use badge::{badge_title, BadgeDisplay};
pub use external::{is_external_url_allowed, open_external};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};
