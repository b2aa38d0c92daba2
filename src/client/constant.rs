pub const SITE_NAME: &str = "Student Portal";

/// Base path of the student REST API. Set `STUDENT_API_BASE` at build time to point
/// the bundle at another origin.
pub const API_BASE: &str = match option_env!("STUDENT_API_BASE") {
    Some(base) => base,
    None => "/api",
};

pub const NOTIFICATION_DURATION_MS: u32 = 3_000;

/// `localStorage` key holding the selected theme.
pub const THEME_STORAGE_KEY: &str = "theme";
