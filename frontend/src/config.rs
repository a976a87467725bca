use log::Level;

pub const APP_NAME: &str = "GrowinDataScience";

/// localStorage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_CLASS: &str = "dark";
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";

pub const HEADER_BLUR_THRESHOLD_PX: f64 = 100.0;
pub const HEADER_BLUR_SCROLLED: &str = "blur(12px)";
pub const HEADER_BLUR_TOP: &str = "blur(8px)";

pub const SCROLL_THROTTLE_MS: u32 = 16; // ~60fps
pub const RESULTS_SCROLL_DELAY_MS: u32 = 100;
pub const DEFAULT_ANIMATION_MS: f64 = 300.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
