use log::Level;

pub const DISCORD_URL: &str = "https://discord.gg/zukijourney";
pub const GITHUB_ORG_URL: &str = "https://github.com/zukijourney";

pub const STAR_COUNT: usize = 100;
/// Star diameter in pixels, sampled from `[STAR_SIZE_MIN, STAR_SIZE_MAX)`.
pub const STAR_SIZE_MIN: f64 = 1.0;
pub const STAR_SIZE_MAX: f64 = 3.0;
pub const TWINKLE_PERIOD_SECS: u32 = 3;

/// Fraction of a section that has to be on screen before it becomes active.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.5;

pub const THEME_STORAGE_KEY: &str = "theme";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
