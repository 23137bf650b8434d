/// Settings file read by [`Settings::load`](super::Settings::load). Missing
/// is fine; everything can come from the environment.
pub const DEFAULT_SETTINGS_FILE: &str = "config/settings.json";

/// Environment overrides look like `SPENDSHARE_AUTH__ACCESS_TOKEN__SECRET`.
pub mod env {
    pub const PREFIX: &str = "SPENDSHARE";
    pub const PREFIX_SEPARATOR: &str = "_";
    pub const SEPARATOR: &str = "__";
    pub const LIST_SEPARATOR: &str = ",";
}

pub mod defaults {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub const POSTGRES_MAX_CONNECTIONS: u32 = 5;
    pub const ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;
    pub const REFRESH_TOKEN_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;
    /// Upper bound for either token's time to live: ten years.
    pub const MAX_TOKEN_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
}
