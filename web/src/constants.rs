//! Constant values.
use alumni_core::config::ClientConfig;

/// How long a message is shown before it is dismissed, in milliseconds.
pub static MESSAGE_TIMEOUT: u32 = 5_000;

/// Number of news items and events previewed on the home page.
pub static HOME_PREVIEW_COUNT: usize = 5;

/// Backend configuration, from `ALUMNI_API_URL` at build time.
pub fn client_config() -> ClientConfig {
    ClientConfig::from_env_value(option_env!("ALUMNI_API_URL"))
}

/// Account accepting donations by bank transfer.
pub static BANK_NAME: &str = "Zenith Bank Plc";
pub static BANK_ACCOUNT_NAME: &str = "KALABARI GIRLS";
pub static BANK_ACCOUNT_NUMBER: &str = "1226557765";
