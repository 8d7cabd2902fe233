pub mod fetch_setting;
pub mod fetch_settings;
pub mod save_setting;
