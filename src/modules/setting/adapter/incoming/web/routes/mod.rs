mod get_settings;
mod save_setting;

pub use get_settings::get_settings_handler;
pub use save_setting::save_setting_handler;
