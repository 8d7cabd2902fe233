mod setting_repository;

pub use setting_repository::{SettingRepository, SettingRepositoryError};
