pub mod app_state_builder;
pub mod in_memory;
