pub mod api;
pub mod ordering;
