pub mod create_certificate;
pub mod delete_certificate;
pub mod fetch_certificates;
pub mod reorder_certificates;
pub mod update_certificate;
