pub mod create_project;
pub mod delete_project;
pub mod fetch_projects;
pub mod reorder_projects;
pub mod update_project;
