pub mod create_timeline_entry;
pub mod delete_timeline_entry;
pub mod fetch_timeline;
pub mod reorder_timeline;
pub mod update_timeline_entry;

mod draft;

pub use draft::TimelineDraft;
