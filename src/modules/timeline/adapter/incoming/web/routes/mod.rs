mod create_timeline_entry;
mod delete_timeline_entry;
mod get_timelines;
mod reorder_timelines;
mod update_timeline_entry;

pub use create_timeline_entry::create_timeline_entry_handler;
pub use delete_timeline_entry::delete_timeline_entry_handler;
pub use get_timelines::get_timelines_handler;
pub use reorder_timelines::reorder_timelines_handler;
pub use update_timeline_entry::update_timeline_entry_handler;
