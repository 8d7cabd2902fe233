mod entities;

pub use entities::{Education, Experience, TimelineEntry, WorkRole};
