mod entities;

pub use entities::Project;
