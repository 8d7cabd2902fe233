mod entities;

pub use entities::Certificate;
