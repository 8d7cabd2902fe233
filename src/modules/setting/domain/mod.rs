mod entities;

pub use entities::Setting;
