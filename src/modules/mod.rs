pub mod certificate;
pub mod media;
pub mod project;
pub mod session;
pub mod setting;
pub mod timeline;
