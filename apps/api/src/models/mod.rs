pub mod place;
pub mod profile;
pub mod session;
