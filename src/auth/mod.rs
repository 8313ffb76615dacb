pub mod credentials;
pub mod gate;
pub mod jwt;
pub mod store;
