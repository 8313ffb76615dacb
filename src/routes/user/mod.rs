pub mod get;
pub mod list;
pub mod login;
pub mod me;
pub mod password;
pub mod register;
pub mod status;
pub mod update;
