pub mod config;
pub mod init;
pub mod set;
pub mod status;
pub mod week;
