pub mod clean;
pub mod init;
pub mod path;
pub mod show;
