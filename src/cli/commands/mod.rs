pub mod config;
pub mod db;
pub mod init;
pub mod list;
pub mod serve;
