pub mod demo;
pub mod init;
pub mod screenshots;
pub mod serve;
pub mod show;
