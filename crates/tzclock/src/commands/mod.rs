pub mod banner;
pub mod doctor;
pub mod init;
pub mod list;
pub mod now;
pub mod start;
