pub mod check;
pub mod get;
pub mod helper;
pub mod init;
pub mod locales;
pub mod page;
