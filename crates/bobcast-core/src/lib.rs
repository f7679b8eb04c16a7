pub mod config;
pub mod logging;

pub mod appcast;
pub mod checksum;
pub mod error;
pub mod json_io;
pub mod layout;
pub mod metadata;
pub mod release;
