pub mod ask;
pub mod server;
