pub mod console;
pub mod http_client;
