mod fanout_service;
mod push_service;

pub use fanout_service::*;
pub use push_service::*;
