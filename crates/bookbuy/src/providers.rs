pub mod base;
pub mod configs;
pub mod http;
pub mod reply;

#[cfg(test)]
pub mod mock;
