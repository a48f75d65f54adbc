pub mod link_args;
pub mod patterns;
pub mod ports;
pub mod stream;
