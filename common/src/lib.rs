pub mod aws_clients;
pub mod config;
pub mod deserializers;

#[cfg(feature = "test_tools")]
pub mod test_tools;
