pub mod mocks;
pub mod responses;
