pub mod navigator;
pub mod response;
pub mod tours;

pub use response::ServiceResponse;
