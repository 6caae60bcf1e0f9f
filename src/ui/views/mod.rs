pub mod configure;
pub mod quiz;
pub mod summary;
