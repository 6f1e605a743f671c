pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod model;
pub mod req;
pub mod request;
pub mod window;
