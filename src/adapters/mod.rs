pub mod rest;

pub use rest::{ProviderEndpoint, RestAdapter, RestSettings};
