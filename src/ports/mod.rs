pub mod status_source;

pub use status_source::{
    ClusterSource, DatabaseSource, FetchError, GatewaySource, LoadBalancerSource, StaticSiteSource,
};
