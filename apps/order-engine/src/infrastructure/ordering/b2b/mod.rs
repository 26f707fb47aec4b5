//! NBN wholesale B2B ordering adapter.

mod adapter;
mod api_types;
mod config;
mod error;
mod http_client;

pub use adapter::B2bOrderingAdapter;
pub use api_types::{B2bOrderRequest, B2bOrderResponse, SUCCESS_STATUS};
pub use config::B2bConfig;
pub use error::B2bError;
pub use http_client::B2bHttpClient;
