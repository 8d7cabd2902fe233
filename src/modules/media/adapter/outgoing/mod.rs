mod asset_store_http;

pub use asset_store_http::{AssetStoreConfig, AssetStoreHttp};
