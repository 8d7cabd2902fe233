mod upload_asset;

pub use upload_asset::upload_asset_handler;
