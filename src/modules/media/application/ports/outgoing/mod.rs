mod asset_store;

pub use asset_store::{public_id_from_url, AssetStore, AssetStoreError};
