use std::sync::Arc;

use crate::{collection::CollectionClient, config::Config};

pub struct AppState {
    pub config: Config,
    pub collection: CollectionClient,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Arc<Self> {
        let collection =
            CollectionClient::new(&config.collection_url).expect("COLLECTION_URL misconfigured!");

        Arc::new(Self { config, collection })
    }
}
