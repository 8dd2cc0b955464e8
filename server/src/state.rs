use marketplace_sdk::MarketplaceSdk;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// The marketplace SDK instance. The catalog and gap tables are
    /// immutable after startup, so handlers share it read-only.
    pub sdk: MarketplaceSdk,
}

impl AppState {
    pub fn new(sdk: MarketplaceSdk) -> Self {
        Self { sdk }
    }
}
