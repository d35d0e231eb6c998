use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::http::ApiClient;
use crate::features::auth::clients::HttpAuthClient;
use crate::features::auth::model::Session;
use crate::features::auth::session::SessionStore;
use crate::features::auth::AuthService;
use crate::features::categories::clients::HttpCategoryClient;
use crate::features::categories::CategoryService;
use crate::features::products::clients::{
    HttpProductClient, HttpProductImageClient, HttpVariantClient,
};
use crate::features::products::{ImageService, ProductService, VariantService};
use crate::features::quotes::clients::HttpQuoteClient;
use crate::features::quotes::QuoteService;

/// Initializes the tracing subscriber. Call once at startup; respects
/// `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wired service graph for the storefront backend.
///
/// All services share one HTTP client and one session store, so logging in
/// through [`Storefront::auth`] authorizes every subsequent call.
pub struct Storefront {
    pub session: Arc<SessionStore>,
    pub auth: AuthService,
    pub categories: CategoryService,
    pub products: ProductService,
    pub variants: VariantService,
    pub images: ImageService,
    pub quotes: QuoteService,
}

impl Storefront {
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_session(config, None)
    }

    /// Wires the service graph, optionally restoring a persisted session
    pub fn with_session(config: &Config, session: Option<Session>) -> Result<Self> {
        let session = Arc::new(SessionStore::restore(session));
        let api = Arc::new(ApiClient::new(&config.api, Arc::clone(&session))?);

        let storefront = Self {
            auth: AuthService::new(
                Arc::new(HttpAuthClient::new(Arc::clone(&api))),
                Arc::clone(&session),
            ),
            categories: CategoryService::new(Arc::new(HttpCategoryClient::new(Arc::clone(&api)))),
            products: ProductService::new(Arc::new(HttpProductClient::new(Arc::clone(&api)))),
            variants: VariantService::new(Arc::new(HttpVariantClient::new(Arc::clone(&api)))),
            images: ImageService::new(Arc::new(HttpProductImageClient::new(Arc::clone(&api)))),
            quotes: QuoteService::new(
                Arc::new(HttpQuoteClient::new(Arc::clone(&api))),
                Arc::clone(&session),
            ),
            session,
        };

        tracing::info!("Storefront services wired against {}", config.api.base_url);
        Ok(storefront)
    }

    /// Reads configuration from the environment (and .env) and wires services
    pub fn from_env() -> Result<Self> {
        let config = Config::from_env().map_err(crate::core::error::AppError::Internal)?;
        Self::new(&config)
    }
}
