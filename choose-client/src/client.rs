//! Top-level client bundling every resource client over one transport

use std::sync::Arc;

use tokio::sync::broadcast;

use crate::api::{
    AuthApi, CartApi, CategoriesApi, FeaturedApi, InquiriesApi, OrdersApi, ProductsApi,
    ReplyTemplatesApi, UsersApi, VariantsApi,
};
use crate::session::{SessionExpired, TokenStore};
use crate::{ClientConfig, ClientResult, HttpClient, NetworkHttpClient};

/// Storefront API client
///
/// ```no_run
/// # async fn demo() -> choose_client::ClientResult<()> {
/// use choose_client::{ClientConfig, ShopClient};
///
/// let shop = ShopClient::new(&ClientConfig::default())?;
/// for product in shop.products().get_all().await? {
///     println!("{} ({} in stock)", product.name, product.total_stock);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ShopClient<H = NetworkHttpClient> {
    http: H,
}

impl ShopClient<NetworkHttpClient> {
    /// Build from configuration; the token store follows `config.token_path`
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::from_http(NetworkHttpClient::from_config(config)?))
    }

    /// Build around a caller-owned token store
    pub fn with_token_store(config: &ClientConfig, tokens: Arc<dyn TokenStore>) -> ClientResult<Self> {
        Ok(Self::from_http(NetworkHttpClient::new(config, tokens)?))
    }

    /// Session-expiry notifications, one per 401 response
    pub fn subscribe_session_expired(&self) -> broadcast::Receiver<SessionExpired> {
        self.http.subscribe()
    }
}

impl<H: HttpClient> ShopClient<H> {
    pub fn from_http(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    /// Bearer token currently held, if any
    pub fn token(&self) -> Option<String> {
        self.http.token_store().get()
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn products(&self) -> ProductsApi<'_, H> {
        ProductsApi::new(&self.http)
    }

    pub fn variants(&self) -> VariantsApi<'_, H> {
        VariantsApi::new(&self.http)
    }

    pub fn orders(&self) -> OrdersApi<'_, H> {
        OrdersApi::new(&self.http)
    }

    pub fn inquiries(&self) -> InquiriesApi<'_, H> {
        InquiriesApi::new(&self.http)
    }

    pub fn categories(&self) -> CategoriesApi<'_, H> {
        CategoriesApi::new(&self.http)
    }

    pub fn auth(&self) -> AuthApi<'_, H> {
        AuthApi::new(&self.http)
    }

    pub fn featured(&self) -> FeaturedApi<'_, H> {
        FeaturedApi::new(&self.http)
    }

    pub fn cart(&self) -> CartApi<'_, H> {
        CartApi::new(&self.http)
    }

    pub fn users(&self) -> UsersApi<'_, H> {
        UsersApi::new(&self.http)
    }

    pub fn reply_templates(&self) -> ReplyTemplatesApi<'_, H> {
        ReplyTemplatesApi::new(&self.http)
    }
}
