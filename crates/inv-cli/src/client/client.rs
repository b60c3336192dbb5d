use crate::client::navigator::Navigator;
use crate::{ClientError, ClientResult};

use std::sync::Arc;

use inv_auth::{LOGIN_PATH, SessionStore};
use inv_config::BackendRoutes;
use inv_core::{
    AuthResponse, InventoryItem, LowStockAlert, Order, OrderNotification, OrderRequest, Page,
    SignupRequest, UserAccount,
};
use log::warn;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;

/// Session state shared between the dispatcher, the guard, and the views.
pub type SharedSessionStore = Arc<RwLock<SessionStore>>;

/// HTTP client for the dashboard's backend services.
///
/// Each logical path is resolved against the backend route table, credentials
/// are attached from the shared session store, and a 401 from any service
/// forces a logout plus a redirect to the login screen before the error
/// reaches the caller.
pub struct Client {
    routes: BackendRoutes,
    session: SharedSessionStore,
    navigator: Arc<dyn Navigator>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `routes` - Ordered prefix table mapping logical paths to backends
    /// * `session` - Shared session store; read for credential attachment
    /// * `navigator` - Redirect hook for forced navigation on 401
    pub fn new(
        routes: BackendRoutes,
        session: SharedSessionStore,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            routes,
            session,
            navigator,
            client: ReqwestClient::new(),
        }
    }

    /// Build a request against the backend serving `path`, with the bearer
    /// credential attached when a session exists.
    async fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = self.routes.url_for(path);
        let mut req = self.client.request(method, &url);

        let token = self.session.read().await.token().map(String::from);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute a request and decode the JSON response.
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = self.checked(req).await?;
        response.json::<T>().await.map_err(ClientError::from_reqwest)
    }

    /// Execute a request whose response body is plain text.
    async fn execute_text(&self, req: reqwest::RequestBuilder) -> ClientResult<String> {
        let response = self.checked(req).await?;
        response.text().await.map_err(ClientError::from_reqwest)
    }

    /// Execute a request and discard the response body.
    async fn execute_empty(&self, req: reqwest::RequestBuilder) -> ClientResult<()> {
        self.checked(req).await?;
        Ok(())
    }

    /// Send a request and map failure statuses to errors. 401 additionally
    /// triggers the global auth-rejection handling before propagating.
    async fn checked(&self, req: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            let message = error_message(response).await;
            self.handle_auth_rejection().await;
            return Err(ClientError::unauthorized(message));
        }

        if !status.is_success() {
            let message = error_message(response).await;
            return Err(ClientError::api(status.as_u16(), message));
        }

        Ok(response)
    }

    /// Forced logout on a 401, exactly once per failure.
    ///
    /// Runs under the session write lock so overlapping failures serialize:
    /// the first one clears the session and redirects, later ones find
    /// nothing left to do. No redirect fires when the login screen is
    /// already current, so a failed login cannot loop.
    async fn handle_auth_rejection(&self) {
        let mut store = self.session.write().await;

        if store.is_authenticated() {
            warn!("Authentication rejected by backend; clearing session");
            store.logout();
        }

        if self.navigator.location() != LOGIN_PATH {
            self.navigator.navigate(LOGIN_PATH);
        }
    }

    // =========================================================================
    // Auth Operations
    // =========================================================================

    /// Exchange credentials for a token. Sent unauthenticated.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { username, password };
        let req = self
            .request(Method::POST, "/api/auth/login")
            .await
            .json(&body);
        self.execute(req).await
    }

    /// Register a new account. Sent unauthenticated.
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<UserAccount> {
        let req = self
            .request(Method::POST, "/api/auth/signup")
            .await
            .json(request);
        self.execute(req).await
    }

    /// List all registered users
    pub async fn list_users(&self) -> ClientResult<Vec<UserAccount>> {
        let req = self.request(Method::GET, "/api/auth/users").await;
        self.execute(req).await
    }

    /// Look up the email behind a username
    pub async fn email_for(&self, username: &str) -> ClientResult<String> {
        let req = self
            .request(Method::GET, &format!("/api/auth/email/{username}"))
            .await;
        self.execute_text(req).await
    }

    // =========================================================================
    // Inventory Operations
    // =========================================================================

    /// List all inventory items
    pub async fn list_inventory(&self) -> ClientResult<Vec<InventoryItem>> {
        let req = self.request(Method::GET, "/api/inventory").await;
        self.execute(req).await
    }

    /// Get an inventory item by ID
    pub async fn get_item(&self, id: i64) -> ClientResult<InventoryItem> {
        let req = self
            .request(Method::GET, &format!("/api/inventory/{id}"))
            .await;
        self.execute(req).await
    }

    /// Get an inventory item by SKU code
    pub async fn get_item_by_sku(&self, sku_code: &str) -> ClientResult<InventoryItem> {
        let req = self
            .request(Method::GET, &format!("/api/inventory/sku/{sku_code}"))
            .await;
        self.execute(req).await
    }

    /// Create a new inventory item
    pub async fn create_item(&self, item: &InventoryItem) -> ClientResult<InventoryItem> {
        let req = self.request(Method::POST, "/api/inventory").await.json(item);
        self.execute(req).await
    }

    /// Update an inventory item
    pub async fn update_item(&self, id: i64, item: &InventoryItem) -> ClientResult<InventoryItem> {
        let req = self
            .request(Method::PUT, &format!("/api/inventory/{id}"))
            .await
            .json(item);
        self.execute(req).await
    }

    /// Delete an inventory item
    pub async fn delete_item(&self, id: i64) -> ClientResult<()> {
        let req = self
            .request(Method::DELETE, &format!("/api/inventory/{id}"))
            .await;
        self.execute_empty(req).await
    }

    // =========================================================================
    // Order Operations
    // =========================================================================

    /// List orders, one page at a time
    pub async fn list_orders(&self, page: i64, size: i64) -> ClientResult<Page<Order>> {
        let req = self
            .request(Method::GET, &format!("/api/orders?page={page}&size={size}"))
            .await;
        self.execute(req).await
    }

    /// Get an order by ID
    pub async fn get_order(&self, id: i64) -> ClientResult<Order> {
        let req = self.request(Method::GET, &format!("/api/orders/{id}")).await;
        self.execute(req).await
    }

    /// Place a new order
    pub async fn place_order(&self, request: &OrderRequest) -> ClientResult<Order> {
        let req = self.request(Method::POST, "/api/orders").await.json(request);
        self.execute(req).await
    }

    /// Update an order
    pub async fn update_order(&self, id: i64, request: &OrderRequest) -> ClientResult<Order> {
        let req = self
            .request(Method::PUT, &format!("/api/orders/{id}"))
            .await
            .json(request);
        self.execute(req).await
    }

    /// Delete an order
    pub async fn delete_order(&self, id: i64) -> ClientResult<()> {
        let req = self
            .request(Method::DELETE, &format!("/api/orders/{id}"))
            .await;
        self.execute_empty(req).await
    }

    // =========================================================================
    // Notification Operations
    // =========================================================================

    /// Send a low-stock alert email
    pub async fn send_low_stock_alert(&self, alert: &LowStockAlert) -> ClientResult<String> {
        let req = self
            .request(Method::POST, "/api/notifications/low-stock")
            .await
            .json(alert);
        self.execute_text(req).await
    }

    /// Send an order confirmation email
    pub async fn send_order_notification(
        &self,
        notification: &OrderNotification,
    ) -> ClientResult<String> {
        let req = self
            .request(Method::POST, "/api/notifications/order")
            .await
            .json(notification);
        self.execute_text(req).await
    }
}

/// Pull a human-readable message out of an error response body.
///
/// The services answer with either `{"message": ...}` or `{"error": ...}`;
/// anything else falls back to the bare status line.
async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();

    match response.json::<Value>().await {
        Ok(body) => body
            .get("message")
            .or_else(|| body.get("error"))
            .and_then(Value::as_str)
            .map(String::from)
            .unwrap_or_else(|| format!("HTTP {status}")),
        Err(_) => format!("HTTP {status}"),
    }
}
