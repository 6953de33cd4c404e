//! Async REST client for the remote inventory API.
//!
//! All list reads go through the [`ListCache`]; all mutations invalidate
//! the tag they touch on success, so the next read observes the change.
//! A 401 from any endpoint clears the stored session before the error is
//! returned.

use std::sync::{Mutex, MutexGuard, PoisonError};

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use serde::Deserialize;

use stocklens_catalog::{Category, NewProduct, NewUser, Product, ProductPatch, User};
use stocklens_core::{ProductId, UserId};

use crate::cache::{CacheOutcome, EntityTag, ListCache, ProductQuery};
use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};
use crate::session::{Session, SessionStore};

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Debug, Deserialize)]
struct SignInResponse {
    token: String,
    user: User,
}

/// Client handle for the remote inventory API.
#[derive(Debug)]
pub struct ApiGateway {
    http: reqwest::Client,
    config: GatewayConfig,
    session: SessionStore,
    cache: Mutex<ListCache>,
}

impl ApiGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: SessionStore::new(),
            cache: Mutex::new(ListCache::new()),
        }
    }

    pub fn from_env() -> Self {
        Self::new(GatewayConfig::from_env())
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Authenticate and store the returned session for subsequent calls.
    pub async fn sign_in(&self, email: &str, password: &str) -> GatewayResult<Session> {
        let request = self
            .http
            .post(self.config.endpoint("/users/signin"))
            .json(&serde_json::json!({ "email": email, "password": password }));
        let body: SignInResponse = self.execute(request).await?.json().await?;
        let session = Session {
            token: body.token,
            user: body.user,
        };
        self.session.store(session.clone());
        tracing::info!(email, "signed in");
        Ok(session)
    }

    pub fn sign_out(&self) {
        self.session.clear();
    }

    pub async fn list_products(&self, query: &ProductQuery) -> GatewayResult<Vec<Product>> {
        if let Some(cached) = self.cache().products_get(query) {
            tracing::debug!(?query, "product list served from cache");
            return Ok(cached);
        }
        let ticket = self.cache().products_begin(query.clone());

        let mut request = self.http.get(self.config.endpoint("/products"));
        if let Some(search) = &query.search {
            request = request.query(&[("search", search.as_str())]);
        }
        if let Some(category) = &query.category_id {
            request = request.query(&[("categoryId", category.as_str())]);
        }

        let products: Vec<Product> = self.execute(request).await?.json().await?;
        if self.cache().products_complete(ticket, products.clone()) == CacheOutcome::Discarded {
            tracing::debug!(?query, "stale product list response discarded");
        }
        Ok(products)
    }

    pub async fn list_categories(&self) -> GatewayResult<Vec<Category>> {
        if let Some(cached) = self.cache().categories_get() {
            return Ok(cached);
        }
        let ticket = self.cache().categories_begin();
        let request = self.http.get(self.config.endpoint("/products/categories"));
        let categories: Vec<Category> = self.execute(request).await?.json().await?;
        if self.cache().categories_complete(ticket, categories.clone()) == CacheOutcome::Discarded {
            tracing::debug!("stale category list response discarded");
        }
        Ok(categories)
    }

    pub async fn create_product(
        &self,
        new: &NewProduct,
        photo: Option<Vec<u8>>,
    ) -> GatewayResult<Product> {
        new.validate()?;
        let request = self
            .http
            .post(self.config.endpoint("/products"))
            .multipart(new_product_form(new, photo));
        let product: Product = self.execute(request).await?.json().await?;
        self.cache().invalidate(EntityTag::Products);
        Ok(product)
    }

    pub async fn update_product(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
        photo: Option<Vec<u8>>,
    ) -> GatewayResult<Product> {
        patch.validate()?;
        let request = self
            .http
            .put(self.config.endpoint(&format!("/products/{}", id.as_str())))
            .multipart(patch_form(patch, photo));
        let product: Product = self.execute(request).await?.json().await?;
        self.cache().invalidate(EntityTag::Products);
        Ok(product)
    }

    pub async fn delete_product(&self, id: &ProductId) -> GatewayResult<()> {
        let request = self
            .http
            .delete(self.config.endpoint(&format!("/products/{}", id.as_str())));
        self.execute(request).await?;
        self.cache().invalidate(EntityTag::Products);
        Ok(())
    }

    pub async fn list_users(&self) -> GatewayResult<Vec<User>> {
        if let Some(cached) = self.cache().users_get() {
            return Ok(cached);
        }
        let ticket = self.cache().users_begin();
        let request = self.http.get(self.config.endpoint("/users"));
        let users: Vec<User> = self.execute(request).await?.json().await?;
        if self.cache().users_complete(ticket, users.clone()) == CacheOutcome::Discarded {
            tracing::debug!("stale user list response discarded");
        }
        Ok(users)
    }

    pub async fn create_user(&self, new: &NewUser) -> GatewayResult<User> {
        new.validate()?;
        let request = self.http.post(self.config.endpoint("/users")).json(new);
        let user: User = self.execute(request).await?.json().await?;
        self.cache().invalidate(EntityTag::Users);
        Ok(user)
    }

    pub async fn delete_user(&self, id: &UserId) -> GatewayResult<()> {
        let request = self
            .http
            .delete(self.config.endpoint(&format!("/users/{}", id.as_str())));
        self.execute(request).await?;
        self.cache().invalidate(EntityTag::Users);
        Ok(())
    }

    /// Attach the bearer token, send, and map non-success statuses into
    /// [`GatewayError`].
    async fn execute(&self, request: reqwest::RequestBuilder) -> GatewayResult<Response> {
        let request = match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            self.session.clear();
            return Err(GatewayError::SessionExpired);
        }
        if !status.is_success() {
            let message = error_message(response).await;
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    fn cache(&self) -> MutexGuard<'_, ListCache> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Pull the server's `{"message": ...}` out of an error response, falling
/// back to the HTTP reason phrase.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ApiErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    }
}

fn new_product_form(new: &NewProduct, photo: Option<Vec<u8>>) -> Form {
    let mut form = Form::new()
        .text("name", new.name.clone())
        .text("price", new.price.to_string())
        .text("stockQuantity", new.stock_quantity.to_string());
    if let Some(id) = &new.category_id {
        form = form.text("categoryId", id.as_str().to_string());
    }
    if let Some(supplier) = &new.supplier {
        form = form.text("supplier", supplier.clone());
    }
    if let Some(sku) = &new.sku {
        form = form.text("sku", sku.clone());
    }
    if let Some(location) = &new.location {
        form = form.text("location", location.clone());
    }
    if let Some(rating) = new.rating {
        form = form.text("rating", rating.to_string());
    }
    attach_photo(form, photo)
}

fn patch_form(patch: &ProductPatch, photo: Option<Vec<u8>>) -> Form {
    let mut form = Form::new();
    if let Some(name) = &patch.name {
        form = form.text("name", name.clone());
    }
    if let Some(price) = patch.price {
        form = form.text("price", price.to_string());
    }
    if let Some(stock) = patch.stock_quantity {
        form = form.text("stockQuantity", stock.to_string());
    }
    if let Some(id) = &patch.category_id {
        form = form.text("categoryId", id.as_str().to_string());
    }
    if let Some(supplier) = &patch.supplier {
        form = form.text("supplier", supplier.clone());
    }
    if let Some(sku) = &patch.sku {
        form = form.text("sku", sku.clone());
    }
    if let Some(location) = &patch.location {
        form = form.text("location", location.clone());
    }
    if let Some(rating) = patch.rating {
        form = form.text("rating", rating.to_string());
    }
    attach_photo(form, photo)
}

fn attach_photo(form: Form, photo: Option<Vec<u8>>) -> Form {
    match photo {
        Some(bytes) => form.part("photo", Part::bytes(bytes).file_name("photo")),
        None => form,
    }
}
