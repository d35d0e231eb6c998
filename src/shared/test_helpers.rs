//! In-memory fakes and fixtures shared by the service tests.
//!
//! Each fake implements one of the client API traits over a `Mutex`-guarded
//! `Vec`, close enough to the backend's behavior for workflow tests: ids are
//! assigned sequentially, lookups miss with `NotFound`, and a few knobs exist
//! for injecting failures.

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::core::error::{AppError, Result};
use crate::features::auth::clients::AuthApi;
use crate::features::auth::dtos::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
use crate::features::auth::model::{AuthenticatedUser, Session};
use crate::features::auth::session::SessionStore;
use crate::features::categories::clients::CategoryApi;
use crate::features::categories::dtos::{CreateCategoryRequest, UpdateCategoryRequest};
use crate::features::categories::models::Category;
use crate::features::products::clients::{ProductApi, ProductImageApi, ProductVariantApi};
use crate::features::products::dtos::{
    CreateProductRequest, CreateVariantRequest, ImageUpload, ProductSearchQuery,
    UpdateProductRequest, UpdateVariantRequest,
};
use crate::features::products::models::{Product, ProductImage, ProductVariant};
use crate::features::quotes::clients::QuoteApi;
use crate::features::quotes::dtos::{CreateQuoteRequest, LookupQuoteRequest, UpdateQuoteRequest};
use crate::features::quotes::models::{QuoteRequest, QuoteStatus};
use crate::shared::constants::ROLE_ADMIN;
use crate::shared::types::{Page, PaginationQuery};

// =============================================================================
// FIXTURES
// =============================================================================

pub fn category(id: i64, name: &str, parent_id: Option<i64>) -> Category {
    Category {
        id,
        name: name.to_string(),
        description: None,
        parent_id,
    }
}

pub fn product(id: i64, name: &str, category_id: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: None,
        category_id,
        variants: vec![],
        images: vec![],
    }
}

pub fn variant(id: i64, product_id: i64, sku: &str) -> ProductVariant {
    ProductVariant {
        id,
        product_id,
        sku: sku.to_string(),
        size: "900x2100".to_string(),
        current_price: Decimal::new(100_000, 0),
        stock_quantity: 1,
    }
}

pub fn quote_request(id: i64, mobile: &str, status: QuoteStatus) -> QuoteRequest {
    QuoteRequest {
        id,
        request_type: Default::default(),
        status,
        product_id: 4,
        quantity: Some(1),
        name: "Kim Minsu".to_string(),
        phone: None,
        mobile: mobile.to_string(),
        email: "minsu@example.com".to_string(),
        message: "Two fire doors".to_string(),
        password: Some("1234".to_string()),
        admin_response: None,
        created_at: None,
    }
}

pub fn image_upload(file_name: &str) -> ImageUpload {
    ImageUpload {
        file_name: file_name.to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

/// Session store pre-filled with an ADMIN session
pub fn admin_session() -> Arc<SessionStore> {
    let store = SessionStore::new();
    store.set(Session {
        token: "test-token".to_string(),
        user: AuthenticatedUser {
            id: 1,
            username: "admin".to_string(),
            role: ROLE_ADMIN.to_string(),
        },
        admin: true,
    });
    Arc::new(store)
}

fn page_of<T>(content: Vec<T>, query: &PaginationQuery) -> Page<T> {
    let total = content.len() as i64;
    Page {
        total_pages: (total + query.limit() - 1) / query.limit(),
        total_elements: total,
        number: query.zero_based(),
        size: query.limit(),
        content,
    }
}

fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i64) -> i64 {
    items.iter().map(id_of).max().unwrap_or(0) + 1
}

// =============================================================================
// AUTH
// =============================================================================

pub struct FakeAuthApi {
    username: String,
    password: String,
    role: String,
}

impl FakeAuthApi {
    pub fn with_user(username: &str, password: &str, role: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        if request.username == self.username && request.password == self.password {
            Ok(LoginResponse {
                token: "test-token".to_string(),
                id: 1,
                username: self.username.clone(),
                role: self.role.clone(),
                admin: self.role == ROLE_ADMIN,
            })
        } else {
            Err(AppError::Unauthorized("Invalid credentials".to_string()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<RegisterResponse> {
        if request.username == self.username {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }
        Ok(RegisterResponse {
            id: 2,
            username: request.username.clone(),
        })
    }
}

// =============================================================================
// CATEGORIES
// =============================================================================

pub struct FakeCategoryApi {
    categories: Mutex<Vec<Category>>,
    update_calls: AtomicUsize,
    fail_next_update: AtomicBool,
}

impl FakeCategoryApi {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
            update_calls: AtomicUsize::new(0),
            fail_next_update: AtomicBool::new(false),
        }
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn parent_of(&self, id: i64) -> Option<i64> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .and_then(|c| c.parent_id)
    }

    pub fn fail_next_update(&self) {
        self.fail_next_update.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl CategoryApi for FakeCategoryApi {
    async fn list(&self) -> Result<Vec<Category>> {
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn get(&self, id: i64) -> Result<Category> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }

    async fn create(&self, request: &CreateCategoryRequest) -> Result<Category> {
        let mut categories = self.categories.lock().unwrap();
        let created = Category {
            id: next_id(&categories, |c| c.id),
            name: request.name.clone(),
            description: request.description.clone(),
            parent_id: request.parent_id,
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, request: &UpdateCategoryRequest) -> Result<Category> {
        if self.fail_next_update.swap(false, Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "Simulated update failure".to_string(),
            ));
        }
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        let mut categories = self.categories.lock().unwrap();
        let found = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))?;
        found.name = request.name.clone();
        found.description = request.description.clone();
        found.parent_id = request.parent_id;
        Ok(found.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut categories = self.categories.lock().unwrap();
        let before = categories.len();
        categories.retain(|c| c.id != id);
        if categories.len() == before {
            return Err(AppError::NotFound(format!("Category {} not found", id)));
        }
        Ok(())
    }

    async fn roots(&self) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_id.is_none())
            .cloned()
            .collect())
    }

    async fn subcategories(&self, parent_id: i64) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.parent_id == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn descendants(&self, id: i64) -> Result<Vec<Category>> {
        let categories = self.categories.lock().unwrap().clone();
        let mut frontier = vec![id];
        let mut found = Vec::new();
        while let Some(current) = frontier.pop() {
            for child in categories.iter().filter(|c| c.parent_id == Some(current)) {
                frontier.push(child.id);
                found.push(child.clone());
            }
        }
        Ok(found)
    }

    async fn by_name(&self, name: &str) -> Result<Category> {
        self.categories
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Category '{}' not found", name)))
    }

    async fn by_depth(&self, depth: i32) -> Result<Vec<Category>> {
        let categories = self.categories.lock().unwrap().clone();
        let mut level: Vec<Category> = categories
            .iter()
            .filter(|c| c.parent_id.is_none())
            .cloned()
            .collect();
        for _ in 0..depth {
            level = categories
                .iter()
                .filter(|c| {
                    c.parent_id
                        .map(|p| level.iter().any(|l| l.id == p))
                        .unwrap_or(false)
                })
                .cloned()
                .collect();
        }
        Ok(level)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Category>> {
        Ok(self
            .categories
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.name.contains(keyword))
            .cloned()
            .collect())
    }
}

// =============================================================================
// PRODUCTS
// =============================================================================

pub struct FakeProductApi {
    products: Mutex<Vec<Product>>,
    create_calls: AtomicUsize,
}

impl FakeProductApi {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductApi for FakeProductApi {
    async fn list(&self, page: &PaginationQuery) -> Result<Page<Product>> {
        Ok(page_of(self.products.lock().unwrap().clone(), page))
    }

    async fn get(&self, id: i64) -> Result<Product> {
        self.products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }

    async fn create(&self, request: &CreateProductRequest) -> Result<Product> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut products = self.products.lock().unwrap();
        let created = Product {
            id: next_id(&products, |p| p.id),
            name: request.name.clone(),
            description: request.description.clone(),
            category_id: request.category_id,
            variants: vec![],
            images: vec![],
        };
        products.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, request: &UpdateProductRequest) -> Result<Product> {
        let mut products = self.products.lock().unwrap();
        let found = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))?;
        found.name = request.name.clone();
        found.description = request.description.clone();
        found.category_id = request.category_id;
        Ok(found.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.products.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn search(&self, query: &ProductSearchQuery) -> Result<Page<Product>> {
        let matches: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.name.contains(&query.keyword))
            .filter(|p| query.category_id.map_or(true, |c| p.category_id == c))
            .cloned()
            .collect();
        Ok(page_of(matches, &query.page))
    }
}

pub struct FakeVariantApi {
    variants: Mutex<Vec<ProductVariant>>,
    create_calls: AtomicUsize,
}

impl FakeVariantApi {
    pub fn new(variants: Vec<ProductVariant>) -> Self {
        Self {
            variants: Mutex::new(variants),
            create_calls: AtomicUsize::new(0),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ProductVariantApi for FakeVariantApi {
    async fn by_product(&self, product_id: i64) -> Result<Vec<ProductVariant>> {
        Ok(self
            .variants
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<ProductVariant> {
        self.variants
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Variant {} not found", id)))
    }

    async fn create(&self, request: &CreateVariantRequest) -> Result<ProductVariant> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut variants = self.variants.lock().unwrap();
        let created = ProductVariant {
            id: next_id(&variants, |v| v.id),
            product_id: request.product_id,
            sku: request.sku.clone(),
            size: request.size.clone(),
            current_price: request.current_price,
            stock_quantity: request.stock_quantity,
        };
        variants.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, request: &UpdateVariantRequest) -> Result<ProductVariant> {
        let mut variants = self.variants.lock().unwrap();
        let found = variants
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Variant {} not found", id)))?;
        found.sku = request.sku.clone();
        found.size = request.size.clone();
        found.current_price = request.current_price;
        found.stock_quantity = request.stock_quantity;
        Ok(found.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.variants.lock().unwrap().retain(|v| v.id != id);
        Ok(())
    }
}

pub struct FakeProductImageApi {
    images: Mutex<Vec<ProductImage>>,
    failing_names: Mutex<Vec<String>>,
}

impl FakeProductImageApi {
    pub fn new() -> Self {
        Self {
            images: Mutex::new(vec![]),
            failing_names: Mutex::new(vec![]),
        }
    }

    /// Make uploads of this file name fail with an external service error
    pub fn fail_for(&self, file_name: &str) {
        self.failing_names.lock().unwrap().push(file_name.to_string());
    }
}

#[async_trait]
impl ProductImageApi for FakeProductImageApi {
    async fn by_product(&self, product_id: i64) -> Result<Vec<ProductImage>> {
        Ok(self
            .images
            .lock()
            .unwrap()
            .iter()
            .filter(|i| i.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<ProductImage> {
        self.images
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Image {} not found", id)))
    }

    async fn upload(&self, product_id: i64, upload: &ImageUpload) -> Result<ProductImage> {
        if self
            .failing_names
            .lock()
            .unwrap()
            .contains(&upload.file_name)
        {
            return Err(AppError::ExternalServiceError(format!(
                "Upload of {} failed",
                upload.file_name
            )));
        }
        let mut images = self.images.lock().unwrap();
        let created = ProductImage {
            id: next_id(&images, |i| i.id),
            product_id,
            file_name: upload.file_name.clone(),
            image_url: format!("/files/{}", upload.file_name),
        };
        images.push(created.clone());
        Ok(created)
    }

    async fn replace(&self, id: i64, upload: &ImageUpload) -> Result<ProductImage> {
        let mut images = self.images.lock().unwrap();
        let found = images
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Image {} not found", id)))?;
        found.file_name = upload.file_name.clone();
        found.image_url = format!("/files/{}", upload.file_name);
        Ok(found.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.images.lock().unwrap().retain(|i| i.id != id);
        Ok(())
    }

    async fn delete_by_product(&self, product_id: i64) -> Result<()> {
        self.images
            .lock()
            .unwrap()
            .retain(|i| i.product_id != product_id);
        Ok(())
    }

    fn file_url(&self, file_name: &str) -> String {
        format!("/files/{}", file_name)
    }
}

// =============================================================================
// QUOTES
// =============================================================================

pub struct FakeQuoteApi {
    requests: Mutex<Vec<QuoteRequest>>,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl FakeQuoteApi {
    pub fn new(requests: Vec<QuoteRequest>) -> Self {
        Self {
            requests: Mutex::new(requests),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteApi for FakeQuoteApi {
    async fn list(&self, page: &PaginationQuery) -> Result<Page<QuoteRequest>> {
        Ok(page_of(self.requests.lock().unwrap().clone(), page))
    }

    async fn get(&self, id: i64) -> Result<QuoteRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Quote request {} not found", id)))
    }

    async fn create(&self, request: &CreateQuoteRequest) -> Result<QuoteRequest> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let mut requests = self.requests.lock().unwrap();
        let created = QuoteRequest {
            id: next_id(&requests, |r| r.id),
            request_type: request.request_type,
            status: request.status,
            product_id: request.product_id,
            quantity: request.quantity,
            name: request.name.clone(),
            phone: request.phone.clone(),
            mobile: request.mobile.clone(),
            email: request.email.clone(),
            message: request.message.clone(),
            password: Some(request.password.clone()),
            admin_response: None,
            created_at: None,
        };
        requests.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, request: &UpdateQuoteRequest) -> Result<QuoteRequest> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut requests = self.requests.lock().unwrap();
        let found = requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Quote request {} not found", id)))?;
        found.status = request.status;
        found.request_type = request.request_type;
        found.admin_response = request.admin_response.clone();
        Ok(found.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut requests = self.requests.lock().unwrap();
        let before = requests.len();
        requests.retain(|r| r.id != id);
        if requests.len() == before {
            return Err(AppError::NotFound(format!(
                "Quote request {} not found",
                id
            )));
        }
        Ok(())
    }

    async fn check(&self, lookup: &LookupQuoteRequest) -> Result<QuoteRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| {
                r.mobile == lookup.mobile && r.password.as_deref() == Some(lookup.password.as_str())
            })
            .cloned()
            .ok_or_else(|| AppError::NotFound("No matching quote request".to_string()))
    }
}
