#![allow(dead_code)]

//! In-memory gateway fakes shared by the integration tests.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use spacepal_core::cart::CartItem;
use spacepal_core::catalog::{Product, RecommendationQuery, Space, Style};
use spacepal_core::error::Result;
use spacepal_core::gateway::{
    AccountGateway, AdminGateway, AdminResource, CartGateway, CatalogGateway,
    RecommendationGateway,
};
use spacepal_core::session::{Selection, SessionState, SessionStore, SelectionStore};
use spacepal_core::user::{NewUser, User, UserPatch};
use spacepal_core::SpacePalError;

pub fn product(id: &str, price: f64) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        description: String::new(),
        price,
        image_url: String::new(),
        rating: 0.0,
        category: String::new(),
        purchase_link: String::new(),
        reviews: None,
    }
}

/// Products `p<start>` .. `p<end>` inclusive, priced by index.
pub fn product_range(start: u32, end: u32) -> Vec<Product> {
    (start..=end)
        .map(|i| product(&format!("p{}", i), f64::from(i)))
        .collect()
}

/// Session store that lives entirely in memory.
pub struct MemorySession {
    state: Mutex<SessionState>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn logged_in(username: &str, is_admin: bool) -> Self {
        let mut state = SessionState::default();
        state.set_credentials("test-token", username, "u1", is_admin);
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn with_selection(space_id: &str, style_id: &str) -> Self {
        let mut state = SessionState::default();
        state.selection = Selection {
            space_id: space_id.to_string(),
            style_id: style_id.to_string(),
        };
        Self {
            state: Mutex::new(state),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySession {
    async fn state(&self) -> Result<SessionState> {
        Ok(self.state.lock().unwrap().clone())
    }

    async fn set_credentials(
        &self,
        token: String,
        username: String,
        user_id: String,
        is_admin: bool,
    ) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .set_credentials(token, username, user_id, is_admin);
        Ok(())
    }

    async fn clear_credentials(&self) -> Result<()> {
        self.state.lock().unwrap().clear_credentials();
        Ok(())
    }

    async fn access_token(&self) -> Option<String> {
        self.state.lock().unwrap().access_token.clone()
    }

    async fn is_admin(&self) -> bool {
        self.state.lock().unwrap().is_admin
    }
}

#[async_trait]
impl SelectionStore for MemorySession {
    async fn selection(&self) -> Result<Selection> {
        Ok(self.state.lock().unwrap().selection.clone())
    }

    async fn set_space(&self, space_id: String) -> Result<()> {
        self.state.lock().unwrap().selection.space_id = space_id;
        Ok(())
    }

    async fn set_style(&self, style_id: String) -> Result<()> {
        self.state.lock().unwrap().selection.style_id = style_id;
        Ok(())
    }
}

/// Catalogue fake with one space, one style, and an explicit product map.
pub struct FakeCatalog {
    spaces: Vec<Space>,
    styles: Vec<Style>,
    products: Mutex<HashMap<String, Product>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self {
            spaces: vec![Space {
                id: "sp1".to_string(),
                name: "living room".to_string(),
                description: String::new(),
                image: String::new(),
            }],
            styles: vec![Style {
                id: "st1".to_string(),
                name: "modern".to_string(),
                description: String::new(),
                image: String::new(),
            }],
            products: Mutex::new(HashMap::new()),
        }
    }

    pub fn insert_product(&self, product: Product) {
        self.products
            .lock()
            .unwrap()
            .insert(product.id.clone(), product);
    }
}

#[async_trait]
impl CatalogGateway for FakeCatalog {
    async fn spaces(&self) -> Result<Vec<Space>> {
        Ok(self.spaces.clone())
    }

    async fn styles(&self) -> Result<Vec<Style>> {
        Ok(self.styles.clone())
    }

    async fn product(&self, product_id: &str) -> Result<Product> {
        self.products
            .lock()
            .unwrap()
            .get(product_id)
            .cloned()
            .ok_or_else(|| SpacePalError::not_found("product", product_id))
    }
}

/// Recommendation fake serving a scripted sequence of pages.
///
/// Once the script runs out it serves empty pages, like a backend past the
/// end of its result set. Every query is recorded for inspection.
pub struct PagedRecommendations {
    pages: Mutex<VecDeque<Result<Vec<Product>>>>,
    pub queries: Mutex<Vec<RecommendationQuery>>,
}

impl PagedRecommendations {
    pub fn new(pages: Vec<Vec<Product>>) -> Self {
        Self {
            pages: Mutex::new(pages.into_iter().map(Ok).collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        let mut pages = VecDeque::new();
        pages.push_back(Err(SpacePalError::api(500, "backend down")));
        Self {
            pages: Mutex::new(pages),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn push_page(&self, page: Vec<Product>) {
        self.pages.lock().unwrap().push_back(Ok(page));
    }

    pub fn offsets(&self) -> Vec<u32> {
        self.queries.lock().unwrap().iter().map(|q| q.offset).collect()
    }
}

#[async_trait]
impl RecommendationGateway for PagedRecommendations {
    async fn recommendations(&self, query: &RecommendationQuery) -> Result<Vec<Product>> {
        self.queries.lock().unwrap().push(query.clone());
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn similar_products(&self, _product_id: &str, _top_n: u32) -> Result<Vec<Product>> {
        Ok(Vec::new())
    }
}

/// Cart fake that counts every network-shaped call it receives.
pub struct CountingCart {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
    items: Mutex<Vec<CartItem>>,
}

impl CountingCart {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            items: Mutex::new(Vec::new()),
        }
    }

    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: AtomicBool::new(false),
            items: Mutex::new(items),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CartGateway for CountingCart {
    async fn cart(&self, _token: &str) -> Result<Vec<CartItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.items.lock().unwrap().clone())
    }

    async fn add_to_cart(&self, _token: &str, product_id: &str, quantity: u32) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(SpacePalError::api(500, "cart unavailable"));
        }
        self.items.lock().unwrap().push(CartItem {
            product_id: product_id.to_string(),
            quantity,
        });
        Ok(())
    }

    async fn set_quantity(&self, _token: &str, product_id: &str, quantity: u32) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for item in self.items.lock().unwrap().iter_mut() {
            if item.product_id == product_id {
                item.quantity = quantity;
            }
        }
        Ok(())
    }

    async fn remove_from_cart(&self, _token: &str, product_id: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.items
            .lock()
            .unwrap()
            .retain(|item| item.product_id != product_id);
        Ok(())
    }

    async fn clear_cart(&self, _token: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.items.lock().unwrap().clear();
        Ok(())
    }
}

/// Account fake for the auth flows.
pub struct FakeAccount {
    pub reject_token: AtomicBool,
    user: Mutex<User>,
}

impl FakeAccount {
    pub fn new(username: &str) -> Self {
        Self {
            reject_token: AtomicBool::new(false),
            user: Mutex::new(User {
                id: "u1".to_string(),
                username: username.to_string(),
                email: format!("{}@spacepal.dev", username),
            }),
        }
    }
}

#[async_trait]
impl AccountGateway for FakeAccount {
    async fn login(&self, _username: &str, _password: &str) -> Result<String> {
        Ok("test-token".to_string())
    }

    async fn register(&self, user: &NewUser) -> Result<User> {
        Ok(User {
            id: "u-new".to_string(),
            username: user.username.clone(),
            email: user.email.clone(),
        })
    }

    async fn current_user(&self, _token: &str) -> Result<User> {
        if self.reject_token.load(Ordering::SeqCst) {
            return Err(SpacePalError::auth("token expired"));
        }
        Ok(self.user.lock().unwrap().clone())
    }

    async fn update_user(&self, _token: &str, _user_id: &str, patch: &UserPatch) -> Result<User> {
        let mut user = self.user.lock().unwrap();
        if let Some(username) = &patch.username {
            user.username = username.clone();
        }
        if let Some(email) = &patch.email {
            user.email = email.clone();
        }
        Ok(user.clone())
    }
}

/// Review fake issuing sequential ids.
pub struct FakeReviews {
    next_id: AtomicUsize,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeReviews {
    pub fn new() -> Self {
        Self {
            next_id: AtomicUsize::new(1),
            deleted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl spacepal_core::gateway::ReviewGateway for FakeReviews {
    async fn submit_review(
        &self,
        _token: &str,
        _product_id: &str,
        draft: &spacepal_core::review::ReviewDraft,
    ) -> Result<spacepal_core::review::Review> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        Ok(spacepal_core::review::Review {
            id: format!("r{}", id),
            user_id: "u1".to_string(),
            username: "ana".to_string(),
            rating: draft.rating,
            comment: draft.comment.clone(),
            timestamp: None,
        })
    }

    async fn delete_review(&self, _token: &str, _product_id: &str, review_id: &str) -> Result<()> {
        self.deleted.lock().unwrap().push(review_id.to_string());
        Ok(())
    }
}

/// Admin fake counting list calls.
pub struct CountingAdmin {
    pub calls: AtomicUsize,
}

impl CountingAdmin {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdminGateway for CountingAdmin {
    async fn list(&self, _token: &str, _resource: AdminResource) -> Result<Vec<serde_json::Value>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }

    async fn create(
        &self,
        _token: &str,
        _resource: AdminResource,
        record: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(record.clone())
    }

    async fn update(
        &self,
        _token: &str,
        _resource: AdminResource,
        _id: &str,
        record: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(record.clone())
    }

    async fn delete(&self, _token: &str, _resource: AdminResource, _id: &str) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
