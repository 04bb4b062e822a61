//! Service wiring for the CLI.

use std::sync::Arc;

use anyhow::Result;
use spacepal_api::SpacePalClient;
use spacepal_application::{
    AdminService, AuthService, CartService, CatalogueLoader, HistoryRecorder, ProductService,
    ProfileService,
};
use spacepal_infrastructure::{ConfigService, TomlSessionStore};

/// The wired-up application: one HTTP client, one session store, and the
/// services built on top of them.
pub struct App {
    pub client: Arc<SpacePalClient>,
    pub session: Arc<TomlSessionStore>,
    pub auth: AuthService,
    pub cart: CartService,
    pub products: ProductService,
    pub profile: ProfileService,
    pub history: HistoryRecorder,
    pub admin: AdminService,
}

impl App {
    pub fn init() -> Result<Self> {
        let config = ConfigService::new_default()?.load()?;
        let client = Arc::new(SpacePalClient::new(&config)?);
        let session = Arc::new(TomlSessionStore::new_default()?);

        Ok(Self {
            auth: AuthService::new(client.clone(), session.clone()),
            cart: CartService::new(client.clone(), client.clone(), session.clone()),
            products: ProductService::new(
                client.clone(),
                client.clone(),
                client.clone(),
                session.clone(),
            ),
            profile: ProfileService::new(client.clone(), session.clone()),
            history: HistoryRecorder::new(client.clone(), session.clone()),
            admin: AdminService::new(client.clone(), session.clone()),
            client,
            session,
        })
    }

    /// A fresh catalogue loader over the current selection.
    pub fn catalogue(&self) -> CatalogueLoader {
        CatalogueLoader::new(
            self.client.clone(),
            self.client.clone(),
            self.session.clone(),
        )
    }
}
