//! Process wiring: file store, router, gateway and session listener

use anyhow::{Context, Result};
use colored::Colorize;
use noise_client::{ClientConfig, Gateway, SessionController};
use noise_core::{
    FileSessionStore, Navigation, RouteTable, Router, SessionStore, LOGIN_PATH, ROOT_PATH,
};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::debug;

pub struct App {
    pub config: ClientConfig,
    pub store: Arc<FileSessionStore>,
    pub router: Arc<Router>,
    pub controller: SessionController,
    gateway: Gateway,
    listener: JoinHandle<()>,
    signed_in: bool,
}

impl App {
    pub fn init() -> Result<Self> {
        let config = ClientConfig::load().context("Failed to load configuration")?;
        let store = Arc::new(FileSessionStore::open_default().context("Failed to open session store")?);
        let router = Arc::new(Router::new(RouteTable::default(), store.clone(), ROOT_PATH));

        let gateway = Gateway::configure(config.gateway_config(), store.clone())
            .context("Failed to build HTTP client")?;
        let controller = SessionController::new(store.clone(), router.clone());
        let listener = tokio::spawn(controller.clone().run(gateway.subscribe()));

        let signed_in = store.user().ok().flatten().is_some();
        debug!("Backend: {} (signed in: {})", gateway.base_url(), signed_in);

        Ok(Self {
            config,
            store,
            router,
            controller,
            gateway,
            listener,
            signed_in,
        })
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Navigate to the view backing a command
    pub fn enter(&self, path: &str) -> Navigation {
        let nav = self.router.navigate(path);
        if nav.path == LOGIN_PATH && path != LOGIN_PATH {
            println!(
                "{}",
                "⚠️  Not logged in. Run `noise auth login` first.".yellow()
            );
        } else if let Some(title) = nav.title {
            println!("{}", format!("📊 {}", title).blue().bold());
            println!();
        }
        nav
    }

    /// Enter `path`, run one gateway call and wind the session listener down.
    /// Returns `None` when the guard refused the view.
    pub async fn fetch<F, Fut>(self, path: &str, call: F) -> Result<Option<Value>>
    where
        F: FnOnce(Gateway) -> Fut,
        Fut: Future<Output = noise_client::Result<Value>>,
    {
        let nav = self.enter(path);
        if nav.path == LOGIN_PATH {
            self.finish().await?;
            return Ok(None);
        }

        let result = call(self.gateway.clone()).await;
        self.finish().await?;

        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_session_expired() => {
                anyhow::bail!("Session expired, please run `noise auth login` again")
            }
            Err(e) => Err(e).context("Request failed"),
        }
    }

    /// Drop the gateway so pending session events drain, then report any
    /// forced return to the login screen.
    pub async fn finish(self) -> Result<()> {
        let App {
            store,
            router,
            gateway,
            listener,
            signed_in,
            ..
        } = self;

        drop(gateway);
        listener.await.context("Session listener failed")?;

        if signed_in && store.user().ok().flatten().is_none() {
            println!(
                "{} {}",
                "🔒 Session cleared, redirected to".yellow(),
                router.current_path().cyan()
            );
        }
        Ok(())
    }
}
