pub mod flash;
pub mod routes;
pub mod views;

use std::{
    io,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    routing::{get, post},
};
use tokio::{net::TcpListener, signal::ctrl_c, task};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use crate::{config::Config, domain::ContactBook, errors::AppError, store::parse_store};

use routes::{
    about, add_form, create_contact, delete_contact, detail, edit_form, home, list_contacts,
    not_found, update_contact,
};

/// Shared by every handler. The lock makes each request finish its
/// read-modify-write on the storage file before the next one starts.
pub struct AppState {
    pub book: Mutex<ContactBook>,
}

impl AppState {
    pub fn new(book: ContactBook) -> Arc<Self> {
        Arc::new(Self {
            book: Mutex::new(book),
        })
    }

    /// Runs `f` against the locked book on the blocking pool, since every
    /// store call is synchronous file I/O.
    pub async fn with_book<T, F>(self: &Arc<Self>, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&ContactBook) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let state = Arc::clone(self);

        task::spawn_blocking(move || {
            let book = state
                .book
                .lock()
                .map_err(|_| AppError::Io(io::Error::other("contact book lock poisoned")))?;
            f(&book)
        })
        .await
        .map_err(|e| AppError::Io(io::Error::other(e)))?
    }
}

pub fn router(state: Arc<AppState>, public_dir: &str) -> Router {
    let assets = ServeDir::new(public_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/contact", get(list_contacts).post(create_contact))
        .route("/contact/add", get(add_form))
        .route("/contact/update", post(update_contact))
        .route("/contact/edit/{name}", get(edit_form))
        .route("/contact/delete/{name}", post(delete_contact))
        .route("/contact/{name}", get(detail))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: Config) -> Result<(), AppError> {
    config.log_summary();

    info!("Initializing state...");
    let book = ContactBook::new(parse_store(&config.data_path, config.in_memory)?);
    let contact_count = book.load_all()?.len();
    info!("Loaded {contact_count} contacts from {}", book.location());

    let app = router(AppState::new(book), &config.public_dir);

    let address = config.address();
    info!("Binding to {address}");
    let listener = TcpListener::bind(address).await?;
    info!("Contact book listening at http://localhost:{}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutting down...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
