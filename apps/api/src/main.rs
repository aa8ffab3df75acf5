use std::net::SocketAddr;
use std::sync::Arc;

use chrono::Utc;
use dotenv::dotenv;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{self, TraceLayer};
use tracing::{info, warn, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod router;

use appointment_cell::services::lifecycle::AppointmentLifecycleService;
use appointment_cell::store::{AppointmentStore, MemoryAppointmentStore};
use appointment_cell::AppointmentCellState;
use auth_cell::models::{UserAccount, UserRole};
use auth_cell::services::password::hash_password;
use auth_cell::store::{MemoryUserStore, UserStore};
use auth_cell::AuthCellState;
use doctor_cell::directory::{DoctorDirectory, MemoryDoctorDirectory};
use doctor_cell::DoctorCellState;
use payment_cell::services::payment::PaymentService;
use payment_cell::store::MemoryPaymentStore;
use payment_cell::PaymentCellState;
use shared_config::AppConfig;

use crate::router::AppCells;

#[tokio::main]
async fn main() {
    // Loading Env Vars
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting clinic booking API server");

    // Load configuration
    let config = Arc::new(AppConfig::from_env());

    // Shared stores behind their trait seams
    let users: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let appointments: Arc<dyn AppointmentStore> = Arc::new(MemoryAppointmentStore::new());
    let doctors: Arc<dyn DoctorDirectory> = Arc::new(MemoryDoctorDirectory::seeded());
    let payments = Arc::new(MemoryPaymentStore::new());

    seed_admin(&config, users.as_ref()).await;

    let cells = AppCells {
        auth: Arc::new(AuthCellState {
            config: config.clone(),
            users: users.clone(),
            appointments: appointments.clone(),
            doctors: doctors.clone(),
        }),
        doctors: Arc::new(DoctorCellState {
            directory: doctors.clone(),
        }),
        appointments: Arc::new(AppointmentCellState {
            config: config.clone(),
            service: AppointmentLifecycleService::new(appointments.clone()),
        }),
        payments: Arc::new(PaymentCellState {
            service: PaymentService::new(payments),
        }),
    };

    // Set up CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the application router
    let app = router::create_router(cells)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors);

    // Run the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// The admin account comes from configuration, hashed like any other
/// password. Without a configured password the instance simply runs with no
/// admin.
async fn seed_admin(config: &AppConfig, users: &dyn UserStore) {
    if config.admin_password.is_empty() {
        warn!("ADMIN_PASSWORD not set, no admin account seeded");
        return;
    }

    let password_hash = match hash_password(&config.admin_password) {
        Ok(hash) => hash,
        Err(e) => {
            warn!("Failed to hash admin password, no admin seeded: {}", e);
            return;
        }
    };

    let account = UserAccount {
        id: Uuid::new_v4(),
        email: config.admin_email.clone(),
        password_hash,
        full_name: config.admin_full_name.clone(),
        phone: None,
        role: UserRole::Admin,
        created_at: Utc::now(),
    };

    match users.insert(account).await {
        Ok(account) => info!("Seeded admin account {}", account.email),
        Err(e) => warn!("Failed to seed admin account: {}", e),
    }
}
