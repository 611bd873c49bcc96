use std::sync::Arc;

use auth::Authenticator;
use auth::PasswordHasher;
use sqlx::postgres::PgPoolOptions;
use todo_service::config::Config;
use todo_service::domain::todo::ports::TodoServicePort;
use todo_service::domain::todo::service::TodoService;
use todo_service::domain::user::models::Password;
use todo_service::domain::user::models::Username;
use todo_service::domain::user::ports::UserServicePort;
use todo_service::domain::user::service::UserService;
use todo_service::inbound::http::router::create_router;
use todo_service::outbound::repositories::InMemoryTodoRepository;
use todo_service::outbound::repositories::InMemoryUserRepository;
use todo_service::outbound::repositories::PostgresTodoRepository;
use todo_service::outbound::repositories::PostgresUserRepository;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todo_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "todo-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        persistent = config.database.url.is_some(),
        "Configuration loaded"
    );

    // An unusable hashing cost is fatal.
    let password_hasher = PasswordHasher::with_cost(config.password.cost)?;
    let password_cost = password_hasher.cost();
    let authenticator = Arc::new(Authenticator::new(
        config.jwt.secret.as_bytes(),
        config.jwt.token_ttl()?,
        password_hasher,
    ));
    tracing::info!(
        token_ttl_seconds = authenticator.token_ttl().num_seconds(),
        password_cost,
        "Authenticator ready"
    );

    let (user_service, todo_service): (Arc<dyn UserServicePort>, Arc<dyn TodoServicePort>) =
        match &config.database.url {
            Some(url) => {
                let pg_pool = PgPoolOptions::new()
                    .max_connections(config.database.max_connections)
                    .connect(url)
                    .await?;
                tracing::info!(
                    max_connections = config.database.max_connections,
                    database = "postgresql",
                    "Database connection pool created"
                );

                sqlx::migrate!("./migrations").run(&pg_pool).await?;
                tracing::info!(database = "postgresql", "Database migrations completed");

                (
                    Arc::new(UserService::new(
                        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
                        Arc::clone(&authenticator),
                    )),
                    Arc::new(TodoService::new(Arc::new(PostgresTodoRepository::new(
                        pg_pool,
                    )))),
                )
            }
            None => {
                tracing::warn!("No database.url configured, data is kept in memory only");
                (
                    Arc::new(UserService::new(
                        Arc::new(InMemoryUserRepository::new()),
                        Arc::clone(&authenticator),
                    )),
                    Arc::new(TodoService::new(Arc::new(InMemoryTodoRepository::new()))),
                )
            }
        };

    let admin_username = Username::new(config.admin.username.clone())?;
    let admin_password = Password::new(config.admin.password.clone())?;
    let (admin, created) = user_service
        .ensure_admin(admin_username, admin_password)
        .await?;
    if created {
        tracing::info!(user_id = %admin.id, username = %admin.username, "Administrator seeded");
        if config.admin.uses_default_password() {
            tracing::warn!(
                username = %admin.username,
                "Administrator seeded with the default password, set ADMIN__PASSWORD"
            );
        }
    }

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(user_service, todo_service, authenticator);
    axum::serve(http_listener, http_application).await?;

    tracing::info!("Server exited");

    Ok(())
}
