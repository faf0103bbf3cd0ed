use anyhow::Result;
use quill_core::application::{
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use quill_core::config::AppConfig;
use quill_core::domain::{
    comment::{CommentReadRepository, CommentWriteRepository},
    like::LikeRepository,
    post::PostRepository,
    user::UserRepository,
};
use quill_core::infrastructure::{
    database,
    repositories::{
        PostgresCommentReadRepository, PostgresCommentWriteRepository, PostgresLikeRepository,
        PostgresPostRepository, PostgresUserRepository,
    },
    security::token::BiscuitTokenManager,
    time::SystemClock,
};
use quill_core::presentation::http::{routes::build_router_with_options, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let comment_write_repo: Arc<dyn CommentWriteRepository> =
        Arc::new(PostgresCommentWriteRepository::new(pool.clone()));
    let comment_read_repo: Arc<dyn CommentReadRepository> =
        Arc::new(PostgresCommentReadRepository::new(pool.clone()));
    let like_repo: Arc<dyn LikeRepository> = Arc::new(PostgresLikeRepository::new(pool.clone()));
    let post_repo: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));

    let token_manager: Arc<dyn TokenManager> =
        Arc::new(BiscuitTokenManager::new(config.biscuit_private_key())?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());

    let services = Arc::new(ApplicationServices::new(
        comment_write_repo,
        comment_read_repo,
        like_repo,
        post_repo,
        user_repo,
        token_manager,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router_with_options(state, &config.router_options());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
