use std::env;

use config::Config;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use dotenvy::dotenv;

use toystore_api::db::{establish_connection_pool, get_connection};
use toystore_api::models::config::ServerConfig;
use toystore_api::repository::{DieselRepository, UserReader};
use toystore_api::run;
use toystore_api::services::ServiceResult;
use toystore_api::services::auth::register_user;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Creates the default admin login on first start, mirroring the seed the
/// database migration tooling used to perform.
fn seed_default_user(repo: &DieselRepository) -> ServiceResult<()> {
    if repo.get_user_by_username(DEFAULT_ADMIN_USERNAME)?.is_none() {
        register_user(repo, DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)?;
        log::info!("Created default '{DEFAULT_ADMIN_USERNAME}' user");
    }
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        // Add `./config/default.yaml`
        .add_source(config::File::with_name("config/default"))
        // Add environment-specific overrides
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        // Add settings from the environment (with a prefix of APP)
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let server_config = match settings.try_deserialize::<ServerConfig>() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(err) => {
            log::error!("Error establishing database connection: {err}");
            std::process::exit(1);
        }
    };

    {
        let mut conn = match get_connection(&pool) {
            Ok(conn) => conn,
            Err(err) => {
                log::error!("Error getting database connection: {err}");
                std::process::exit(1);
            }
        };
        if let Err(err) = conn.run_pending_migrations(MIGRATIONS) {
            log::error!("Error running migrations: {err}");
            std::process::exit(1);
        }
    }

    if let Err(err) = seed_default_user(&DieselRepository::new(pool)) {
        log::error!("Error seeding default user: {err}");
        std::process::exit(1);
    }

    run(server_config).await
}
