use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::auth::login;
use crate::routes::clients::{
    create_client, delete_client, get_client, list_clients, update_client,
};
use crate::routes::health;
use crate::routes::stats::{client_stats, general_stats, sales_by_day};

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish the Diesel connection pool for the SQLite database; the
    // repository owns it and is shared across workers.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(health)
                    .service(login)
                    .service(create_client)
                    .service(list_clients)
                    .service(get_client)
                    .service(update_client)
                    .service(delete_client)
                    .service(sales_by_day)
                    .service(client_stats)
                    .service(general_stats),
            )
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
