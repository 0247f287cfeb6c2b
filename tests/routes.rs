use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use toystore_api::models::config::ServerConfig;
use toystore_api::repository::DieselRepository;
use toystore_api::routes::auth::login;
use toystore_api::routes::clients::{
    create_client, delete_client, get_client, list_clients, update_client,
};
use toystore_api::routes::health;
use toystore_api::routes::stats::{client_stats, general_stats, sales_by_day};
use toystore_api::services::auth::register_user;

mod common;

fn test_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: "unused".to_string(),
        secret: "route-test-secret".to_string(),
    }
}

macro_rules! test_app {
    ($repo:expr, $config:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo))
                .app_data(web::Data::new($config))
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
                ),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health_endpoint() {
    let test_db = common::TestDb::new("test_routes_health.db");
    let app = test_app!(test_db.repo(), test_config());

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn test_protected_routes_require_token() {
    let test_db = common::TestDb::new("test_routes_auth_required.db");
    let app = test_app!(test_db.repo(), test_config());

    for uri in ["/api/clients", "/api/stats/general"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    let req = test::TestRequest::get()
        .uri("/api/clients")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_login_rejects_bad_credentials() {
    let test_db = common::TestDb::new("test_routes_login_bad.db");
    let repo = test_db.repo();
    register_user(&repo, "admin", "admin123").unwrap();
    let app = test_app!(repo, test_config());

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "admin", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_client_crud_over_http() {
    let test_db = common::TestDb::new("test_routes_crud.db");
    let repo = test_db.repo();
    register_user(&repo, "admin", "admin123").unwrap();
    let app = test_app!(repo, test_config());

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "admin", "password": "admin123" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["token"].as_str().expect("token in response");
    let bearer = format!("Bearer {token}");

    // Create.
    let req = test::TestRequest::post()
        .uri("/api/clients")
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(json!({ "name": "Ana", "email": "ana@x.com", "birth_date": "1992-05-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["name"], "Ana");
    assert_eq!(created["birth_date"], "1992-05-01");
    let id = created["id"].as_i64().unwrap();

    // Invalid payload.
    let req = test::TestRequest::post()
        .uri("/api/clients")
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(json!({ "name": "", "email": "bad", "birth_date": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"].as_array().unwrap().len(), 3);

    // Duplicate email.
    let req = test::TestRequest::post()
        .uri("/api/clients")
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .set_json(json!({ "name": "Outra", "email": "ana@x.com", "birth_date": "1990-01-01" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Formatted listing.
    let req = test::TestRequest::get()
        .uri("/api/clients?name=An")
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["meta"]["registroTotal"], 1);
    assert_eq!(body["redundante"]["status"], "ok");
    assert_eq!(body["data"]["clientes"][0]["info"]["nomeCompleto"], "Ana");
    assert_eq!(
        body["data"]["clientes"][0]["estatisticas"]["vendas"],
        json!([])
    );

    // Delete, then the record is gone.
    let req = test::TestRequest::delete()
        .uri(&format!("/api/clients/{id}"))
        .insert_header((header::AUTHORIZATION, bearer.clone()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::get()
        .uri(&format!("/api/clients/{id}"))
        .insert_header((header::AUTHORIZATION, bearer))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
