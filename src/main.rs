use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use booklend_server::{app_state::AppState, config::Config, handlers, middleware::RequestLogger};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.production {
        config.validate_for_production().map_err(std::io::Error::other)?;
    }

    let bind_addr = (config.web_server_host.clone(), config.web_server_port);
    let allowed_origin = config.allowed_origin.clone();

    let state = AppState::new(config).await.map_err(std::io::Error::other)?;

    log::info!("Booklend server is running on port {}", bind_addr.1);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestLogger)
            .wrap(cors)
            .wrap(Logger::default())
            .configure(handlers::configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
