use crate::config::WebConfig;
use crate::error::WebError;
use crate::handlers::index::{first_page, go_to_page, index, last_page};
use crate::utils::{AppState, get_cors_middleware, get_session_middleware, path_config};
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::middleware::{Logger, NormalizePath, TrailingSlash};
use actix_web::web::ServiceConfig;
use actix_web::{App, HttpServer, web};
use log::info;
use userlist_source::HttpUserSource;

pub fn configure_webapp(
    app_state: AppState,
    source: HttpUserSource,
    files_dir: String,
) -> Box<dyn FnOnce(&mut ServiceConfig)> {
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(web::Data::new(app_state))
            .app_data(web::Data::new(source))
            .service(index)
            // fixed routes must be registered before `/page/{page}`
            .service(first_page)
            .service(last_page)
            .service(go_to_page)
            .service(Files::new("/static", format!("{files_dir}/static")).prefer_utf8(true));
    })
}

pub(crate) async fn run_web(
    web_config: WebConfig,
    app_state: AppState,
    source: HttpUserSource,
    key: Key,
) -> Result<(), WebError> {
    let WebConfig {
        hostname,
        site_url,
        files_dir,
        session,
        ..
    } = web_config;

    info!("starting server on {hostname}");
    HttpServer::new(move || {
        App::new()
            .app_data(path_config())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .wrap(get_session_middleware(
                key.clone(),
                session.use_secure_cookie,
                session.ttl,
            ))
            .wrap(get_cors_middleware(site_url.as_str()))
            .wrap(Logger::default())
            .configure(configure_webapp(
                app_state.clone(),
                source.clone(),
                files_dir.clone(),
            ))
    })
    .bind(hostname)?
    .run()
    .await?;
    Ok(())
}
