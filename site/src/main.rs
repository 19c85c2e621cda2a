mod config;

use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::{App, HttpServer, middleware::Logger, web};
use anyhow::Context;

use crate::config::ServerConfig;

/// Static bundle first, then any unknown path gets `index.html` so the
/// client router can resolve it.
fn site_routes(svc: &mut web::ServiceConfig, config: &ServerConfig) {
    let index = config.dist_dir.join("index.html");

    svc.service(Files::new("/assets", &config.assets_dir))
        .service(
            Files::new("/", &config.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok(ServiceResponse::new(req, res))
                    }
                })),
        );
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    log::info!(
        "serving {} (assets {}) on http://{}:{}",
        config.dist_dir.display(),
        config.assets_dir.display(),
        config.host,
        config.port
    );

    let addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|svc| site_routes(svc, &config))
    })
    .bind(addr.clone())
    .with_context(|| format!("binding {}:{}", addr.0, addr.1))?
    .run()
    .await
    .context("server stopped with an error")
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test;

    fn fixture(name: &str) -> ServerConfig {
        let root = std::env::temp_dir().join(format!("salon-site-{name}-{}", std::process::id()));
        let dist = root.join("dist");
        let assets = root.join("assets");
        std::fs::create_dir_all(&dist).unwrap();
        std::fs::create_dir_all(&assets).unwrap();
        std::fs::write(dist.join("index.html"), "<!doctype html><title>spa</title>").unwrap();
        std::fs::write(dist.join("ui.js"), "console.log('ui')").unwrap();
        std::fs::write(assets.join("logo.png"), [0x89, b'P', b'N', b'G']).unwrap();

        ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 0,
            dist_dir: dist,
            assets_dir: assets,
        }
    }

    #[actix_web::test]
    async fn client_routes_fall_back_to_index() {
        let config = fixture("fallback");
        let app = test::init_service(App::new().configure(|svc| site_routes(svc, &config))).await;

        for path in ["/", "/booking", "/services/pedicure"] {
            let req = test::TestRequest::get().uri(path).to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), StatusCode::OK, "{path}");
            let body = test::read_body(res).await;
            assert!(body.starts_with(b"<!doctype html>"), "{path}");
        }
    }

    #[actix_web::test]
    async fn serves_bundle_and_assets() {
        let config = fixture("static");
        let app = test::init_service(App::new().configure(|svc| site_routes(svc, &config))).await;

        let req = test::TestRequest::get().uri("/ui.js").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(&body[..], b"console.log('ui')");

        let req = test::TestRequest::get().uri("/assets/logo.png").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/assets/missing.png").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
