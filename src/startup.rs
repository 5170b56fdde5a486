//! src/startup.rs

use crate::configuration::{AdminSettings, Settings};
use crate::enlistment::EnlistmentService;
use crate::routes::{
    admin_dashboard, cancel_subscription, health_check, home, log_out, login, login_form,
    subscribe, subscription_form,
};
use crate::store::build_subscriber_store;
use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, web::Data, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use actix_web_lab::middleware::from_fn;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        // The storage selector is resolved exactly once, here; an
        // unrecognized value aborts the build.
        let store = build_subscriber_store(&configuration.storage).await?;
        let service = EnlistmentService::new(store);

        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr().unwrap().port();
        let server = run(
            listener,
            service,
            configuration.admin,
            configuration.application.hmac_secret,
        )
        .await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

async fn run(
    listener: TcpListener,
    service: EnlistmentService,
    admin: AdminSettings,
    hmac_secret: Secret<String>,
) -> Result<Server, anyhow::Error> {
    let service = Data::new(service);
    let admin = Data::new(admin);
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());
    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .wrap(TracingLogger::default())
            .route("/", web::get().to(home))
            .route("/health_check", web::get().to(health_check))
            .route("/subscriptions", web::get().to(subscription_form))
            .route("/subscriptions", web::post().to(subscribe))
            .route("/login", web::get().to(login_form))
            .route("/login", web::post().to(login))
            .service(
                web::scope("/admin")
                    .wrap(from_fn(crate::authentication::reject_anonymous_users))
                    .route("/dashboard", web::get().to(admin_dashboard))
                    .route("/subscriptions/cancel", web::post().to(cancel_subscription))
                    .route("/logout", web::post().to(log_out)),
            )
            .app_data(service.clone())
            .app_data(admin.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
