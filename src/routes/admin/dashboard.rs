//! src/routes/admin/dashboard.rs

use actix_web::{web, Responder};
use actix_web_flash_messages::IncomingFlashMessages;
use askama_actix::Template;

use crate::authentication::AuthenticatedAdmin;
use crate::enlistment::EnlistmentService;
use crate::error::{AppResult, Error};

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    username: String,
    flash_messages: Vec<String>,
    subscribers: Vec<SubscriberRow>,
}

struct SubscriberRow {
    name: String,
    email: String,
}

pub async fn admin_dashboard(
    service: web::Data<EnlistmentService>,
    admin: web::ReqData<AuthenticatedAdmin>,
    flash_messages: IncomingFlashMessages,
) -> AppResult<impl Responder> {
    let flash_messages: Vec<String> = flash_messages
        .iter()
        .map(|m| m.content().to_string())
        .collect();
    let subscribers = service
        .list_all()
        .await
        .map_err(Error::from)?
        .into_iter()
        .map(|s| SubscriberRow {
            name: s.name.as_ref().to_owned(),
            email: s.email.as_ref().to_owned(),
        })
        .collect();
    Ok(DashboardTemplate {
        username: admin.to_string(),
        flash_messages,
        subscribers,
    })
}
