use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use cbn_auth::MaybeAuth;
use cbn_core::Config;
use cbn_core::Error;
use cbn_core::ID;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn fetch(
    db: web::Data<Arc<Client>>,
    auth: MaybeAuth,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    publish::fetch(db.get_ref(), &auth.user(), &path.into_inner())
        .await
        .map(|info| HttpResponse::Ok().json(info))
}

pub async fn all(db: web::Data<Arc<Client>>, auth: MaybeAuth) -> Result<HttpResponse, Error> {
    publish::all(db.get_ref(), &auth.user())
        .await
        .map(|infos| HttpResponse::Ok().json(infos))
}

pub async fn by_member(
    db: web::Data<Arc<Client>>,
    auth: MaybeAuth,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    publish::by_member(db.get_ref(), &auth.user(), ID::from(path.into_inner()))
        .await
        .map(|infos| HttpResponse::Ok().json(infos))
}

pub async fn create(
    db: web::Data<Arc<Client>>,
    auth: MaybeAuth,
    config: web::Data<Config>,
    req: web::Json<PostPasteRequest>,
) -> Result<HttpResponse, Error> {
    publish::publish(db.get_ref(), &auth.user(), &config.site, &req)
        .await
        .map(|url| HttpResponse::Created().json(url))
}
