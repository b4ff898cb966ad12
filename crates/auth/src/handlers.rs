use super::*;
use actix_web::HttpResponse;
use actix_web::web;
use cbn_core::Error;
use cbn_core::ID;
use std::sync::Arc;
use tokio_postgres::Client;

pub async fn register(
    db: web::Data<Arc<Client>>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, Error> {
    account::register(db.get_ref(), &req)
        .await
        .map(|info| HttpResponse::Created().json(info))
}

pub async fn login(
    db: web::Data<Arc<Client>>,
    tokens: web::Data<Crypto>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error> {
    account::login(db.get_ref(), &tokens, &req)
        .await
        .map(|resp| HttpResponse::Ok().json(resp))
}

pub async fn profile(
    db: web::Data<Arc<Client>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, Error> {
    account::profile(db.get_ref(), ID::from(path.into_inner()))
        .await
        .map(|info| HttpResponse::Ok().json(info))
}

pub async fn update(
    db: web::Data<Arc<Client>>,
    auth: MaybeAuth,
    path: web::Path<i64>,
    req: web::Json<UpdateRequest>,
) -> Result<HttpResponse, Error> {
    account::update(db.get_ref(), &auth.user(), ID::from(path.into_inner()), &req)
        .await
        .map(|info| HttpResponse::Ok().json(info))
}
