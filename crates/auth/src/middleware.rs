use super::*;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::web;
use cbn_core::Error;

fn authenticate(req: &HttpRequest) -> Result<Claims, Error> {
    let crypto = req.app_data::<web::Data<Crypto>>().ok_or_else(|| {
        log::error!("token service not configured");
        Error::storage("internal error")
    })?;
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(Error::Unauthenticated)?;
    let token = header.strip_prefix("Bearer ").ok_or(Error::Unauthenticated)?;
    let claims = crypto.decode(token)?;
    if claims.expired() {
        return Err(Error::Unauthenticated);
    }
    Ok(claims)
}

/// Identity extractor. Verification is stateless: signature, expiry, and
/// issuer come from the token alone, so extraction never touches the
/// Record Store. A missing or unusable token resolves to an anonymous
/// caller; the policy table decides whether that is enough for the
/// route.
pub struct MaybeAuth(pub Option<Claims>);

impl MaybeAuth {
    pub fn user(&self) -> User {
        User::from(self.0.clone())
    }
}

impl FromRequest for MaybeAuth {
    type Error = Error;
    type Future = std::future::Ready<Result<Self, Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Ok(MaybeAuth(authenticate(req).ok())))
    }
}
