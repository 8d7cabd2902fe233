use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use futures::future::LocalBoxFuture;
use std::sync::Arc;

use crate::session::application::ports::outgoing::SessionGate;
use crate::shared::api::ApiResponse;

/// Cookie set by the external auth collaborator.
const SESSION_COOKIE: &str = "better-auth.session_token";

/// An authenticated admin, resolved from the request's session token.
///
/// Extracting this guards a handler: requests without an unexpired session
/// are rejected with a 401 envelope before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub name: String,
    pub email: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_token(req: &HttpRequest) -> Option<String> {
    if let Some(token) = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(token.to_string());
    }

    req.cookie(SESSION_COOKIE).map(|c| c.value().to_string())
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            let gate = req
                .app_data::<web::Data<Arc<dyn SessionGate>>>()
                .cloned()
                .ok_or_else(|| {
                    create_api_error(ApiResponse::internal_error("Session gate not configured"))
                })?;

            let token = extract_token(&req).ok_or_else(|| {
                create_api_error(ApiResponse::unauthorized("Unauthorized"))
            })?;

            match gate.current_session(&token).await {
                Ok(Some(user)) => Ok(AdminSession {
                    name: user.name,
                    email: user.email,
                }),
                Ok(None) => Err(create_api_error(ApiResponse::unauthorized("Unauthorized"))),
                Err(e) => {
                    tracing::error!("session lookup failed: {e}");
                    Err(create_api_error(ApiResponse::internal_error(
                        "Failed to resolve session",
                    )))
                }
            }
        })
    }
}
