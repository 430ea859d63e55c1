use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};

use crate::routes::AppState;
use crate::session::SessionId;

/// Session middleware that resolves the caller's session from its cookie
///
/// Creates a session on first contact (or after expiry) and sets the cookie
/// on the way out. Inserts the [`SessionId`] extension for handlers.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.clone();

    let presented = jar
        .get(&cookie_name)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let (session, created) = state.sessions.resolve(presented).await;
    req.extensions_mut().insert(session);

    let response = next.run(req).await;

    if !created {
        return response;
    }

    let cookie = Cookie::build((cookie_name, session.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (jar.add(cookie), response).into_response()
}
