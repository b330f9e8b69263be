use serde::Serialize;
use wcag_auth::SessionState;
use wcag_core::Role;

use crate::context::AppContext;
use crate::output::output;

#[derive(Default, Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    user_id: Option<String>,
    email: Option<String>,
    name: Option<String>,
    role: Option<Role>,
    admin: bool,
    expires_at: Option<String>,
    session_source: Option<&'static str>,
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let mut sessions = match ctx.sessions() {
        Ok(sessions) => sessions,
        Err(error) => {
            let status = AuthStatusResponse {
                note: Some(format!("{error:#}")),
                ..AuthStatusResponse::default()
            };
            return output(&status, &ctx.ui);
        }
    };

    let status = match sessions.restore().await {
        SessionState::Authenticated(user) => AuthStatusResponse {
            authenticated: true,
            user_id: Some(user.id.clone()),
            email: Some(user.email.clone()),
            name: Some(user.display_name().to_string()),
            role: user.profile.role,
            admin: user.is_admin(),
            expires_at: Some(user.session.expires_at.to_rfc3339()),
            session_source: None,
            note: user
                .profile
                .role
                .is_none()
                .then(|| "profile unavailable; admin features are disabled".to_string()),
        },
        SessionState::Unauthenticated | SessionState::Restoring => AuthStatusResponse {
            note: Some("not signed in".into()),
            ..AuthStatusResponse::default()
        },
    };
    let status = AuthStatusResponse {
        session_source: sessions.store().source(),
        ..status
    };

    output(&status, &ctx.ui)
}
