//! Access decisions for protected routes.

use store::{Role, Session};

/// What the router should do with a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session is live and the role is permitted.
    Allow,
    /// No usable session: token missing or past its expiry. The caller
    /// must also clear the session store so a half-valid session cannot
    /// linger.
    RedirectLogin,
    /// Live session, but the role is not in the allowed set.
    RedirectUnauthorized,
}

/// Decide access for a route. An empty `allowed` set admits any
/// authenticated user.
pub fn evaluate_access(session: Option<&Session>, allowed: &[Role]) -> GuardOutcome {
    let Some(session) = session else {
        return GuardOutcome::RedirectLogin;
    };
    if session.is_expired() {
        return GuardOutcome::RedirectLogin;
    }
    if !allowed.is_empty() && !allowed.contains(&session.user.role) {
        return GuardOutcome::RedirectUnauthorized;
    }
    GuardOutcome::Allow
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use store::{TenantInfo, UserInfo};

    fn live_token() -> String {
        let exp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
            + 3600;
        let payload = serde_json::json!({ "exp": exp }).to_string();
        format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    fn session_with(role: Role, token: String) -> Session {
        Session {
            token,
            user: UserInfo {
                id: "u1".to_string(),
                name: "Asha".to_string(),
                role,
            },
            tenant: TenantInfo::default(),
        }
    }

    #[test]
    fn no_session_redirects_to_login() {
        assert_eq!(evaluate_access(None, &[]), GuardOutcome::RedirectLogin);
    }

    #[test]
    fn expired_token_redirects_to_login_even_for_allowed_roles() {
        let session = session_with(Role::TenantAdmin, "hdr.bogus.sig".to_string());
        assert_eq!(
            evaluate_access(Some(&session), &[Role::TenantAdmin]),
            GuardOutcome::RedirectLogin
        );
    }

    #[test]
    fn role_in_set_is_allowed() {
        let session = session_with(Role::TenantStaff, live_token());
        assert_eq!(
            evaluate_access(Some(&session), &[Role::TenantAdmin, Role::TenantStaff]),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn role_outside_set_is_unauthorized() {
        let session = session_with(Role::TenantStaff, live_token());
        assert_eq!(
            evaluate_access(Some(&session), &[Role::TenantAdmin]),
            GuardOutcome::RedirectUnauthorized
        );
    }

    #[test]
    fn empty_set_admits_any_authenticated_user() {
        let session = session_with(Role::TenantStaff, live_token());
        assert_eq!(evaluate_access(Some(&session), &[]), GuardOutcome::Allow);
    }
}
