use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;
use thiserror::Error;

/// Claim names consulted for a display username, in preference order
const USERNAME_CLAIMS: [&str; 3] = ["preferred_username", "user", "email"];

const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Why a userinfo fetch produced no claims. Every variant collapses to the
/// anonymous user: access control lives upstream, so the only consequence
/// here is that the admin affordance stays hidden.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("userinfo request failed: {0}")]
    Transport(String),
    #[error("userinfo endpoint returned status {0}")]
    Status(u16),
    #[error("userinfo payload was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Identity derived from the provider's claims, resolved once per run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub username: String,
    pub roles: BTreeSet<String>,
    pub is_admin: bool,
}

impl UserInfo {
    /// The no-claims identity: empty username, no roles, no admin affordance
    pub fn anonymous() -> Self {
        Self {
            username: String::new(),
            roles: BTreeSet::new(),
            is_admin: false,
        }
    }

    /// Derive an identity from a provider-defined claims payload. The shape
    /// is not under our control: absent or wrong-typed fields are skipped,
    /// never an error.
    pub fn from_claims(claims: &Value) -> Self {
        let username = derive_username(claims);
        let roles = collect_roles(claims);
        let is_admin = roles.contains("admin") || username.eq_ignore_ascii_case("admin");
        Self {
            username,
            roles,
            is_admin,
        }
    }
}

/// First non-empty string among the username claims
fn derive_username(claims: &Value) -> String {
    for name in USERNAME_CLAIMS {
        if let Some(value) = claims.get(name).and_then(Value::as_str) {
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }
    String::new()
}

/// Union of lower-cased role strings over every claim shape the provider
/// might use: a flat role list, realm roles, per-resource role lists, and
/// groups
fn collect_roles(claims: &Value) -> BTreeSet<String> {
    let mut roles = BTreeSet::new();
    add_string_items(claims.get("roles"), &mut roles);
    add_string_items(
        claims.get("realm_access").and_then(|v| v.get("roles")),
        &mut roles,
    );
    if let Some(resources) = claims.get("resource_access").and_then(Value::as_object) {
        for resource in resources.values() {
            add_string_items(resource.get("roles"), &mut roles);
        }
    }
    add_string_items(claims.get("groups"), &mut roles);
    roles
}

fn add_string_items(value: Option<&Value>, into: &mut BTreeSet<String>) {
    let Some(items) = value.and_then(Value::as_array) else {
        return;
    };
    for item in items {
        if let Some(s) = item.as_str() {
            into.insert(s.to_lowercase());
        }
    }
}

/// GET the userinfo endpoint and derive an identity from its claims
pub fn fetch_userinfo(url: &str) -> Result<UserInfo, FetchError> {
    let agent = ureq::AgentBuilder::new().timeout(FETCH_TIMEOUT).build();
    let response = agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(code, _) => FetchError::Status(code),
        other => FetchError::Transport(other.to_string()),
    })?;
    let claims: Value = serde_json::from_reader(response.into_reader())?;
    Ok(UserInfo::from_claims(&claims))
}

/// Fetch, treating every failure as "no claims"
pub fn resolve_userinfo(url: &str) -> UserInfo {
    fetch_userinfo(url).unwrap_or_else(|_| UserInfo::anonymous())
}

/// Resolve the identity off-thread so the UI renders without waiting; the
/// single result arrives on the returned channel.
pub fn spawn_userinfo_fetch(url: String) -> mpsc::Receiver<UserInfo> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(resolve_userinfo(&url));
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    #[test]
    fn test_realm_roles_grant_admin_case_insensitively() {
        let denied = UserInfo::from_claims(&json!({ "realm_access": { "roles": ["user"] } }));
        assert!(!denied.is_admin);

        let granted = UserInfo::from_claims(&json!({ "realm_access": { "roles": ["ADMIN"] } }));
        assert!(granted.is_admin);
    }

    #[test]
    fn test_flat_roles_and_groups_are_unioned() {
        let info = UserInfo::from_claims(&json!({
            "roles": ["Viewer"],
            "groups": ["Staff"]
        }));
        assert!(info.roles.contains("viewer"));
        assert!(info.roles.contains("staff"));
        assert!(!info.is_admin);
    }

    #[test]
    fn test_resource_access_roles_are_scanned() {
        let info = UserInfo::from_claims(&json!({
            "resource_access": {
                "account": { "roles": ["manage-account"] },
                "app": { "roles": ["Admin"] }
            }
        }));
        assert!(info.is_admin);
    }

    #[test]
    fn test_admin_username_grants_affordance() {
        let info = UserInfo::from_claims(&json!({ "preferred_username": "Admin" }));
        assert!(info.roles.is_empty());
        assert!(info.is_admin);
    }

    #[test]
    fn test_username_preference_order_skips_empty() {
        let info = UserInfo::from_claims(&json!({
            "preferred_username": "",
            "user": "alex",
            "email": "alex@example.org"
        }));
        assert_eq!(info.username, "alex");
    }

    #[test]
    fn test_email_is_last_resort() {
        let info = UserInfo::from_claims(&json!({ "email": "sam@example.org" }));
        assert_eq!(info.username, "sam@example.org");
    }

    #[test]
    fn test_wrong_typed_fields_are_skipped() {
        let info = UserInfo::from_claims(&json!({
            "preferred_username": 42,
            "roles": "admin",
            "realm_access": "nope",
            "resource_access": ["not", "a", "map"],
            "groups": [1, 2, {"x": "admin"}]
        }));
        assert_eq!(info.username, "");
        assert!(info.roles.is_empty());
        assert!(!info.is_admin);
    }

    #[test]
    fn test_empty_payload_is_anonymous() {
        let info = UserInfo::from_claims(&json!({}));
        assert_eq!(info, UserInfo::anonymous());
    }

    /// Serve exactly one canned HTTP response on a throwaway local port
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 2048];
                let _ = stream.read(&mut request);
                let response = format!(
                    "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}/oauth2/userinfo")
    }

    #[test]
    fn test_fetch_derives_identity_from_live_endpoint() {
        let url = serve_once(
            "HTTP/1.1 200 OK",
            r#"{"preferred_username":"casey","realm_access":{"roles":["ADMIN"]}}"#,
        );
        let info = resolve_userinfo(&url);
        assert_eq!(info.username, "casey");
        assert!(info.is_admin);
    }

    #[test]
    fn test_server_error_resolves_to_anonymous() {
        let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}");
        assert!(matches!(
            fetch_userinfo(&url),
            Err(FetchError::Status(500))
        ));

        let url = serve_once("HTTP/1.1 500 Internal Server Error", "{}");
        assert_eq!(resolve_userinfo(&url), UserInfo::anonymous());
    }

    #[test]
    fn test_refused_connection_resolves_to_anonymous() {
        // Bind then drop to get a port with nothing listening
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let url = format!("http://127.0.0.1:{port}/oauth2/userinfo");
        assert_eq!(resolve_userinfo(&url), UserInfo::anonymous());
    }

    #[test]
    fn test_undecodable_payload_resolves_to_anonymous() {
        let url = serve_once("HTTP/1.1 200 OK", "<html>not json</html>");
        assert_eq!(resolve_userinfo(&url), UserInfo::anonymous());
    }
}
