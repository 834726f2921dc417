use tracing::warn;

use crate::{auth::types::Identity, auth::utils::verify_password, db::DBLayer};

/// Credential decision procedure: `(email, password)` in, identity or
/// nothing out. Expected failures (unknown account, bad password, broken
/// stored hash) and store faults all collapse to `None`; this function
/// never returns an error to the caller.
pub async fn authorize_credentials(db: &DBLayer, email: &str, password: &str) -> Option<Identity> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return None;
    }

    let user = match db.find_user_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => return None,
        Err(err) => {
            warn!(%email, error = %err, "account lookup failed during login");
            return None;
        }
    };

    // A stored hash must be a non-empty string before any comparison.
    let hash = match user.password_hash.as_deref() {
        Some(hash) if !hash.is_empty() => hash,
        _ => {
            warn!(user_id = %user.id, "account has no usable password hash");
            return None;
        }
    };

    match verify_password(hash, password) {
        Ok(true) => Some(Identity {
            id: user.id,
            email: user.email,
        }),
        Ok(false) => None,
        Err(err) => {
            warn!(user_id = %user.id, error = %err, "stored password hash failed to parse");
            None
        }
    }
}
