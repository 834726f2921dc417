use anyhow::Result;
use rocksdb::{Direction, IteratorMode, Options, DB};

use crate::model::user::User;

use std::str;

pub struct DBLayer {
    db: DB,
}

impl DBLayer {
    pub fn new(path: &str) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        let db = DB::open(&opts, path)?;
        Ok(Self { db })
    }

    // ============================================================
    // USER STORAGE
    // ============================================================
    fn user_key(id: &str) -> String {
        format!("user:{id}")
    }

    fn email_lookup_key(email: &str) -> String {
        format!("user_email:{email}")
    }

    pub async fn save_user(&self, user: &User) -> Result<()> {
        let key = Self::user_key(&user.id);
        let val = serde_json::to_vec(user)?;
        self.db.put(key, val)?;

        // fast lookup: email → user id
        let lookup_key = Self::email_lookup_key(&user.email);
        self.db.put(lookup_key, user.id.as_bytes())?;

        Ok(())
    }

    pub async fn load_user(&self, id: &str) -> Result<Option<User>> {
        let key = Self::user_key(id);
        match self.db.get(key)? {
            Some(val) => Ok(Some(serde_json::from_slice(&val)?)),
            None => Ok(None),
        }
    }

    /// Find-one-by-email through the lookup index.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let lookup_key = Self::email_lookup_key(email);
        let Some(raw_id) = self.db.get(lookup_key)? else {
            return Ok(None);
        };
        let user_id = str::from_utf8(&raw_id)?.to_string();
        self.load_user(&user_id).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>> {
        let prefix = "user:";
        let mut results = Vec::new();

        for item in self
            .db
            .iterator(IteratorMode::From(prefix.as_bytes(), Direction::Forward))
        {
            let (key, val) = item?;
            let k = str::from_utf8(&key)?;

            if !k.starts_with(prefix) {
                break;
            }

            let user: User = serde_json::from_slice(&val)?;
            results.push(user);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::DBLayer;
    use crate::model::user::User;

    fn open_temp_db() -> DBLayer {
        let path = std::env::temp_dir().join(format!("namecast-db-test-{}", uuid::Uuid::new_v4()));
        DBLayer::new(path.to_str().unwrap()).unwrap()
    }

    fn account(id: &str, email: &str) -> User {
        User {
            id: id.into(),
            email: email.into(),
            name: None,
            password_hash: Some("$argon2id$stub".into()),
            created_ts: 0,
            meta: None,
        }
    }

    #[tokio::test]
    async fn finds_user_by_email() {
        let db = open_temp_db();
        db.save_user(&account("u1", "alice@example.com")).await.unwrap();

        let found = db.find_user_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, "u1");

        let missing = db.find_user_by_email("bob@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn list_users_skips_lookup_keys() {
        let db = open_temp_db();
        db.save_user(&account("u1", "a@example.com")).await.unwrap();
        db.save_user(&account("u2", "b@example.com")).await.unwrap();

        let users = db.list_users().await.unwrap();
        assert_eq!(users.len(), 2);
    }
}
