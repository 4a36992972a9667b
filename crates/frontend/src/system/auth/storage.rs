use contracts::system::auth::UserInfo;
use web_sys::window;

const TOKEN_KEY: &str = "wellness_auth_token";
const USER_KEY: &str = "wellness_auth_user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Persist the session so a page reload keeps the user signed in
pub fn save_session(token: &str, user: &UserInfo) {
    let Some(storage) = get_local_storage() else {
        log::warn!("localStorage unavailable, session will not survive a reload");
        return;
    };
    let _ = storage.set_item(TOKEN_KEY, token);
    match serde_json::to_string(user) {
        Ok(json) => {
            let _ = storage.set_item(USER_KEY, &json);
        }
        Err(e) => log::warn!("Failed to store user record: {}", e),
    }
}

/// Restore a stored session; a missing or unreadable user record counts as no session
pub fn load_session() -> Option<(String, UserInfo)> {
    let storage = get_local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let user_json = storage.get_item(USER_KEY).ok()??;
    let user = parse_stored_user(&user_json)?;
    Some((token, user))
}

fn parse_stored_user(json: &str) -> Option<UserInfo> {
    match serde_json::from_str(json) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Discarding unreadable stored user record: {}", e);
            None
        }
    }
}

/// Remove all session data
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserRole;

    #[test]
    fn test_parse_stored_user() {
        let user = UserInfo {
            user_id: "u1".into(),
            email: "admin@spa.in".into(),
            full_name: "Meera".into(),
            role: UserRole::SuperAdmin,
            assigned_property_id: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(parse_stored_user(&json), Some(user));
        assert_eq!(parse_stored_user("{not json"), None);
    }
}
