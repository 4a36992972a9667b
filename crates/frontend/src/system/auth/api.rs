use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api::{ApiClient, ApiError};

/// Login with email and password
pub async fn login(email: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { email, password };
    ApiClient::anonymous()
        .post_json_public("/api/auth/login", &request)
        .await
}
