use anyhow::anyhow;
use tracing::{error, instrument};

use travol_auth::create_access_token;
use travol_config::JwtConfig;
use travol_core::AppError;
use travol_models::{TokenRequest, TokenResponse};

pub struct AuthService;

impl AuthService {
    /// Issues an access token for the posted email.
    ///
    /// No credential is checked; the email is trusted as sent.
    #[instrument(skip(request, jwt_config), fields(email = %request.email))]
    pub fn issue_token(
        request: TokenRequest,
        jwt_config: &JwtConfig,
    ) -> Result<TokenResponse, AppError> {
        let token = create_access_token(&request.email, jwt_config).map_err(|e| {
            error!(error = %e, "Token signing failed");
            AppError::internal(anyhow!("Failed to sign token"))
        })?;

        Ok(TokenResponse { token })
    }
}
