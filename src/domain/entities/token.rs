use serde::{Serialize, Deserialize};

use crate::entities::admin::AdminProfile;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminProfile,
}

/// There is exactly one role; a decoded claim set is a full admin.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}
