use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    /// Session token for `Authorization: Bearer`
    pub token: String,
    pub wallet_address: String,
    pub user: LoginUserDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserDto {
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
}
