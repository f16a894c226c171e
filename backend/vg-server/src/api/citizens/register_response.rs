use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUserDto,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUserDto {
    pub identity_number: String,
    pub full_name: String,
    pub wallet_address: String,
}
