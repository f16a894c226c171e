use serde::{Deserialize, Deserializer};

/// Body of `POST /api/register`.
///
/// Every field is optional here so that missing input is reported as a
/// validation error instead of a JSON rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub identity_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Street line
    pub address: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
    /// Number or numeric string
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<i64>,
    pub password: Option<String>,
}

fn lenient_age<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Age {
        Number(i64),
        Text(String),
    }

    match Option::<Age>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Age::Number(n)) => Ok(Some(n)),
        Some(Age::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Age::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("age must be a number, got '{}'", s))),
    }
}
