use vg_core::PostalAddress;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AddressDto {
    pub street: Option<String>,
    pub city: Option<String>,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
}

impl From<PostalAddress> for AddressDto {
    fn from(a: PostalAddress) -> Self {
        Self {
            street: a.street,
            city: a.city,
            district: a.district,
            neighborhood: a.neighborhood,
        }
    }
}
