use serde::{Deserialize, Serialize};

// Role attached to an account at registration time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Authority {
    Customer,
    Admin,
}

impl Authority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Authority::Customer => "CUSTOMER",
            Authority::Admin => "ADMIN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "CUSTOMER" => Some(Authority::Customer),
            "ADMIN" => Some(Authority::Admin),
            _ => None,
        }
    }
}

// Customer account record as held by the store. The password and verify code
// stay inside the service; only the protocol layer decides what callers see.
#[derive(Clone, Debug, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub password: String,
    pub authority: Authority,
    pub verified: bool,
    pub verify_code: String,
}

// Account data handed to the store before an id is assigned.
#[derive(Clone, Debug)]
pub struct NewCustomer {
    pub email: String,
    pub full_name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
    pub password: String,
    pub authority: Authority,
    pub verified: bool,
    pub verify_code: String,
}

impl NewCustomer {
    // Attach the id the store assigned.
    pub fn with_id(self, id: i64) -> Customer {
        Customer {
            id,
            email: self.email,
            full_name: self.full_name,
            address: self.address,
            postcode: self.postcode,
            city: self.city,
            country: self.country,
            password: self.password,
            authority: self.authority,
            verified: self.verified,
            verify_code: self.verify_code,
        }
    }
}

// Mutable profile fields applied by the update flow.
#[derive(Clone, Debug)]
pub struct CustomerInfoUpdate {
    pub full_name: String,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub country: String,
}
