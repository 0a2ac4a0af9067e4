use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{Authority, Customer, CustomerInfoUpdate, NewCustomer};
use crate::domain::ports::{CustomerStore, VerifyCodeSource};
use crate::interface_adapters::protocol::RegisterCustomerRequest;

pub(crate) type AccountTable = Arc<Mutex<HashMap<i64, Customer>>>;

// Code source returning the same code every time, so verification tests can
// predict what registration stored.
pub(crate) struct FixedCodes(pub(crate) &'static str);

impl VerifyCodeSource for FixedCodes {
    fn next_code(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub insert: bool,
    pub find_by_id: bool,
    pub find_by_email: bool,
    pub update_info: bool,
    pub mark_verified: bool,
}

// In-memory fake store that records what use cases persist and can simulate
// per-method infrastructure failures.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    accounts: AccountTable,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            accounts: Arc::new(Mutex::new(HashMap::new())),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn seed_customer(&self, customer: Customer) {
        let mut guard = self.accounts.lock().expect("accounts mutex poisoned");
        guard.insert(customer.id, customer);
    }

    pub(crate) fn get_customer(&self, id: i64) -> Option<Customer> {
        let guard = self.accounts.lock().expect("accounts mutex poisoned");
        guard.get(&id).cloned()
    }
}

#[async_trait]
impl CustomerStore for RecordingStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, String> {
        if self.failures.insert {
            return Err("insert failed".to_string());
        }

        let mut guard = self.accounts.lock().expect("accounts mutex poisoned");
        if guard.values().any(|existing| existing.email == customer.email) {
            return Err(format!(
                "unique constraint violation on customers.email: {}",
                customer.email
            ));
        }

        let id = guard.keys().max().copied().unwrap_or(0) + 1;
        let stored = customer.with_id(id);
        guard.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, String> {
        if self.failures.find_by_id {
            return Err("find_by_id failed".to_string());
        }

        let guard = self.accounts.lock().expect("accounts mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, String> {
        if self.failures.find_by_email {
            return Err("find_by_email failed".to_string());
        }

        let guard = self.accounts.lock().expect("accounts mutex poisoned");
        Ok(guard.values().find(|c| c.email == email).cloned())
    }

    async fn update_info(
        &self,
        email: &str,
        info: CustomerInfoUpdate,
    ) -> Result<Option<Customer>, String> {
        if self.failures.update_info {
            return Err("update_info failed".to_string());
        }

        let mut guard = self.accounts.lock().expect("accounts mutex poisoned");
        match guard.values_mut().find(|c| c.email == email) {
            Some(customer) => {
                customer.full_name = info.full_name;
                customer.address = info.address;
                customer.postcode = info.postcode;
                customer.city = info.city;
                customer.country = info.country;
                Ok(Some(customer.clone()))
            }
            None => Ok(None),
        }
    }

    async fn mark_verified(&self, id: i64) -> Result<Option<Customer>, String> {
        if self.failures.mark_verified {
            return Err("mark_verified failed".to_string());
        }

        let mut guard = self.accounts.lock().expect("accounts mutex poisoned");
        match guard.get_mut(&id) {
            Some(customer) => {
                customer.verified = true;
                Ok(Some(customer.clone()))
            }
            None => Ok(None),
        }
    }
}

// Canned registration payload with one distinguishing email.
pub(crate) fn sample_registration(email: &str) -> RegisterCustomerRequest {
    RegisterCustomerRequest {
        email: email.to_string(),
        full_name: "Anna Schmidt".to_string(),
        address: "12 Harbor Lane".to_string(),
        postcode: "1100-148".to_string(),
        city: "Lisbon".to_string(),
        country: "Portugal".to_string(),
        password: "plenty-secret".to_string(),
    }
}

// Canned stored account for seeding lookups and verification runs.
pub(crate) fn sample_customer(id: i64, email: &str) -> Customer {
    Customer {
        id,
        email: email.to_string(),
        full_name: "Anna Schmidt".to_string(),
        address: "12 Harbor Lane".to_string(),
        postcode: "1100-148".to_string(),
        city: "Lisbon".to_string(),
        country: "Portugal".to_string(),
        password: "plenty-secret".to_string(),
        authority: Authority::Customer,
        verified: false,
        verify_code: "QJZKV".to_string(),
    }
}
