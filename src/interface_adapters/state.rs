use async_trait::async_trait;
use rand::Rng;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{Authority, Customer, CustomerInfoUpdate, NewCustomer};
use crate::domain::ports::{CustomerStore, VerifyCodeSource};

// Application state shared by every handler. The ports are trait objects so
// route tests can run against in-memory adapters.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CustomerStore>,
    pub codes: Arc<dyn VerifyCodeSource>,
}

// Length of the verification code issued at registration.
const VERIFY_CODE_LEN: usize = 5;

// Code source drawing uppercase letters from the thread-local generator.
#[derive(Clone)]
pub struct RandomCodeSource;

impl VerifyCodeSource for RandomCodeSource {
    fn next_code(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..VERIFY_CODE_LEN)
            .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
            .collect()
    }
}

// Account table behind the in-memory store. Ids are assigned in insertion
// order starting at 1.
#[derive(Default)]
struct AccountTable {
    next_id: i64,
    by_id: HashMap<i64, Customer>,
}

// In-memory account store adapter. Backs the route tests; enforces the same
// unique-email constraint as the schema.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct InMemoryCustomerStore {
    accounts: Arc<Mutex<AccountTable>>,
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, String> {
        let mut table = self.accounts.lock().await;
        if table
            .by_id
            .values()
            .any(|existing| existing.email == customer.email)
        {
            return Err(format!(
                "unique constraint violation on customers.email: {}",
                customer.email
            ));
        }
        table.next_id += 1;
        let stored = customer.with_id(table.next_id);
        table.by_id.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, String> {
        let table = self.accounts.lock().await;
        Ok(table.by_id.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, String> {
        let table = self.accounts.lock().await;
        Ok(table
            .by_id
            .values()
            .find(|customer| customer.email == email)
            .cloned())
    }

    async fn update_info(
        &self,
        email: &str,
        info: CustomerInfoUpdate,
    ) -> Result<Option<Customer>, String> {
        let mut table = self.accounts.lock().await;
        match table
            .by_id
            .values_mut()
            .find(|customer| customer.email == email)
        {
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
        let mut table = self.accounts.lock().await;
        match table.by_id.get_mut(&id) {
            Some(customer) => {
                customer.verified = true;
                Ok(Some(customer.clone()))
            }
            None => Ok(None),
        }
    }
}

// PostgreSQL-backed account store used by the running service.
#[derive(Clone)]
pub struct PostgresCustomerStore {
    pub db: PgPool,
}

#[async_trait]
impl CustomerStore for PostgresCustomerStore {
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, String> {
        let row = sqlx::query(
            r#"
            INSERT INTO customers
                (email, full_name, address, postcode, city, country, password,
                 authority, verified, verify_code)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id
            "#,
        )
        .bind(&customer.email)
        .bind(&customer.full_name)
        .bind(&customer.address)
        .bind(&customer.postcode)
        .bind(&customer.city)
        .bind(&customer.country)
        .bind(&customer.password)
        .bind(customer.authority.as_str())
        .bind(customer.verified)
        .bind(&customer.verify_code)
        .fetch_one(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        let id: i64 = row.try_get("id").map_err(|err| err.to_string())?;
        Ok(customer.with_id(id))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, email, full_name, address, postcode, city, country,
                   password, authority, verified, verify_code
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        row.map(|row| row_to_customer(&row))
            .transpose()
            .map_err(|err| err.to_string())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Customer>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, email, full_name, address, postcode, city, country,
                   password, authority, verified, verify_code
            FROM customers
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        row.map(|row| row_to_customer(&row))
            .transpose()
            .map_err(|err| err.to_string())
    }

    async fn update_info(
        &self,
        email: &str,
        info: CustomerInfoUpdate,
    ) -> Result<Option<Customer>, String> {
        let row = sqlx::query(
            r#"
            UPDATE customers
            SET full_name = $2, address = $3, postcode = $4, city = $5, country = $6
            WHERE email = $1
            RETURNING id, email, full_name, address, postcode, city, country,
                      password, authority, verified, verify_code
            "#,
        )
        .bind(email)
        .bind(&info.full_name)
        .bind(&info.address)
        .bind(&info.postcode)
        .bind(&info.city)
        .bind(&info.country)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        row.map(|row| row_to_customer(&row))
            .transpose()
            .map_err(|err| err.to_string())
    }

    async fn mark_verified(&self, id: i64) -> Result<Option<Customer>, String> {
        let row = sqlx::query(
            r#"
            UPDATE customers
            SET verified = TRUE
            WHERE id = $1
            RETURNING id, email, full_name, address, postcode, city, country,
                      password, authority, verified, verify_code
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|err| err.to_string())?;

        row.map(|row| row_to_customer(&row))
            .transpose()
            .map_err(|err| err.to_string())
    }
}

// Maps a customers row into the domain record. An authority value the schema
// does not know surfaces as a column decode failure.
fn row_to_customer(row: &PgRow) -> Result<Customer, sqlx::Error> {
    let authority: String = row.try_get("authority")?;
    let authority = Authority::parse(&authority).ok_or_else(|| sqlx::Error::ColumnDecode {
        index: "authority".to_string(),
        source: format!("unknown authority value: {authority}").into(),
    })?;

    Ok(Customer {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        full_name: row.try_get("full_name")?,
        address: row.try_get("address")?,
        postcode: row.try_get("postcode")?,
        city: row.try_get("city")?,
        country: row.try_get("country")?,
        password: row.try_get("password")?,
        authority,
        verified: row.try_get("verified")?,
        verify_code: row.try_get("verify_code")?,
    })
}
