//! In-process record and credential stores.
//!
//! The original deployment kept house listings and user credentials in an
//! external relational database. The serving process only ever needs keyed
//! CRUD over small tables, so these stores are thread-safe in-process maps
//! with the same operations; swapping a database back in means reimplementing
//! these two types, nothing else.

use crate::error::{ServingError, ServingResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A stored house listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseRecord {
    /// Auto-assigned integer id.
    pub id: i64,
    /// Street address.
    pub address: String,
    /// Listing price.
    pub price: f64,
    /// Bedroom count.
    pub bedrooms: u32,
    /// Bathroom count.
    pub bathrooms: u32,
    /// Living area in square feet.
    pub square_feet: f64,
}

/// The mutable fields of a house listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseDetails {
    /// Street address.
    pub address: String,
    /// Listing price.
    pub price: f64,
    /// Bedroom count.
    pub bedrooms: u32,
    /// Bathroom count.
    pub bathrooms: u32,
    /// Living area in square feet.
    pub square_feet: f64,
}

#[derive(Debug, Default)]
struct HouseTable {
    next_id: i64,
    rows: BTreeMap<i64, HouseRecord>,
}

/// Thread-safe store of house listings keyed by integer id.
#[derive(Debug, Default)]
pub struct HouseStore {
    inner: RwLock<HouseTable>,
}

impl HouseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a listing, assigning the next id.
    pub fn create(&self, details: HouseDetails) -> HouseRecord {
        let mut table = self.inner.write();
        table.next_id += 1;
        let record = HouseRecord {
            id: table.next_id,
            address: details.address,
            price: details.price,
            bedrooms: details.bedrooms,
            bathrooms: details.bathrooms,
            square_feet: details.square_feet,
        };
        table.rows.insert(record.id, record.clone());
        record
    }

    /// All listings in id order.
    pub fn list(&self) -> Vec<HouseRecord> {
        self.inner.read().rows.values().cloned().collect()
    }

    /// One listing by id.
    pub fn get(&self, id: i64) -> ServingResult<HouseRecord> {
        self.inner
            .read()
            .rows
            .get(&id)
            .cloned()
            .ok_or(ServingError::NotFound(id))
    }

    /// Replace the mutable fields of a listing.
    pub fn update(&self, id: i64, details: HouseDetails) -> ServingResult<HouseRecord> {
        let mut table = self.inner.write();
        let record = table.rows.get_mut(&id).ok_or(ServingError::NotFound(id))?;
        record.address = details.address;
        record.price = details.price;
        record.bedrooms = details.bedrooms;
        record.bathrooms = details.bathrooms;
        record.square_feet = details.square_feet;
        Ok(record.clone())
    }

    /// Delete a listing.
    pub fn delete(&self, id: i64) -> ServingResult<()> {
        self.inner
            .write()
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(ServingError::NotFound(id))
    }

    /// Number of stored listings.
    pub fn len(&self) -> usize {
        self.inner.read().rows.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.read().rows.is_empty()
    }
}

#[derive(Debug, Clone)]
struct UserRecord {
    email: String,
    password: String,
}

/// Thread-safe store of user credentials keyed by username.
///
/// Credentials are compared as provided; password hashing and the rest of
/// authentication hardening are out of scope here.
#[derive(Debug, Default)]
pub struct UserStore {
    inner: RwLock<HashMap<String, UserRecord>>,
}

impl UserStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`ServingError::UsernameTaken`] if the username exists.
    pub fn register(
        &self,
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> ServingResult<()> {
        let username = username.into();
        let mut users = self.inner.write();
        if users.contains_key(&username) {
            return Err(ServingError::UsernameTaken(username));
        }
        users.insert(
            username,
            UserRecord {
                email: email.into(),
                password: password.into(),
            },
        );
        Ok(())
    }

    /// Whether the username/password pair matches a registered user.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        self.inner
            .read()
            .get(username)
            .map(|u| u.password == password)
            .unwrap_or(false)
    }

    /// The registered email for a username.
    pub fn email(&self, username: &str) -> Option<String> {
        self.inner.read().get(username).map(|u| u.email.clone())
    }
}
