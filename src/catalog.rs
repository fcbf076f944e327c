//! Fixed lookup lists used by intake forms, plus the mock accounts.

use serde::Serialize;

use crate::domain::{User, UserRole};

pub const VEHICLE_MAKES: &[&str] = &[
    "Toyota",
    "Honda",
    "Nissan",
    "Hyundai",
    "Kia",
    "Mercedes-Benz",
    "BMW",
    "Ford",
    "Volkswagen",
    "Mitsubishi",
    "Mazda",
];

pub const PAYMENT_METHODS: &[&str] = &["Cash", "Mobile Money", "Card", "Bank Transfer", "USDT"];

pub const INVENTORY_CATEGORIES: &[&str] = &[
    "Filters",
    "Oils",
    "Brake Parts",
    "Suspension",
    "Electrical",
    "Tyres",
    "Engine Parts",
    "Body Parts",
];

/// Accounts available to the mocked sign-in. The first entry is the fallback.
#[must_use]
pub fn mock_users() -> Vec<User> {
    [
        ("1", "Admin User", "admin@biskaken.com", UserRole::Admin),
        ("2", "Kofi Mensah", "kofi@biskaken.com", UserRole::SubAdmin),
        ("3", "Kwame Tech", "kwame@biskaken.com", UserRole::Staff),
    ]
    .into_iter()
    .map(|(id, name, email, role)| User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        avatar: None,
    })
    .collect()
}

/// Everything a client needs to populate drop-downs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub vehicle_makes: &'static [&'static str],
    pub payment_methods: &'static [&'static str],
    pub inventory_categories: &'static [&'static str],
    pub users: Vec<User>,
}

impl Catalog {
    #[must_use]
    pub fn load() -> Self {
        Self {
            vehicle_makes: VEHICLE_MAKES,
            payment_methods: PAYMENT_METHODS,
            inventory_categories: INVENTORY_CATEGORIES,
            users: mock_users(),
        }
    }
}
