use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The vehicle a customer brings in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    /// Model year as written on the intake form (e.g. `"2015"`).
    pub year: String,
    pub plate_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vin: Option<String>,
}

impl Vehicle {
    /// One-line description used on job cards, e.g. `Toyota Camry (GR-1234-15)`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.plate_number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub vehicle: Vehicle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_summary() {
        let vehicle = Vehicle {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2015".to_string(),
            plate_number: "GR-1234-15".to_string(),
            vin: None,
        };
        assert_eq!(vehicle.summary(), "Toyota Camry (GR-1234-15)");
    }

    #[test]
    fn test_customer_parses_front_end_shape() {
        let json = r#"{
            "id": "C009",
            "name": "Ama Owusu",
            "phone": "0240000000",
            "vehicle": { "make": "Kia", "model": "Rio", "year": "2019", "plateNumber": "GR-77-19" },
            "createdAt": "2024-06-01T08:00:00Z"
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.vehicle.plate_number, "GR-77-19");
        assert!(customer.email.is_none());
    }
}
