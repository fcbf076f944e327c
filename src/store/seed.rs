//! Demo records loaded when `shop.seed_demo_data` is on.

use chrono::{DateTime, TimeZone, Utc};

use super::ShopData;
use crate::domain::{
    BlogPost, Customer, InventoryItem, Job, JobPart, JobStatus, Priority, Vehicle,
};

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0)
        .single()
        .unwrap_or_default()
}

fn customer(
    id: &str,
    name: &str,
    phone: &str,
    email: Option<&str>,
    (make, model, year, plate): (&str, &str, &str, &str),
    created_at: DateTime<Utc>,
) -> Customer {
    Customer {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.map(ToString::to_string),
        address: None,
        vehicle: Vehicle {
            make: make.to_string(),
            model: model.to_string(),
            year: year.to_string(),
            plate_number: plate.to_string(),
            vin: None,
        },
        notes: None,
        created_at,
    }
}

fn item(
    id: &str,
    name: &str,
    category: &str,
    stock: u32,
    reorder_level: u32,
    unit_cost: f64,
    selling_price: f64,
) -> InventoryItem {
    InventoryItem {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        stock,
        reorder_level,
        unit_cost,
        selling_price,
        supplier: None,
    }
}

pub(super) fn demo_data() -> ShopData {
    let customers = vec![
        customer(
            "C001",
            "John Mensah",
            "0244123456",
            Some("john.mensah@email.gh"),
            ("Toyota", "Camry", "2015", "GR-1234-15"),
            at(2024, 1, 15, 10, 0),
        ),
        customer(
            "C002",
            "Sarah Osei",
            "0558765432",
            Some("s.osei@business.gh"),
            ("Hyundai", "Elantra", "2018", "GW-5521-20"),
            at(2024, 2, 10, 14, 30),
        ),
        customer(
            "C003",
            "Kwame Boateng",
            "0201239876",
            Some("boateng.k@gmail.com"),
            ("Nissan", "Patrol", "2020", "GE-9988-21"),
            at(2024, 3, 5, 9, 15),
        ),
        customer(
            "C004",
            "Abena Appiah",
            "0244998877",
            None,
            ("Honda", "Civic", "2014", "AS-441-14"),
            at(2024, 4, 12, 11, 45),
        ),
        customer(
            "C005",
            "Emmanuel Tetteh",
            "0543210987",
            Some("tetteh.fix@web.com"),
            ("Mercedes-Benz", "C200", "2016", "GT-7722-16"),
            at(2024, 5, 20, 16, 20),
        ),
    ];

    let jobs = vec![
        Job {
            id: "J001".to_string(),
            customer_id: "C001".to_string(),
            customer_name: "John Mensah".to_string(),
            vehicle_info: "Toyota Camry (GR-1234-15)".to_string(),
            issue_description: "Brake pads making grinding noise during stops".to_string(),
            status: JobStatus::Completed,
            priority: Priority::High,
            assigned_mechanic: Some("Kwame".to_string()),
            estimated_cost: 450.0,
            parts: vec![JobPart {
                id: "I002".to_string(),
                name: "Brake Pads (Toyota)".to_string(),
                quantity: 1,
                price: 350.0,
            }],
            labor_hours: 2.0,
            labor_rate: 50.0,
            expected_completion: None,
            created_at: at(2024, 5, 15, 9, 0),
        },
        Job {
            id: "J002".to_string(),
            customer_id: "C002".to_string(),
            customer_name: "Sarah Osei".to_string(),
            vehicle_info: "Hyundai Elantra (GW-5521-20)".to_string(),
            issue_description: "Engine overheating on long drives".to_string(),
            status: JobStatus::InProgress,
            priority: Priority::Medium,
            assigned_mechanic: Some("Kofi".to_string()),
            estimated_cost: 1200.0,
            parts: vec![],
            labor_hours: 5.0,
            labor_rate: 60.0,
            expected_completion: None,
            created_at: at(2024, 5, 18, 10, 30),
        },
        Job {
            id: "J003".to_string(),
            customer_id: "C005".to_string(),
            customer_name: "Emmanuel Tetteh".to_string(),
            vehicle_info: "Mercedes C200 (GT-7722-16)".to_string(),
            issue_description: "Transmission fluid leak detected in garage".to_string(),
            status: JobStatus::Pending,
            priority: Priority::High,
            assigned_mechanic: Some("Yaw".to_string()),
            estimated_cost: 2500.0,
            parts: vec![],
            labor_hours: 8.0,
            labor_rate: 80.0,
            expected_completion: None,
            created_at: at(2024, 5, 19, 15, 0),
        },
    ];

    let inventory = vec![
        item("I001", "Engine Oil (Synthetic 5W-30)", "Oils", 12, 5, 120.0, 180.0),
        item("I002", "Brake Pads (Toyota Front)", "Brake Parts", 2, 5, 200.0, 350.0),
        item("I003", "Oil Filter (Hyundai)", "Filters", 25, 10, 45.0, 85.0),
    ];

    let blog_posts = vec![
        BlogPost {
            id: "1".to_string(),
            title: "How AI is Changing Auto Repair in Ghana's Local Workshops".to_string(),
            content: "Brief content preview...".to_string(),
            image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?auto=format&fit=crop&q=80&w=800".to_string(),
            category: "Technology".to_string(),
            date: "May 22, 2024".to_string(),
            read_time: "4 min read".to_string(),
            image_prompt: None,
        },
        BlogPost {
            id: "2".to_string(),
            title: "Top 5 Brake Maintenance Tips for Ghana's Pothole-Heavy Roads".to_string(),
            content: "Brief content preview...".to_string(),
            image: "https://images.unsplash.com/photo-1506774135304-22820c280f2b?auto=format&fit=crop&q=80&w=800".to_string(),
            category: "Maintenance".to_string(),
            date: "May 18, 2024".to_string(),
            read_time: "3 min read".to_string(),
            image_prompt: None,
        },
    ];

    ShopData {
        user: None,
        customers,
        jobs,
        inventory,
        invoices: Vec::new(),
        blog_posts,
    }
}
