//! Static datasets used across harnesses.
//!
//! The corpus is small on purpose: every expected result in a harness can be
//! read straight off these functions.

use serde_json::{json, Value};

/// Four cities across three states.
pub fn cities_json() -> Value {
    json!({
        "cities": [
            {"name": "Pune", "state": "Maharashtra"},
            {"name": "Mumbai", "state": "Maharashtra"},
            {"name": "Kochi", "state": "Kerala"},
            {"name": "Bengaluru", "state": "Karnataka"}
        ]
    })
}

/// Six schemes: two national, two Maharashtra, one Kerala, one Karnataka.
pub fn schemes_json() -> Value {
    json!({
        "schemes": [
            {"name": "Disability Pension Scheme", "description": "Monthly pension for persons with disabilities", "type": "national"},
            {"name": "Sanjay Gandhi Niradhar Anudan Yojana", "description": "Financial assistance for destitute persons", "state": "Maharashtra"},
            {"name": "Kerala Vidyajyothi Scholarship", "description": "Scholarship for students", "state": "Kerala"},
            {"name": "Maharashtra Housing Priority", "description": "Priority housing allotment", "state": "Maharashtra"},
            {"name": "ADIP Scheme", "description": "Aids and assistive devices", "type": "national"},
            {"name": "Karnataka Niramaya Cover", "description": "Health insurance", "state": "Karnataka"}
        ]
    })
}

/// Help centers keyed by lowercased city name. Kochi and Bengaluru have none.
pub fn help_centers_json() -> Value {
    json!({
        "pune": [
            {"name": "Pune Divyang Seva Kendra", "type": "Government"},
            {"name": "Sahyadri Hearing Clinic", "type": "Hearing Clinic"}
        ],
        "mumbai": [
            {"name": "Helping Hands Foundation", "type": "NGO"}
        ]
    })
}

/// Four events. The Mumbai one spells its city in lowercase.
pub fn events_json() -> Value {
    json!({
        "events": [
            {"name": "Assistive Device Camp", "city": "Pune"},
            {"name": "International Day of Persons with Disabilities", "type": "national"},
            {"name": "Inclusive Job Fair", "city": "mumbai"},
            {"name": "Sign Language Workshop", "city": "Kochi"}
        ]
    })
}

/// Names of [`schemes_json`] in file order.
pub const ALL_SCHEME_NAMES: [&str; 6] = [
    "Disability Pension Scheme",
    "Sanjay Gandhi Niradhar Anudan Yojana",
    "Kerala Vidyajyothi Scholarship",
    "Maharashtra Housing Priority",
    "ADIP Scheme",
    "Karnataka Niramaya Cover",
];

/// `count` national schemes named `Scheme 0`, `Scheme 1`, ...
pub fn national_schemes_json(count: usize) -> Value {
    let schemes: Vec<Value> = (0..count)
        .map(|i| json!({"name": format!("Scheme {i}"), "description": "applies everywhere", "type": "national"}))
        .collect();
    json!({ "schemes": schemes })
}
