// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use serde_json::{Value, json};
use time::OffsetDateTime;
use time::macros::datetime;
use wiremock::MockServer;

use crate::{ApiClient, ApiConfig};

pub const NOW: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

pub fn vessel_json(id: i64, fuel_level: f64, status: &str) -> Value {
    json!({
        "id": id,
        "name": format!("MV Kivu {id}"),
        "type": "Ferry",
        "capacity": 120,
        "fuelLevel": fuel_level,
        "status": status
    })
}

/// A schedule as the backend sends it, with an offset-less departure time.
pub fn schedule_json(id: i64, vessel: Value, departure: &str, booked_seats: i64) -> Value {
    json!({
        "id": id,
        "vessel": vessel,
        "route": {
            "id": 3,
            "departurePort": "Gisenyi",
            "destinationPort": "Kibuye",
            "distance": 48.5
        },
        "departureTime": departure,
        "arrivalTime": "2026-03-05T12:00:00",
        "totalSeats": 100,
        "totalCargoCapacity": 2000.0,
        "seatPrice": 25.0,
        "cargoPricePerKg": 1.5,
        "bookedSeatsCount": booked_seats,
        "bookedCargoWeight": 500.0
    })
}

pub fn compliance_record_json(id: i64, vessel: Value, last_inspection: &str) -> Value {
    json!({
        "id": id,
        "vessel": vessel,
        "safetyCheckPassed": true,
        "regulatoryDocumentsComplete": false,
        "lastInspectionDate": last_inspection
    })
}

pub fn complaint_json(id: i64, status: &str, submitted_at: &str) -> Value {
    json!({
        "id": id,
        "user": { "id": 4, "username": "amani", "email": "amani@example.com", "role": "USER" },
        "subject": "Delayed boarding",
        "message": "Boarding started an hour late.",
        "status": status,
        "submittedAt": submitted_at
    })
}

pub fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig::new(server.uri())).unwrap()
}
