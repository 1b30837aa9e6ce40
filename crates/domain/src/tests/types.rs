// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_route, create_test_schedule};
use crate::{
    CargoStatus, Complaint, ComplaintStatus, DomainError, Route, Schedule, VesselStatus,
};
use time::macros::datetime;

#[test]
fn test_vessel_status_parses_case_insensitively() {
    assert_eq!("ACTIVE".parse::<VesselStatus>().unwrap(), VesselStatus::Active);
    assert_eq!("Standby".parse::<VesselStatus>().unwrap(), VesselStatus::Standby);
    assert_eq!(
        "maintenance".parse::<VesselStatus>().unwrap(),
        VesselStatus::Maintenance
    );
}

#[test]
fn test_vessel_status_rejects_unknown() {
    let result: Result<VesselStatus, DomainError> = "DOCKED".parse();
    assert!(matches!(result, Err(DomainError::InvalidVesselStatus(_))));
}

#[test]
fn test_complaint_status_accepts_backend_spellings() {
    assert_eq!(
        "Pending".parse::<ComplaintStatus>().unwrap(),
        ComplaintStatus::Pending
    );
    assert_eq!(
        "In_Progress".parse::<ComplaintStatus>().unwrap(),
        ComplaintStatus::InProgress
    );
    assert_eq!(
        "in progress".parse::<ComplaintStatus>().unwrap(),
        ComplaintStatus::InProgress
    );
    assert_eq!(
        "REJECTED".parse::<ComplaintStatus>().unwrap(),
        ComplaintStatus::Rejected
    );
}

#[test]
fn test_cargo_status_round_trips_backend_spelling() {
    let status: CargoStatus = "ready_for_shipment".parse().unwrap();
    assert_eq!(status, CargoStatus::ReadyForShipment);
    assert_eq!(status.as_str(), "READY_FOR_SHIPMENT");
    assert!(!status.is_terminal());
    assert!(CargoStatus::Delivered.is_terminal());
}

#[test]
fn test_route_key_is_direction_sensitive() {
    let outbound: Route = create_test_route();
    let mut inbound: Route = create_test_route();
    std::mem::swap(&mut inbound.departure_port, &mut inbound.destination_port);

    assert_eq!(outbound.key(), "Gisenyi - Kibuye");
    assert_eq!(inbound.key(), "Kibuye - Gisenyi");
    assert_ne!(outbound.key(), inbound.key());
}

#[test]
fn test_schedule_derived_availability() {
    let schedule: Schedule = create_test_schedule(1);
    assert_eq!(schedule.available_seats_count(), 60);
    assert!((schedule.available_cargo_capacity() - 1500.0).abs() < f64::EPSILON);
}

#[test]
fn test_schedule_utilization_guards_zero_capacity() {
    let mut schedule: Schedule = create_test_schedule(1);
    assert_eq!(schedule.seat_utilization(), Some(0.4));
    assert_eq!(schedule.cargo_utilization(), Some(0.25));

    schedule.total_seats = 0;
    schedule.booked_seats_count = 0;
    schedule.total_cargo_capacity = 0.0;
    schedule.booked_cargo_weight = 0.0;
    assert_eq!(schedule.seat_utilization(), None);
    assert_eq!(schedule.cargo_utilization(), None);
}

#[test]
fn test_schedule_revenue() {
    let schedule: Schedule = create_test_schedule(1);
    assert!((schedule.ticket_revenue() - 1000.0).abs() < f64::EPSILON);
    assert!((schedule.cargo_revenue() - 750.0).abs() < f64::EPSILON);
    assert!((schedule.revenue() - 1750.0).abs() < f64::EPSILON);
}

#[test]
fn test_hours_until_departure() {
    let schedule: Schedule = create_test_schedule(1);
    let now = datetime!(2026-03-01 06:00 UTC);
    assert!((schedule.hours_until_departure(now) - 2.0).abs() < 1e-9);
    assert!(schedule.departs_after(now));
    assert!(!schedule.departs_after(datetime!(2026-03-01 08:00 UTC)));
}

#[test]
fn test_schedule_deserializes_from_backend_json() {
    let json: &str = r#"{
        "id": 42,
        "vessel": {
            "id": 5,
            "name": "MV Kivu Queen",
            "type": "Ferry",
            "capacity": 150,
            "fuelLevel": 64.5,
            "status": "ACTIVE"
        },
        "route": {
            "id": 2,
            "departurePort": "Rusizi",
            "destinationPort": "Rubavu",
            "distance": 90.0
        },
        "departureTime": "2026-04-02T07:15",
        "arrivalTime": "2026-04-02T12:00:00",
        "totalSeats": 150,
        "totalCargoCapacity": 3000.0,
        "seatPrice": 18.0,
        "cargoPricePerKg": 0.75,
        "bookedSeatsCount": 120,
        "bookedCargoWeight": 1200.0,
        "availableSeatsCount": 30
    }"#;

    let schedule: Schedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.id, 42);
    assert_eq!(schedule.vessel.name, "MV Kivu Queen");
    assert_eq!(schedule.vessel.status, VesselStatus::Active);
    assert_eq!(schedule.route.key(), "Rusizi - Rubavu");
    assert_eq!(schedule.departure_time, datetime!(2026-04-02 07:15 UTC));
    assert_eq!(schedule.available_seats_count(), 30);
}

#[test]
fn test_schedule_without_booking_fields_defaults_to_zero() {
    let json: &str = r#"{
        "id": 1,
        "vessel": {"id": 1, "name": "A", "fuelLevel": 50, "status": "STANDBY"},
        "route": {"id": 1, "departurePort": "A", "destinationPort": "B"},
        "departureTime": "2026-04-02T07:15:00Z",
        "arrivalTime": "2026-04-02T09:15:00Z",
        "totalSeats": 10,
        "totalCargoCapacity": 0,
        "seatPrice": 5,
        "cargoPricePerKg": 0
    }"#;

    let schedule: Schedule = serde_json::from_str(json).unwrap();
    assert_eq!(schedule.booked_seats_count, 0);
    assert!(schedule.booked_cargo_weight.abs() < f64::EPSILON);
}

#[test]
fn test_negative_seat_count_fails_to_deserialize() {
    let json: &str = r#"{
        "id": 1,
        "vessel": {"id": 1, "name": "A", "fuelLevel": 50, "status": "ACTIVE"},
        "route": {"id": 1, "departurePort": "A", "destinationPort": "B"},
        "departureTime": "2026-04-02T07:15:00Z",
        "arrivalTime": "2026-04-02T09:15:00Z",
        "totalSeats": -10,
        "totalCargoCapacity": 0,
        "seatPrice": 5,
        "cargoPricePerKg": 0
    }"#;

    assert!(serde_json::from_str::<Schedule>(json).is_err());
}

#[test]
fn test_complaint_deserializes_and_ages() {
    let json: &str = r#"{
        "id": 9,
        "user": {"id": 3, "username": "amina", "email": "amina@example.com", "role": "USER"},
        "subject": "Late departure",
        "message": "Ferry left two hours late.",
        "status": "Pending",
        "submittedAt": "2026-02-19T08:00:00"
    }"#;

    let complaint: Complaint = serde_json::from_str(json).unwrap();
    assert_eq!(complaint.status, ComplaintStatus::Pending);
    assert_eq!(complaint.user.as_ref().map(|u| u.id), Some(3));

    let age: f64 = complaint.age_days(datetime!(2026-03-01 08:00 UTC));
    assert!((age - 10.0).abs() < 1e-9);
}

#[test]
fn test_statuses_serialize_with_backend_spelling() {
    let json: String = serde_json::to_string(&ComplaintStatus::InProgress).unwrap();
    assert_eq!(json, "\"In_Progress\"");

    let json: String = serde_json::to_string(&VesselStatus::Standby).unwrap();
    assert_eq!(json, "\"STANDBY\"");
}
