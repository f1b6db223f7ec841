use time::macros::datetime;
use time::{Duration, OffsetDateTime};

use crate::domain::{Incident, Priority, Status, Update};

fn status(id: &str, label: &str) -> Status {
    Status {
        id: id.to_string(),
        label: label.to_string(),
    }
}

fn update(at: OffsetDateTime, status_id: &str, status_label: &str, text: &str) -> Update {
    Update {
        created_at: at,
        status: status(status_id, status_label),
        description: text.to_string(),
    }
}

/// Deterministic incident used for examples and golden output.
///
/// Times are recorded in US Eastern standard time (`-05:00`), starting at 13:50 local.
pub fn demo_incident() -> Incident {
    let start = datetime!(2026-01-14 13:50 -5);

    let updates = vec![
        update(
            start + Duration::minutes(5),
            "Investigating",
            "Investigating",
            "Checkout requests failing for a subset of customers.",
        ),
        update(
            start + Duration::minutes(12),
            "Investigating",
            "Investigating",
            "Error rate tied to the payments gateway; paging vendor.",
        ),
        update(
            start + Duration::minutes(31),
            "Identified",
            "Identified",
            "Expired TLS certificate on the gateway load balancer.",
        ),
        update(
            start + Duration::minutes(47),
            "Monitoring",
            "Monitoring",
            "Certificate rotated; error rate back to baseline.",
        ),
        update(
            start + Duration::minutes(70),
            "Resolved",
            "Resolved",
            "No errors for 20 minutes. Closing out.",
        ),
    ];

    Incident {
        id: "demo-incident-0001".to_string(),
        description: "Checkout is failing for card payments".to_string(),
        priority: Priority {
            id: "P1".to_string(),
            label: "Critical".to_string(),
        },
        status: status("Resolved", "Resolved"),
        video_link: "https://zoom.us/j/5550100".to_string(),
        started_at: start,
        updates,
    }
}
