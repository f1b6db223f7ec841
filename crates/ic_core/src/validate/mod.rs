use time::OffsetDateTime;

use crate::domain::{Incident, ValidationWarning};

fn order_check(
    a_label: &str,
    a: OffsetDateTime,
    b_label: &str,
    b: OffsetDateTime,
    code: &str,
    warnings: &mut Vec<ValidationWarning>,
) {
    if a > b {
        warnings.push(
            ValidationWarning::new(code, format!("{a_label} must be <= {b_label}"))
                .with_details(format!("{a_label}={a}; {b_label}={b}")),
        );
    }
}

/// Check an incident snapshot before it is posted:
/// started_at <= updates[0] <= updates[1] <= ... (by `created_at`), plus non-blank
/// description and video link.
///
/// Findings are warnings only; the snapshot is never reordered or patched.
pub fn validate_incident(incident: &Incident) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if incident.description.trim().is_empty() {
        warnings.push(ValidationWarning::new(
            "VALIDATION_DESCRIPTION_MISSING",
            "Incident description is empty",
        ));
    }
    if incident.video_link.trim().is_empty() {
        warnings.push(ValidationWarning::new(
            "VALIDATION_VIDEO_LINK_MISSING",
            "Incident has no video call link",
        ));
    }

    for (i, update) in incident.updates.iter().enumerate() {
        order_check(
            "started_at",
            incident.started_at,
            &format!("updates[{i}].created_at"),
            update.created_at,
            "VALIDATION_UPDATE_BEFORE_START",
            &mut warnings,
        );
    }

    for (i, pair) in incident.updates.windows(2).enumerate() {
        order_check(
            &format!("updates[{i}].created_at"),
            pair[0].created_at,
            &format!("updates[{}].created_at", i + 1),
            pair[1].created_at,
            "VALIDATION_UPDATE_ORDER_VIOLATION",
            &mut warnings,
        );
    }

    warnings
}
