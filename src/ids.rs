//! Ticket and incident identifier generation
//!
//! Both identifiers embed the creation year and zero-padded month plus a
//! random 3-digit suffix. The two formats differ on purpose: tickets glue the
//! suffix to the month (`TK-2024-01042`) while incident ids keep a separator
//! (`INC-2024-01-042`). Neither is guaranteed unique; the suffix is small and
//! collisions are accepted.

use chrono::{DateTime, Datelike, Utc};
use rand::Rng;

/// Ticket number for a support request: `TK-YYYY-MMNNN`
pub fn ticket_number<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: u32 = rng.gen_range(0..1000);
    format!("TK-{}-{:02}{:03}", now.year(), now.month(), suffix)
}

/// Incident id for an incident report: `INC-YYYY-MM-NNN`
pub fn incident_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: u32 = rng.gen_range(0..1000);
    format!("INC-{}-{:02}-{:03}", now.year(), now.month(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use regex::Regex;

    #[test]
    fn test_ticket_number_format() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let re = Regex::new(r"^TK-\d{4}-\d{5}$").unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let ticket = ticket_number(now, &mut rng);
            assert!(re.is_match(&ticket), "bad ticket number: {}", ticket);
            assert!(ticket.starts_with("TK-2024-03"));
        }
    }

    #[test]
    fn test_incident_id_format() {
        let now = Utc.with_ymd_and_hms(2024, 11, 2, 8, 30, 0).unwrap();
        let re = Regex::new(r"^INC-\d{4}-\d{2}-\d{3}$").unwrap();
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let id = incident_id(now, &mut rng);
            assert!(re.is_match(&id), "bad incident id: {}", id);
            assert!(id.starts_with("INC-2024-11-"));
        }
    }

    #[test]
    fn test_month_is_zero_padded() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let mut rng = rand::thread_rng();
        assert!(ticket_number(now, &mut rng).starts_with("TK-2025-01"));
        assert!(incident_id(now, &mut rng).starts_with("INC-2025-01-"));
    }
}
