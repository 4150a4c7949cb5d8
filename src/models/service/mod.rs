// Service module
// Billable service catalog entries

use serde::{Deserialize, Serialize};

/// A billable line item from the clinic's fixed catalog.
///
/// Appointments hold copies of these, so the price recorded on a visit is
/// the price that was charged at the time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub code: String,
    pub name: String,
    pub price: u32,
}

const CATALOG: &[(&str, &str, u32)] = &[
    ("ADJ-FULL", "Full Spine Adjustment", 75),
    ("ADJ-CERV", "Cervical Adjustment", 55),
    ("ADJ-LUMB", "Lumbar Adjustment", 55),
    ("MASS-30", "Therapeutic Massage (30 min)", 50),
    ("MASS-60", "Therapeutic Massage (60 min)", 90),
    ("TENS", "TENS Therapy", 25),
    ("ULTRA", "Ultrasound Therapy", 30),
    ("XRAY", "X-Ray Imaging", 150),
    ("CONSULT", "Initial Consultation", 100),
    ("FOLLOWUP", "Follow-up Visit", 45),
    ("DECOM", "Spinal Decompression", 85),
    ("ACUP", "Acupuncture Session", 70),
];

impl Service {
    pub fn new(code: impl Into<String>, name: impl Into<String>, price: u32) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// The full catalog, in display order.
    pub fn catalog() -> Vec<Service> {
        CATALOG
            .iter()
            .map(|(code, name, price)| Service::new(*code, *name, *price))
            .collect()
    }

    /// Look up a catalog entry by its code.
    pub fn find(code: &str) -> Option<Service> {
        CATALOG
            .iter()
            .find(|(c, _, _)| *c == code)
            .map(|(code, name, price)| Service::new(*code, *name, *price))
    }

    /// Label used by checkbox lists: "Name ($price)".
    pub fn label_with_price(&self) -> String {
        format!("{} (${})", self.name, self.price)
    }
}

/// Aggregated usage of one service across a patient's completed visits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub service: Service,
    pub count: u32,
    pub total_spent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_codes_are_unique() {
        let catalog = Service::catalog();
        let codes: HashSet<_> = catalog.iter().map(|s| s.code.as_str()).collect();
        assert_eq!(codes.len(), catalog.len());
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn test_find_known_and_unknown() {
        let xray = Service::find("XRAY").unwrap();
        assert_eq!(xray.price, 150);
        assert_eq!(xray.name, "X-Ray Imaging");
        assert!(Service::find("NOPE").is_none());
    }

    #[test]
    fn test_label_with_price() {
        let tens = Service::find("TENS").unwrap();
        assert_eq!(tens.label_with_price(), "TENS Therapy ($25)");
    }
}
