use crate::utils::error::Result;
use crate::utils::validation::validate_non_empty_string;
use serde::{Deserialize, Serialize};

/// A registered volunteer. Immutable once created; identity is structural,
/// two records name the same person iff all three fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteer {
    pub name: String,
    pub contact: String,
    pub skill: String,
}

impl Volunteer {
    /// Trims each field and rejects empty ones.
    pub fn new(name: &str, contact: &str, skill: &str) -> Result<Self> {
        let name = name.trim();
        let contact = contact.trim();
        let skill = skill.trim();

        validate_non_empty_string("name", name)?;
        validate_non_empty_string("contact", contact)?;
        validate_non_empty_string("skill", skill)?;

        Ok(Self {
            name: name.to_string(),
            contact: contact.to_string(),
            skill: skill.to_string(),
        })
    }
}

/// A relief site accepting deployed volunteers. `current_count` only ever
/// grows, one admission at a time, and never past `max_capacity`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefSite {
    pub name: String,
    pub current_count: u32,
    pub max_capacity: u32,
}

impl ReliefSite {
    pub fn new(name: impl Into<String>, current_count: u32, max_capacity: u32) -> Self {
        Self {
            name: name.into(),
            current_count,
            max_capacity,
        }
    }

    pub fn is_full(&self) -> bool {
        self.current_count >= self.max_capacity
    }

    pub fn remaining_slots(&self) -> u32 {
        self.max_capacity.saturating_sub(self.current_count)
    }

    /// Real-valued fill ratio. A zero-capacity site counts as full and
    /// never reaches this through the matcher.
    pub fn fill_ratio(&self) -> f64 {
        self.current_count as f64 / self.max_capacity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volunteer_fields_are_trimmed() {
        let v = Volunteer::new("  Ana ", "555", " medic ").unwrap();
        assert_eq!(v.name, "Ana");
        assert_eq!(v.contact, "555");
        assert_eq!(v.skill, "medic");
    }

    #[test]
    fn test_volunteer_rejects_empty_fields() {
        assert!(Volunteer::new("", "555", "medic").is_err());
        assert!(Volunteer::new("Ana", "  ", "medic").is_err());
        assert!(Volunteer::new("Ana", "555", "").is_err());
    }

    #[test]
    fn test_volunteer_identity_is_structural() {
        let a = Volunteer::new("Ana", "555", "medic").unwrap();
        let b = Volunteer::new("Ana", "555", "medic").unwrap();
        let c = Volunteer::new("Ana", "556", "medic").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_site_capacity_helpers() {
        let site = ReliefSite::new("North", 2, 10);
        assert!(!site.is_full());
        assert_eq!(site.remaining_slots(), 8);
        assert!((site.fill_ratio() - 0.2).abs() < f64::EPSILON);

        let full = ReliefSite::new("South", 5, 5);
        assert!(full.is_full());
        assert_eq!(full.remaining_slots(), 0);
    }
}
