//! Storage locations.

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, LocationId};

/// A physical storage slot, addressed as zone / shelf / optional bin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub zone: String,
    pub shelf: String,
    pub bin: Option<String>,
}

impl Location {
    /// Display key products use to reference this location: `zone-shelf[-bin]`.
    pub fn display_key(&self) -> String {
        match &self.bin {
            Some(bin) => format!("{}-{}-{}", self.zone, self.shelf, bin),
            None => format!("{}-{}", self.zone, self.shelf),
        }
    }

    /// Merge a partial update; `None` fields keep their current value.
    pub fn apply_update(&mut self, update: LocationUpdate) {
        if let Some(zone) = update.zone {
            self.zone = zone;
        }
        if let Some(shelf) = update.shelf {
            self.shelf = shelf;
        }
        if let Some(bin) = update.bin {
            self.bin = Some(bin);
        }
    }
}

impl Entity for Location {
    type Id = LocationId;

    fn id(&self) -> &LocationId {
        &self.id
    }
}

/// Input for creating a location. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub zone: String,
    pub shelf: String,
    pub bin: Option<String>,
}

impl NewLocation {
    pub fn validate(&self) -> DomainResult<()> {
        if self.zone.trim().is_empty() {
            return Err(DomainError::validation("zone cannot be empty"));
        }
        if self.shelf.trim().is_empty() {
            return Err(DomainError::validation("shelf cannot be empty"));
        }
        Ok(())
    }
}

/// Partial location update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationUpdate {
    pub zone: Option<String>,
    pub shelf: Option<String>,
    pub bin: Option<String>,
}

impl LocationUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(zone) = &self.zone {
            if zone.trim().is_empty() {
                return Err(DomainError::validation("zone cannot be empty"));
            }
        }
        if let Some(shelf) = &self.shelf {
            if shelf.trim().is_empty() {
                return Err(DomainError::validation("shelf cannot be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_key_includes_bin_only_when_present() {
        let mut location = Location {
            id: LocationId::new(),
            zone: "A".to_string(),
            shelf: "1".to_string(),
            bin: Some("A".to_string()),
        };
        assert_eq!(location.display_key(), "A-1-A");

        location.bin = None;
        assert_eq!(location.display_key(), "A-1");
    }

    #[test]
    fn new_location_requires_zone_and_shelf() {
        let new = NewLocation {
            zone: "B".to_string(),
            shelf: "2".to_string(),
            bin: None,
        };
        assert!(new.validate().is_ok());

        let new = NewLocation {
            zone: String::new(),
            shelf: "2".to_string(),
            bin: None,
        };
        assert!(new.validate().is_err());

        let new = NewLocation {
            zone: "B".to_string(),
            shelf: " ".to_string(),
            bin: None,
        };
        assert!(new.validate().is_err());
    }

    #[test]
    fn apply_update_merges_fields() {
        let mut location = Location {
            id: LocationId::new(),
            zone: "A".to_string(),
            shelf: "1".to_string(),
            bin: None,
        };

        location.apply_update(LocationUpdate {
            zone: None,
            shelf: Some("3".to_string()),
            bin: Some("C".to_string()),
        });

        assert_eq!(location.zone, "A");
        assert_eq!(location.shelf, "3");
        assert_eq!(location.display_key(), "A-3-C");
    }
}
