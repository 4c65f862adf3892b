//! Product categories.

use serde::{Deserialize, Serialize};

use stockroom_core::{CategoryId, DomainError, DomainResult, Entity};

/// A named grouping of products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}

impl Category {
    /// Merge a partial update; `None` fields keep their current value.
    pub fn apply_update(&mut self, update: CategoryUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &CategoryId {
        &self.id
    }
}

/// Input for creating a category. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
}

impl NewCategory {
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(())
    }
}

/// Partial category update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CategoryUpdate {
    pub fn validate(&self) -> DomainResult<()> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("name cannot be empty"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_requires_a_name() {
        let new = NewCategory {
            name: "Electronics".to_string(),
            description: None,
        };
        assert!(new.validate().is_ok());

        let new = NewCategory {
            name: "  ".to_string(),
            description: Some("blank".to_string()),
        };
        match new.validate().unwrap_err() {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for blank name"),
        }
    }

    #[test]
    fn apply_update_keeps_unset_fields() {
        let mut category = Category {
            id: CategoryId::new(),
            name: "Tools".to_string(),
            description: Some("Hand and power tools".to_string()),
        };

        category.apply_update(CategoryUpdate {
            name: Some("Power Tools".to_string()),
            description: None,
        });

        assert_eq!(category.name, "Power Tools");
        assert_eq!(category.description.as_deref(), Some("Hand and power tools"));
    }
}
