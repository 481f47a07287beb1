//! Category wire types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::shared::validation::name_required;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Category as embedded in a populated post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: Uuid,
    pub name: String,
}

/// Body of `POST /api/categories`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NewCategory {
    #[validate(
        custom(function = "name_required"),
        length(max = 50, message = "Category name cannot be more than 50 characters")
    )]
    pub name: String,
    #[validate(length(max = 200, message = "Description cannot be more than 200 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewCategory {
    /// Trimmed name and description, with a blank description dropped.
    pub fn normalized(&self) -> (String, Option<String>) {
        let description = self
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string);
        (self.name.trim().to_string(), description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::collect_field_errors;

    #[test]
    fn test_new_category_requires_name() {
        let category: NewCategory = serde_json::from_str(r#"{"name":"  "}"#).unwrap();
        let errors = collect_field_errors(&category.validate().unwrap_err());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Name is required");
    }

    #[test]
    fn test_new_category_limits() {
        let category = NewCategory {
            name: "n".repeat(51),
            description: Some("d".repeat(201)),
        };
        let errors = collect_field_errors(&category.validate().unwrap_err());
        assert_eq!(errors[0].field, "description");
        assert_eq!(errors[1].message, "Category name cannot be more than 50 characters");
    }

    #[test]
    fn test_normalized() {
        let category = NewCategory {
            name: "  Rust ".to_string(),
            description: Some("   ".to_string()),
        };
        assert_eq!(category.normalized(), ("Rust".to_string(), None));
    }
}
