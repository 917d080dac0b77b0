//! Declarative resource schemas
//!
//! Each resource type describes its fields with a [`Schema`]: type, whether the field is
//! required, optional or computed, and an optional value constraint. Records are checked
//! against the schema before any request is sent to NetBox.

use crate::data::ResourceData;
use crate::error::ProviderError;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Value type of a schema field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int,
    /// Unordered set of strings
    StringSet,
    /// Free-form map of values
    Map,
}

/// How a field is populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Required,
    Optional,
    /// Set by the user, or by the server when the user omits it
    OptionalComputed,
}

/// Constraint on a field's value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Validation {
    /// Value must be one of the listed strings
    OneOf { values: &'static [&'static str] },
    /// String length must fall within the inclusive range
    LengthBetween { min: usize, max: usize },
}

impl Validation {
    fn check(&self, field: &str, value: &Value) -> Result<(), ProviderError> {
        let Some(text) = value.as_str() else {
            return Ok(());
        };
        match self {
            Validation::OneOf { values } => {
                if values.contains(&text) {
                    Ok(())
                } else {
                    Err(ProviderError::InvalidValue {
                        field: field.to_string(),
                        message: format!("expected one of [{}], got {:?}", values.join(", "), text),
                    })
                }
            }
            Validation::LengthBetween { min, max } => {
                let len = text.chars().count();
                if (*min..=*max).contains(&len) {
                    Ok(())
                } else {
                    Err(ProviderError::InvalidValue {
                        field: field.to_string(),
                        message: format!("expected length between {} and {}, got {}", min, max, len),
                    })
                }
            }
        }
    }
}

/// One field of a resource schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attr_type: AttributeType,
    pub presence: Presence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Validation>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Attribute {
    fn new(attr_type: AttributeType, presence: Presence) -> Self {
        Self {
            attr_type,
            presence,
            validation: None,
            description: String::new(),
        }
    }

    pub fn required_string() -> Self {
        Self::new(AttributeType::String, Presence::Required)
    }

    pub fn optional_string() -> Self {
        Self::new(AttributeType::String, Presence::Optional)
    }

    pub fn optional_computed_string() -> Self {
        Self::new(AttributeType::String, Presence::OptionalComputed)
    }

    pub fn required_int() -> Self {
        Self::new(AttributeType::Int, Presence::Required)
    }

    pub fn optional_int() -> Self {
        Self::new(AttributeType::Int, Presence::Optional)
    }

    pub fn optional_string_set() -> Self {
        Self::new(AttributeType::StringSet, Presence::Optional)
    }

    pub fn optional_map() -> Self {
        Self::new(AttributeType::Map, Presence::Optional)
    }

    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = Some(validation);
        self
    }

    /// Restrict a string field to a fixed set of values; the description lists them
    pub fn one_of(self, values: &'static [&'static str]) -> Self {
        let description = if self.description.is_empty() {
            format!("Valid values are {}.", quoted_list(values))
        } else {
            format!("{} Valid values are {}.", self.description, quoted_list(values))
        };
        let mut attr = self.with_validation(Validation::OneOf { values });
        attr.description = description;
        attr
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        self.description = match self.validation {
            Some(Validation::OneOf { values }) => {
                format!("{} Valid values are {}.", description, quoted_list(values))
            }
            _ => description,
        };
        self
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }

    fn check_type(&self, field: &str, value: &Value) -> Result<(), ProviderError> {
        let ok = match self.attr_type {
            AttributeType::String => value.is_string(),
            AttributeType::Int => value.is_i64() || value.is_u64(),
            AttributeType::StringSet => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            AttributeType::Map => value.is_object(),
        };
        if ok {
            Ok(())
        } else {
            Err(ProviderError::InvalidValue {
                field: field.to_string(),
                message: format!("expected {:?}, got {}", self.attr_type, value),
            })
        }
    }
}

fn quoted_list(values: &[&str]) -> String {
    values
        .iter()
        .map(|v| format!("`{}`", v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Field definitions for one resource type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Add the `tags` set and `custom_fields` map shared by every resource
    pub fn with_tags_and_custom_fields(self) -> Self {
        self.with_attribute(
            "tags",
            Attribute::optional_string_set().with_description("Names of existing NetBox tags."),
        )
        .with_attribute(
            "custom_fields",
            Attribute::optional_map().with_description("Custom field values keyed by field name."),
        )
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    /// Check a record before it is sent anywhere.
    ///
    /// Required fields must be present and non-null. Optional fields are checked only when
    /// set to a non-zero value. Undeclared fields are rejected.
    pub fn validate(&self, data: &ResourceData) -> Result<(), ProviderError> {
        if let Some(unknown) = data.values().keys().find(|k| !self.attributes.contains_key(*k)) {
            return Err(ProviderError::UnknownAttribute(unknown.clone()));
        }

        for (name, attr) in &self.attributes {
            let value = if attr.is_required() {
                Some(
                    data.get(name)
                        .ok_or_else(|| ProviderError::MissingRequired(name.clone()))?,
                )
            } else {
                data.get_ok(name)
            };

            if let Some(value) = value {
                attr.check_type(name, value)?;
                if let Some(validation) = &attr.validation {
                    validation.check(name, value)?;
                }
            }
        }
        Ok(())
    }
}
