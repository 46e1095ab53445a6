//! The entity record filtered by the repository.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::repository::Identified;
use crate::spec::{HasActive, HasCreated, HasId, HasName, HasPrice, Id};

/// A named, optionally priced record.
///
/// `id` stays `None` until a repository assigns one on save.
///
/// # Example
///
/// ```
/// use quarry::Entity;
/// use rust_decimal::Decimal;
///
/// let entity = Entity::builder()
///     .name("Entity 1")
///     .active(true)
///     .price(Decimal::new(15100, 2))
///     .build();
///
/// assert_eq!(entity.id, None);
/// assert_eq!(entity.to_string(), "Id: -, Name: Entity 1, Active: true, Price: 151.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
}

impl Entity {
    /// Creates an inactive, unsaved entity with just a name.
    pub fn new(name: impl Into<String>) -> Self {
        Entity {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Id: {}", id)?,
            None => f.write_str("Id: -")?,
        }
        write!(f, ", Name: {}", self.name)?;
        if let Some(description) = &self.description {
            write!(f, ", Description: {}", description)?;
        }
        write!(f, ", Active: {}", self.active)?;
        if let Some(created) = &self.created {
            write!(f, ", Created: {}", created.to_rfc3339())?;
        }
        if let Some(price) = &self.price {
            write!(f, ", Price: {}", price)?;
        }
        Ok(())
    }
}

/// Builder for [`Entity`].
#[derive(Debug, Clone, Default)]
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    pub fn id(mut self, id: Id) -> Self {
        self.entity.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = Some(description.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.entity.active = active;
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.entity.created = Some(created);
        self
    }

    pub fn price(mut self, price: impl Into<Decimal>) -> Self {
        self.entity.price = Some(price.into());
        self
    }

    pub fn build(self) -> Entity {
        self.entity
    }
}

impl HasId for Entity {
    fn id(&self) -> Option<Id> {
        self.id
    }
}

impl HasName for Entity {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl HasActive for Entity {
    fn is_active(&self) -> bool {
        self.active
    }
}

impl HasPrice for Entity {
    fn price(&self) -> Option<Decimal> {
        self.price
    }
}

impl HasCreated for Entity {
    fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }
}

impl Identified for Entity {
    fn with_id(mut self, id: Id) -> Self {
        self.id = Some(id);
        self
    }
}
