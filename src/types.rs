//! PetFriends API request and response type definitions.
//!
//! The service speaks string-typed JSON throughout, `age` included; the
//! real API never validates it as numeric (one of the defects the suite
//! documents). These types stay string-typed too rather than repairing the
//! wire format client-side.

use serde::{Deserialize, Serialize};

/// Body of a successful authentication response.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiKey {
    /// Opaque bearer token; sent as the `auth_key` header on later calls.
    pub key: String,
}

/// A pet record as the service returns it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Pet {
    /// Server-assigned identifier.
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub animal_type: String,
    /// Stored and echoed as a string, whatever was submitted.
    #[serde(default)]
    pub age: String,
    /// Service-supplied creation stamp, kept opaque.
    #[serde(default)]
    pub created_at: String,
    /// Empty string until a photo is attached.
    #[serde(default)]
    pub pet_photo: String,
}

impl Pet {
    /// Whether the record carries an attached photo.
    pub fn has_photo(&self) -> bool {
        !self.pet_photo.is_empty()
    }
}

/// Body of a listing response.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Whether any record in the listing carries the given id.
    pub fn contains_id(&self, id: &str) -> bool {
        self.pets.iter().any(|pet| pet.id == id)
    }
}

/// Server-side listing filter.
///
/// The service understands exactly two values: the empty string (everything)
/// and `my_pets` (records owned by the authenticated account).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    /// Every pet the service knows about.
    #[default]
    All,
    /// Only the authenticated account's own pets.
    MyPets,
}

impl PetFilter {
    /// The literal query-parameter value the service expects.
    pub fn as_str(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

impl std::fmt::Display for PetFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields for the create operation.
///
/// Every field is optional because the defect scenarios need to submit forms
/// with fields missing entirely; a `None` field is omitted from the outgoing
/// request rather than sent empty.
#[derive(Debug, Clone, Default)]
pub struct NewPet {
    pub name: Option<String>,
    pub animal_type: Option<String>,
    pub age: Option<String>,
}

impl NewPet {
    /// A fully populated payload, the happy-path case.
    pub fn new(
        name: impl Into<String>,
        animal_type: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            animal_type: Some(animal_type.into()),
            age: Some(age.into()),
        }
    }

    /// The (field name, value) pairs present in this payload, in the order
    /// the service's form expects them.
    pub(crate) fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(ref name) = self.name {
            fields.push(("name", name.clone()));
        }
        if let Some(ref animal_type) = self.animal_type {
            fields.push(("animal_type", animal_type.clone()));
        }
        if let Some(ref age) = self.age {
            fields.push(("age", age.clone()));
        }
        fields
    }
}
