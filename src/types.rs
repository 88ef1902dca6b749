//! Wire types for the PetFriends API.
//!
//! The service speaks loosely-typed JSON; these types pin down the fields the
//! suite asserts on and tag each endpoint result as success or failure instead of
//! passing raw key-value maps around.

use reqwest::StatusCode;
use serde::Deserialize;

/// Body of an authentication reply. The key is opaque; it is only ever
/// checked for presence and echoed back in the `auth_key` header.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

/// A single pet record as returned by the service.
///
/// The service transmits `age` as a string regardless of how it was
/// submitted, so it stays a string here.
#[derive(Debug, Clone, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub animal_type: String,
    pub age: String,
    /// Reference to the uploaded photo; empty or absent when the pet has none.
    #[serde(default)]
    pub pet_photo: Option<String>,
}

impl Pet {
    /// Whether the record carries a photo reference.
    pub fn has_photo(&self) -> bool {
        self.pet_photo.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Body of a listing reply.
#[derive(Debug, Clone, Deserialize)]
pub struct PetList {
    pub pets: Vec<Pet>,
}

impl PetList {
    /// Whether the listing contains a pet with the given id.
    pub fn contains(&self, pet_id: &str) -> bool {
        self.pets.iter().any(|pet| pet.id == pet_id)
    }

    /// Find a pet by id.
    pub fn find(&self, pet_id: &str) -> Option<&Pet> {
        self.pets.iter().find(|pet| pet.id == pet_id)
    }
}

/// Listing scope for [`get_list_of_pets`](crate::PetFriends::get_list_of_pets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PetFilter {
    /// Every pet in the catalog.
    #[default]
    All,
    /// Only pets belonging to the authenticated account.
    MyPets,
}

impl PetFilter {
    /// The `filter` query parameter value the service expects.
    pub fn as_query_value(self) -> &'static str {
        match self {
            PetFilter::All => "",
            PetFilter::MyPets => "my_pets",
        }
    }
}

/// Decoded body of an API reply, tagged by outcome.
///
/// A `Failure` is a service-side rejection (400/403/404), not a transport
/// error; the suite asserts on those statuses directly.
#[derive(Debug, Clone)]
pub enum ResponseBody<T> {
    /// 2xx reply decoded into the endpoint's known shape.
    Success(T),
    /// Non-2xx reply; the service returns free-form text or HTML here.
    Failure {
        /// Error text extracted from the body, when any was present.
        message: Option<String>,
    },
}

/// Uniform `(status, body)` result of one API round-trip.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// HTTP status code as returned by the service.
    pub status: StatusCode,
    /// Decoded body, tagged success or failure.
    pub body: ResponseBody<T>,
}

impl<T> ApiResponse<T> {
    /// Whether the reply carried a success status and a decoded body.
    pub fn is_success(&self) -> bool {
        matches!(self.body, ResponseBody::Success(_))
    }

    /// The decoded success body, if any.
    pub fn success(&self) -> Option<&T> {
        match &self.body {
            ResponseBody::Success(value) => Some(value),
            ResponseBody::Failure { .. } => None,
        }
    }

    /// Consume the response, yielding the success body.
    pub fn into_success(self) -> Option<T> {
        match self.body {
            ResponseBody::Success(value) => Some(value),
            ResponseBody::Failure { .. } => None,
        }
    }

    /// Error text from a failure reply, if the service sent any.
    pub fn failure_message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Success(_) => None,
            ResponseBody::Failure { message } => message.as_deref(),
        }
    }
}
