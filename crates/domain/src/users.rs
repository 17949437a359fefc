//! Typed model of the users listing payload.
//!
//! Mirrors the JSON returned by `GET /api/users?page=n`:
//!
//! ```json
//! {
//!   "page": 2, "per_page": 6, "total": 12, "total_pages": 2,
//!   "data": [{"id": 7, "email": "michael.lawson@reqres.in",
//!             "first_name": "Michael", "last_name": "Lawson",
//!             "avatar": "https://reqres.in/img/faces/7-image.jpg"}],
//!   "support": {"url": "https://reqres.in/#support-heading", "text": "..."}
//! }
//! ```
//!
//! Unknown fields are ignored; fields of the wrong type are rejected.

use serde::{Deserialize, Serialize};

/// One page of the users listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPage {
    /// Page number this payload describes.
    pub page: u32,
    /// Number of users per page.
    pub per_page: u32,
    /// Total number of users across all pages.
    pub total: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// Users on this page.
    pub data: Vec<User>,
    /// Support block, absent on some deployments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support: Option<Support>,
}

impl UserPage {
    /// Returns true if this is the last page of the listing.
    #[must_use]
    pub const fn is_last_page(&self) -> bool {
        self.page >= self.total_pages
    }
}

/// A single user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User id.
    pub id: u64,
    /// Email address.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Avatar image URL.
    pub avatar: String,
}

/// Support links attached to listing responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    /// Support page URL.
    pub url: String,
    /// Support text.
    pub text: String,
}
