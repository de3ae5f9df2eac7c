//! Wire types for the menu data.
//!
//! Shapes match the `db.json` file the front-end consumes, so all field
//! names are camelCase on the wire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub image: String,
    pub category: String,
    pub label: String,
    pub price: String,
    pub featured: bool,
    pub description: String,
    pub comments: Vec<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub rating: u8,
    pub comment: String,
    pub author: String,
    /// RFC 3339 timestamp, stamped at submission time.
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id: String,
    pub name: String,
    pub image: String,
    pub label: String,
    pub price: String,
    pub featured: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leader {
    pub id: String,
    pub name: String,
    pub image: String,
    pub designation: String,
    pub abbr: String,
    pub featured: bool,
    pub description: String,
}

/// Missing fields deserialize to their defaults so a partial submission
/// still reaches validation instead of being rejected as malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Feedback {
    pub firstname: String,
    pub lastname: String,
    pub telnum: String,
    pub email: String,
    pub agree: bool,
    pub contacttype: String,
    pub message: String,
}
