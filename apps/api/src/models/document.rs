use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An internal reference document that can be cited as evidence.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DocumentRow {
    pub id: String,
    pub locale: String,
    pub doc_type: Option<String>,
    pub title: String,
    pub text_content: String,
}

impl DocumentRow {
    /// Type tag used for evidence diversity; untyped documents share "unknown".
    pub fn type_tag(&self) -> &str {
        self.doc_type.as_deref().unwrap_or("unknown")
    }
}
