use serde_json::{Map, Value};
use sqlx::{types::Json, FromRow};

/// A versioned document in the `questions` collection.
#[derive(Debug, Clone, FromRow)]
pub struct QuestionSet {
    pub version: i32,
    pub document: Json<Value>,
}

impl QuestionSet {
    /// The document as handed to clients: storage `_id` removed, `version`
    /// set to the column the set was selected by.
    pub fn into_payload(self) -> Value {
        let mut doc = match self.document.0 {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("questions".into(), other);
                map
            }
        };
        doc.remove("_id");
        doc.insert("version".into(), Value::from(self.version));
        Value::Object(doc)
    }
}
