use serde_json::{json, Map, Value};

/// Optional filters for clinic lookup. Empty filter lists everything.
#[derive(Debug, Clone, Default)]
pub struct BusinessFilter {
    pub business_id: Option<i64>,
    pub parent_business_id: Option<i64>,
}

impl BusinessFilter {
    pub fn by_id(business_id: i64) -> Self {
        Self {
            business_id: Some(business_id),
            ..Self::default()
        }
    }

    pub fn to_parameters(&self) -> Value {
        let mut params = Map::new();
        if let Some(id) = self.business_id {
            params.insert("business_id".to_string(), json!(id));
        }
        if let Some(id) = self.parent_business_id {
            params.insert("parent_business_id".to_string(), json!(id));
        }
        Value::Object(params)
    }
}
