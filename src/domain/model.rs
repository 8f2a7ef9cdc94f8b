use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Markup written into the container on render.
pub const WELCOME_MARKUP: &str = "<h1>Welcome</h1>";

/// Id of the container element the shell renders into by default.
pub const DEFAULT_CONTAINER_ID: &str = "app";

/// A record the shell will hold once initial data loading exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Constructed,
    Initialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_api_json() {
        let item: Item =
            serde_json::from_str(r#"{"data": {"id": 7, "title": "hello", "tags": ["a"]}}"#)
                .unwrap();
        assert_eq!(item.data["id"], serde_json::json!(7));
        assert_eq!(item.data["title"], "hello");

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["data"]["tags"], serde_json::json!(["a"]));
    }
}
