use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Action fields sent when creating or updating an action.
/// Empty fields are omitted from the serialized body so partial updates
/// only touch the fields the caller set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ActionDetails {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub root_code: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub transport_type: String,
    #[serde(
        rename = "world_operator_ids",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub world_operators: Vec<String>,
}

/// Request envelope for action create/update calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    pub custom_action: ActionDetails,
}

/// An action resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionListResponse {
    pub data: Vec<Action>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionResponse {
    pub data: Action,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_request_round_trip_omits_empty_fields() {
        let request = ActionRequest {
            custom_action: ActionDetails {
                name: "x".into(),
                ..Default::default()
            },
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"custom_action":{"name":"x"}}"#);

        let parsed: ActionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.custom_action.name, "x");
        assert!(parsed.custom_action.root_code.is_empty());
        assert!(parsed.custom_action.world_operators.is_empty());
    }

    #[test]
    fn test_action_details_serializes_operator_ids_key() {
        let details = ActionDetails {
            name: "balance check".into(),
            root_code: "*123#".into(),
            transport_type: "ussd".into(),
            world_operators: vec!["42".into(), "43".into()],
        };

        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["world_operator_ids"][0], "42");
        assert_eq!(value["transport_type"], "ussd");
    }

    #[test]
    fn test_action_list_response_parses_attributes() {
        let json = r#"{"data":[{"id":"a1","attributes":{"name":"check","enabled":true}}]}"#;
        let list: ActionListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(list.data.len(), 1);
        assert_eq!(list.data[0].id, "a1");
        assert_eq!(list.data[0].attributes["name"], "check");
        assert_eq!(list.data[0].attributes["enabled"], true);
    }

    #[test]
    fn test_action_without_attributes_defaults_empty() {
        let json = r#"{"data":{"id":"a2"}}"#;
        let resp: ActionResponse = serde_json::from_str(json).unwrap();
        assert!(resp.data.attributes.is_empty());
    }
}
