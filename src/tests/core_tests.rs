//! Tests for core types: schemas, categories and block errors

#[cfg(test)]
mod core_tests {
    use serde_json::json;

    use crate::categories::BlockCategory;
    use crate::client::{ApiError, HttpMethod};
    use crate::core::block::{BlockError, InvocationId, OutputEvent};
    use crate::core::schema::{ConfigField, FieldKind, PrimitiveType};

    /// Schemas serialize with a `type` tag, the shape hosts read
    #[test]
    fn test_field_kind_serialization() {
        let kind = FieldKind::object([
            ("key", FieldKind::string()),
            ("tags", FieldKind::array(FieldKind::string())),
        ])
        .with_required(["key"]);

        let value = serde_json::to_value(&kind).unwrap();
        assert_eq!(value["type"], "Object");
        assert_eq!(value["required"], json!(["key"]));
        assert_eq!(value["properties"][1][0], "tags");
        assert_eq!(value["properties"][1][1]["type"], "Array");

        let back: FieldKind = serde_json::from_value(value).unwrap();
        assert_eq!(back, kind);
    }

    #[test]
    fn test_field_kind_helpers() {
        assert_eq!(
            FieldKind::integer(),
            FieldKind::Primitive {
                prim_type: PrimitiveType::Integer
            }
        );
        assert!(FieldKind::boolean().is_primitive());
        assert!(!FieldKind::any_object().is_primitive());

        // with_required is a no-op on non-object schemas
        assert_eq!(
            FieldKind::string().with_required(["x"]),
            FieldKind::string()
        );
    }

    #[test]
    fn test_collection_envelope() {
        let collection = FieldKind::collection(FieldKind::string());
        assert_eq!(
            collection.property("items"),
            Some(&FieldKind::array(FieldKind::string()))
        );
        assert_eq!(collection.property("totalCount"), Some(&FieldKind::integer()));
        assert_eq!(collection.property("missing"), None);
    }

    #[test]
    fn test_config_field_builder() {
        let field = ConfigField::new("projectKey", FieldKind::string())
            .required()
            .with_description("The project key");

        assert!(field.required);
        assert_eq!(field.description, "The project key");
        assert!(!ConfigField::new("limit", FieldKind::integer()).required);
    }

    #[test]
    fn test_category_parsing_and_display() {
        assert_eq!(
            "feature_flags".parse::<BlockCategory>().unwrap(),
            BlockCategory::FeatureFlags
        );
        assert_eq!(
            "Audit-Log".parse::<BlockCategory>().unwrap(),
            BlockCategory::AuditLog
        );
        assert!("nonsense".parse::<BlockCategory>().is_err());
        assert_eq!(BlockCategory::CustomRoles.to_string(), "Custom roles");

        for category in BlockCategory::ALL {
            let serialized = serde_json::to_value(category).unwrap();
            assert_eq!(serialized, json!(category.slug()));
        }
    }

    #[test]
    fn test_http_method_serialization() {
        assert_eq!(serde_json::to_value(HttpMethod::Patch).unwrap(), json!("PATCH"));
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert!(HttpMethod::Put.sends_body());
        assert!(!HttpMethod::Delete.sends_body());
    }

    #[test]
    fn test_invocation_ids_are_unique() {
        assert_ne!(InvocationId::new(), InvocationId::new());
    }

    #[test]
    fn test_output_event_serialization() {
        let event = OutputEvent {
            invocation_id: InvocationId::new(),
            block_id: "get_project".into(),
            payload: Some(json!({"key": "default"})),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["block_id"], "get_project");
        assert_eq!(value["payload"], json!({"key": "default"}));

        let empty = OutputEvent {
            payload: None,
            ..event
        };
        assert_eq!(serde_json::to_value(&empty).unwrap()["payload"], json!(null));
    }

    #[test]
    fn test_block_error_codes() {
        assert_eq!(
            BlockError::MissingParameter("projectKey".into()).code(),
            "MISSING_PARAMETER"
        );
        let api = BlockError::from(ApiError::Api {
            status: 409,
            body: "conflict".into(),
        });
        assert_eq!(api.code(), "API_ERROR");
        assert!(api.to_string().contains("409"));
    }
}
