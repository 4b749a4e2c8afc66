//! Tests for endpoint descriptors
//!
//! Descriptors turn host inputs into a concrete path, query string and body.
//! These tests cover template interpolation, the path/query/body split, and the
//! consistency checks run at registration.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{json, Map, Value};

    use crate::categories::BlockCategory;
    use crate::client::HttpMethod;
    use crate::core::block::BlockError;
    use crate::core::endpoint::{encode_path_segment, EndpointDescriptor, ParamLocation};
    use crate::core::schema::FieldKind;

    fn inputs(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    fn flag_descriptor() -> EndpointDescriptor {
        EndpointDescriptor::new(
            "get_feature_flag",
            BlockCategory::FeatureFlags,
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}/{featureFlagKey}",
        )
        .path_param("projectKey", "The project key")
        .path_param("featureFlagKey", "The feature flag key")
        .query_param("env", FieldKind::array(FieldKind::string()), "Environments")
        .query_param("expand", FieldKind::string(), "Expand")
    }

    fn patch_descriptor() -> EndpointDescriptor {
        EndpointDescriptor::new(
            "patch_feature_flag",
            BlockCategory::FeatureFlags,
            HttpMethod::Patch,
            "/api/v2/flags/{projectKey}/{featureFlagKey}",
        )
        .path_param("projectKey", "The project key")
        .path_param("featureFlagKey", "The feature flag key")
        .query_param("dryRun", FieldKind::boolean(), "Validate only")
        .json_patch()
    }

    #[test]
    fn test_placeholders_in_order() {
        assert_eq!(
            flag_descriptor().placeholders(),
            vec!["projectKey", "featureFlagKey"]
        );
    }

    #[test]
    fn test_interpolate_path_substitutes_all_placeholders() {
        let path = flag_descriptor()
            .interpolate_path(&inputs(json!({
                "projectKey": "default",
                "featureFlagKey": "dark-mode"
            })))
            .unwrap();

        assert_eq!(path, "/api/v2/flags/default/dark-mode");
    }

    #[test]
    fn test_interpolate_path_encodes_segments() {
        let path = flag_descriptor()
            .interpolate_path(&inputs(json!({
                "projectKey": "my project",
                "featureFlagKey": "a/b+c"
            })))
            .unwrap();

        assert_eq!(path, "/api/v2/flags/my%20project/a%2Fb%2Bc");
    }

    #[test]
    fn test_interpolate_path_accepts_numbers() {
        let descriptor = EndpointDescriptor::new(
            "get_audit_log_entry",
            BlockCategory::AuditLog,
            HttpMethod::Get,
            "/api/v2/auditlog/{id}",
        )
        .path_param("id", "Entry ID");

        let path = descriptor.interpolate_path(&inputs(json!({"id": 42}))).unwrap();
        assert_eq!(path, "/api/v2/auditlog/42");
    }

    #[test]
    fn test_interpolate_path_missing_parameter() {
        let err = flag_descriptor()
            .interpolate_path(&inputs(json!({"projectKey": "default"})))
            .unwrap_err();

        match err {
            BlockError::MissingParameter(name) => assert_eq!(name, "featureFlagKey"),
            other => panic!("expected missing parameter, got {:?}", other),
        }
    }

    #[test]
    fn test_interpolate_path_rejects_null_empty_and_objects() {
        let descriptor = flag_descriptor();

        let null = descriptor.interpolate_path(&inputs(json!({
            "projectKey": null, "featureFlagKey": "f"
        })));
        assert!(matches!(null, Err(BlockError::MissingParameter(_))));

        let empty = descriptor.interpolate_path(&inputs(json!({
            "projectKey": "", "featureFlagKey": "f"
        })));
        assert!(matches!(empty, Err(BlockError::MissingParameter(_))));

        let object = descriptor.interpolate_path(&inputs(json!({
            "projectKey": {"k": 1}, "featureFlagKey": "f"
        })));
        assert!(matches!(object, Err(BlockError::InvalidParameter(_))));
    }

    #[test]
    fn test_interpolate_path_rejects_dot_segments() {
        let descriptor = flag_descriptor();

        for (project, flag) in [("..", "dark-mode"), ("default", "."), ("..", ".")] {
            let result = descriptor.interpolate_path(&inputs(json!({
                "projectKey": project,
                "featureFlagKey": flag
            })));
            assert!(
                matches!(result, Err(BlockError::InvalidParameter(_))),
                "{}/{} was accepted: {:?}",
                project,
                flag,
                result
            );
        }

        // Dots inside a longer key are ordinary characters
        let path = descriptor
            .interpolate_path(&inputs(json!({
                "projectKey": "...",
                "featureFlagKey": "v1.2"
            })))
            .unwrap();
        assert_eq!(path, "/api/v2/flags/.../v1.2");
    }

    #[test]
    fn test_prepare_get_uses_query_and_no_body() {
        let prepared = flag_descriptor()
            .prepare(&inputs(json!({
                "projectKey": "default",
                "featureFlagKey": "dark-mode",
                "env": ["production", "staging"]
            })))
            .unwrap();

        assert_eq!(prepared.path, "/api/v2/flags/default/dark-mode");
        assert_eq!(prepared.options.method, HttpMethod::Get);
        assert_eq!(prepared.options.body, None);
        // expand was not supplied and is left out
        assert_eq!(
            prepared.options.query,
            vec![("env".to_string(), json!(["production", "staging"]))]
        );
    }

    #[test]
    fn test_prepare_patch_builds_filtered_body() {
        let prepared = patch_descriptor()
            .prepare(&inputs(json!({
                "projectKey": "default",
                "featureFlagKey": "dark-mode",
                "dryRun": true,
                "patch": [{"op": "replace", "path": "/description", "value": "new"}]
            })))
            .unwrap();

        assert_eq!(
            prepared.options.body,
            Some(json!({
                "patch": [{"op": "replace", "path": "/description", "value": "new"}]
            }))
        );
        assert_eq!(prepared.options.query, vec![("dryRun".to_string(), json!(true))]);
    }

    #[test]
    fn test_prepare_ignores_inputs_not_declared() {
        let prepared = patch_descriptor()
            .prepare(&inputs(json!({
                "projectKey": "default",
                "featureFlagKey": "dark-mode",
                "patch": [],
                "unexpected": "value"
            })))
            .unwrap();

        let body = prepared.options.body.unwrap();
        assert!(body.get("unexpected").is_none());
        assert!(body.get("projectKey").is_none());
    }

    #[test]
    fn test_prepare_post_without_body_inputs_sends_no_body() {
        let descriptor = EndpointDescriptor::new(
            "reset_token",
            BlockCategory::AccessTokens,
            HttpMethod::Post,
            "/api/v2/tokens/{id}/reset",
        )
        .path_param("id", "Token ID")
        .query_param("expiry", FieldKind::integer(), "Expiry");

        let prepared = descriptor.prepare(&inputs(json!({"id": "tok"}))).unwrap();
        assert_eq!(prepared.options.body, None);
        assert!(prepared.options.query.is_empty());
    }

    #[test]
    fn test_json_patch_declares_patch_and_comment() {
        let descriptor = patch_descriptor();
        let body: Vec<&str> = descriptor
            .params_at(ParamLocation::Body)
            .map(|p| p.name())
            .collect();
        assert_eq!(body, vec!["patch", "comment"]);

        let schema = descriptor.input_schema();
        let patch = schema.iter().find(|f| f.name == "patch").unwrap();
        assert!(patch.required);
    }

    #[test]
    fn test_validate_accepts_consistent_descriptor() {
        assert!(flag_descriptor().validate().is_ok());
        assert!(patch_descriptor().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_placeholder_without_param() {
        let descriptor = EndpointDescriptor::new(
            "broken",
            BlockCategory::Projects,
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}",
        );
        assert!(matches!(
            descriptor.validate(),
            Err(BlockError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unused_path_param() {
        let descriptor = EndpointDescriptor::new(
            "broken",
            BlockCategory::Projects,
            HttpMethod::Get,
            "/api/v2/projects",
        )
        .path_param("projectKey", "The project key");
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_params() {
        let descriptor = EndpointDescriptor::new(
            "broken",
            BlockCategory::Projects,
            HttpMethod::Get,
            "/api/v2/projects",
        )
        .paginated()
        .query_param("limit", FieldKind::integer(), "Again");
        assert!(descriptor.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_body_on_get() {
        let descriptor = EndpointDescriptor::new(
            "broken",
            BlockCategory::Projects,
            HttpMethod::Get,
            "/api/v2/projects",
        )
        .body_param("name", FieldKind::string(), "Name");
        assert!(descriptor.validate().is_err());
    }

    proptest! {
        /// Any non-empty key interpolates to a path with no placeholder syntax
        /// and exactly the template's number of segments.
        #[test]
        fn interpolated_path_has_no_residual_placeholders(
            project in "\\PC{1,24}",
            flag in "\\PC{1,24}",
        ) {
            prop_assume!(project != "." && project != "..");
            prop_assume!(flag != "." && flag != "..");

            let path = flag_descriptor()
                .interpolate_path(&inputs(json!({
                    "projectKey": project,
                    "featureFlagKey": flag
                })))
                .unwrap();

            prop_assert!(!path.contains('{'), "unfilled placeholder in {}", path);
            prop_assert!(!path.contains('}'), "unfilled placeholder in {}", path);
            prop_assert_eq!(path.split('/').count(), 6);
            prop_assert!(path.starts_with("/api/v2/flags/"));
        }

        /// Encoded segments only contain unreserved characters and escapes.
        #[test]
        fn encoded_segment_is_url_safe(segment in "\\PC{0,32}") {
            let encoded = encode_path_segment(&segment);
            prop_assert!(encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "-._*%".contains(c)));
        }
    }
}
