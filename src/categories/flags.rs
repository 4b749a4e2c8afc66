//! Feature flag and flag status endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::FeatureFlags;

const FLAG_PATH: &str = "/api/v2/flags/{projectKey}/{featureFlagKey}";

fn variation() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("value", FieldKind::any_object()),
        ("description", FieldKind::string()),
        ("name", FieldKind::string()),
    ])
    .with_required(["value"])
}

fn flag() -> FieldKind {
    FieldKind::object([
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("kind", FieldKind::string()),
        ("description", FieldKind::string()),
        ("_version", FieldKind::integer()),
        ("creationDate", FieldKind::integer()),
        ("includeInSnippet", FieldKind::boolean()),
        ("clientSideAvailability", FieldKind::any_object()),
        ("variations", FieldKind::array(variation())),
        ("temporary", FieldKind::boolean()),
        ("tags", FieldKind::array(FieldKind::string())),
        ("archived", FieldKind::boolean()),
        ("deprecated", FieldKind::boolean()),
        ("maintainerId", FieldKind::string()),
        ("customProperties", FieldKind::any_object()),
        ("defaults", FieldKind::any_object()),
        ("environments", FieldKind::any_object()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required([
        "key",
        "name",
        "kind",
        "_version",
        "creationDate",
        "variations",
        "temporary",
        "tags",
        "archived",
    ])
}

fn flag_status() -> FieldKind {
    FieldKind::object([
        ("name", FieldKind::string()),
        ("lastRequested", FieldKind::string()),
        ("default", FieldKind::any_object()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["name"])
}

fn flag_request(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor
        .path_param("projectKey", "The project key")
        .path_param("featureFlagKey", "The feature flag key")
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_feature_flags",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}",
        )
        .named("List feature flags")
        .described("Get a list of all feature flags in the given project")
        .path_param("projectKey", "The project key")
        .query_param(
            "env",
            FieldKind::array(FieldKind::string()),
            "Filter configurations by environment; one query parameter per environment",
        )
        .query_param("tag", FieldKind::string(), "Filter feature flags by tag")
        .paginated()
        .query_param(
            "archived",
            FieldKind::boolean(),
            "Deprecated, use filter=archived:true instead",
        )
        .query_param(
            "summary",
            FieldKind::boolean(),
            "By default, flags do not include their lists of prerequisites, targets, or rules",
        )
        .query_param(
            "filter",
            FieldKind::string(),
            "A comma-separated list of filters, such as query:dark-mode,tags:beta",
        )
        .query_param("sort", FieldKind::string(), "A comma-separated list of fields to sort by")
        .query_param(
            "compare",
            FieldKind::boolean(),
            "Whether to compare flag configurations across environments",
        )
        .query_param(
            "expand",
            FieldKind::string(),
            "A comma-separated list of fields to expand in the response",
        )
        .output(FieldKind::collection(flag())),
        EndpointDescriptor::new(
            "post_feature_flag",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/flags/{projectKey}",
        )
        .named("Create feature flag")
        .described("Create a feature flag with the given name, key, and variations")
        .path_param("projectKey", "The project key")
        .query_param(
            "clone",
            FieldKind::string(),
            "The key of the feature flag to be cloned",
        )
        .required_body_param("name", FieldKind::string(), "A human-friendly name for the feature flag")
        .required_body_param(
            "key",
            FieldKind::string(),
            "A unique key used to reference the flag in your code",
        )
        .body_param("description", FieldKind::string(), "Description of the feature flag")
        .body_param(
            "includeInSnippet",
            FieldKind::boolean(),
            "Deprecated, use clientSideAvailability",
        )
        .body_param(
            "clientSideAvailability",
            FieldKind::object([
                ("usingEnvironmentId", FieldKind::boolean()),
                ("usingMobileKey", FieldKind::boolean()),
            ]),
            "Which client-side SDKs can use this flag",
        )
        .body_param(
            "variations",
            FieldKind::array(variation()),
            "An array of possible variations for the flag",
        )
        .body_param(
            "temporary",
            FieldKind::boolean(),
            "Whether the flag is a temporary flag",
        )
        .body_param("tags", FieldKind::array(FieldKind::string()), "Tags for the feature flag")
        .body_param(
            "customProperties",
            FieldKind::any_object(),
            "Metadata attached to the feature flag, as key-value pairs",
        )
        .body_param(
            "defaults",
            FieldKind::object([
                ("onVariation", FieldKind::integer()),
                ("offVariation", FieldKind::integer()),
            ]),
            "The indices of the variations served when targeting is on and off",
        )
        .body_param(
            "purpose",
            FieldKind::string(),
            "Purpose of the flag, such as migration",
        )
        .body_param(
            "maintainerId",
            FieldKind::string(),
            "The ID of the member who maintains this feature flag",
        )
        .body_param(
            "maintainerTeamKey",
            FieldKind::string(),
            "The key of the team that maintains this feature flag",
        )
        .output(flag()),
        flag_request(EndpointDescriptor::new(
            "get_feature_flag",
            CATEGORY,
            HttpMethod::Get,
            FLAG_PATH,
        ))
        .named("Get feature flag")
        .described("Get a single feature flag by key")
        .query_param(
            "env",
            FieldKind::array(FieldKind::string()),
            "Filter configurations by environment; one query parameter per environment",
        )
        .query_param(
            "expand",
            FieldKind::string(),
            "A comma-separated list of fields to expand in the response",
        )
        .output(flag()),
        flag_request(EndpointDescriptor::new(
            "patch_feature_flag",
            CATEGORY,
            HttpMethod::Patch,
            FLAG_PATH,
        ))
        .named("Update feature flag")
        .described("Perform a partial update to a feature flag using a JSON patch representation")
        .query_param(
            "ignoreConflicts",
            FieldKind::boolean(),
            "If true, the patch is applied even if it causes a pending scheduled change or approval request to fail",
        )
        .query_param(
            "dryRun",
            FieldKind::boolean(),
            "If true, the patch is validated but not persisted",
        )
        .json_patch()
        .output(flag()),
        flag_request(EndpointDescriptor::new(
            "delete_feature_flag",
            CATEGORY,
            HttpMethod::Delete,
            FLAG_PATH,
        ))
        .named("Delete feature flag")
        .described("Delete a feature flag in all environments"),
        flag_request(EndpointDescriptor::new(
            "copy_feature_flag",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/flags/{projectKey}/{featureFlagKey}/copy",
        ))
        .named("Copy feature flag")
        .described("Copy flag settings from a source environment to a target environment")
        .required_body_param(
            "source",
            FieldKind::object([
                ("key", FieldKind::string()),
                ("currentVersion", FieldKind::integer()),
            ])
            .with_required(["key"]),
            "The source environment",
        )
        .required_body_param(
            "target",
            FieldKind::object([
                ("key", FieldKind::string()),
                ("currentVersion", FieldKind::integer()),
            ])
            .with_required(["key"]),
            "The target environment",
        )
        .body_param("comment", FieldKind::string(), "Optional comment")
        .body_param(
            "includedActions",
            FieldKind::array(FieldKind::string()),
            "Optional list of the flag changes to copy from the source environment",
        )
        .body_param(
            "excludedActions",
            FieldKind::array(FieldKind::string()),
            "Optional list of the flag changes not to copy from the source environment",
        )
        .output(flag()),
        EndpointDescriptor::new(
            "get_flag_statuses",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/flag-statuses/{projectKey}/{environmentKey}",
        )
        .named("List feature flag statuses")
        .described("Get a list of statuses for all feature flags in an environment")
        .path_param("projectKey", "The project key")
        .path_param("environmentKey", "The environment key")
        .output(
            FieldKind::object([
                ("items", FieldKind::array(flag_status())),
                ("_links", FieldKind::any_object()),
            ])
            .with_required(["items"]),
        ),
        EndpointDescriptor::new(
            "get_flag_status",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/flag-statuses/{projectKey}/{environmentKey}/{featureFlagKey}",
        )
        .named("Get feature flag status")
        .described("Get the status for a particular feature flag in an environment")
        .path_param("projectKey", "The project key")
        .path_param("environmentKey", "The environment key")
        .path_param("featureFlagKey", "The feature flag key")
        .output(flag_status()),
        EndpointDescriptor::new(
            "get_flag_status_across_environments",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/flag-status/{projectKey}/{featureFlagKey}",
        )
        .named("Get flag status across environments")
        .described("Get the status for a particular feature flag across environments")
        .path_param("projectKey", "The project key")
        .path_param("featureFlagKey", "The feature flag key")
        .query_param(
            "env",
            FieldKind::array(FieldKind::string()),
            "Only return statuses for these environments; one query parameter per environment",
        )
        .output(FieldKind::object([
            ("environments", FieldKind::any_object()),
            ("key", FieldKind::string()),
            ("_links", FieldKind::any_object()),
        ])),
        EndpointDescriptor::new(
            "get_expiring_context_targets",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/flags/{projectKey}/{featureFlagKey}/expiring-targets/{environmentKey}",
        )
        .named("Get expiring context targets")
        .described("Get a list of context targets on a feature flag that are scheduled for removal")
        .path_param("projectKey", "The project key")
        .path_param("featureFlagKey", "The feature flag key")
        .path_param("environmentKey", "The environment key")
        .output(FieldKind::collection(FieldKind::any_object())),
    ]
}
