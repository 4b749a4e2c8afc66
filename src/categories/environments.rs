//! Environment endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Environments;

const ENVIRONMENT_PATH: &str = "/api/v2/projects/{projectKey}/environments/{environmentKey}";

pub(crate) fn environment() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("apiKey", FieldKind::string()),
        ("mobileKey", FieldKind::string()),
        ("color", FieldKind::string()),
        ("defaultTtl", FieldKind::integer()),
        ("secureMode", FieldKind::boolean()),
        ("defaultTrackEvents", FieldKind::boolean()),
        ("requireComments", FieldKind::boolean()),
        ("confirmChanges", FieldKind::boolean()),
        ("tags", FieldKind::array(FieldKind::string())),
        ("critical", FieldKind::boolean()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "key", "name", "apiKey", "mobileKey", "color"])
}

fn environment_request(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor
        .path_param("projectKey", "The project key")
        .path_param("environmentKey", "The environment key")
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_environments_by_project",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments",
        )
        .named("List environments")
        .described("Return a list of environments for the specified project")
        .path_param("projectKey", "The project key")
        .paginated()
        .query_param(
            "filter",
            FieldKind::string(),
            "A field to filter by, such as query:abc or tags:tag-1+tag-2",
        )
        .query_param("sort", FieldKind::string(), "A field to sort by, such as name or -createdOn")
        .output(FieldKind::collection(environment())),
        EndpointDescriptor::new(
            "post_environment",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments",
        )
        .named("Create environment")
        .described("Create a new environment in a specified project")
        .path_param("projectKey", "The project key")
        .required_body_param("name", FieldKind::string(), "A human-friendly name for the new environment")
        .required_body_param("key", FieldKind::string(), "A project-unique key for the new environment")
        .required_body_param(
            "color",
            FieldKind::string(),
            "A color to indicate this environment in the UI",
        )
        .body_param(
            "defaultTtl",
            FieldKind::integer(),
            "The default time (in minutes) that the PHP SDK can cache feature flag rules locally",
        )
        .body_param(
            "secureMode",
            FieldKind::boolean(),
            "Ensures that one end user of the client-side SDK cannot inspect the variations for another",
        )
        .body_param(
            "defaultTrackEvents",
            FieldKind::boolean(),
            "Enables tracking detailed information for new flags by default",
        )
        .body_param(
            "confirmChanges",
            FieldKind::boolean(),
            "Requires confirmation for all flag and segment changes",
        )
        .body_param(
            "requireComments",
            FieldKind::boolean(),
            "Requires comments for all flag and segment changes",
        )
        .body_param("tags", FieldKind::array(FieldKind::string()), "Tags to apply to the new environment")
        .body_param(
            "source",
            FieldKind::object([
                ("key", FieldKind::string()),
                ("version", FieldKind::integer()),
            ]),
            "An existing environment to clone settings from",
        )
        .body_param(
            "critical",
            FieldKind::boolean(),
            "Whether the environment is critical",
        )
        .output(environment()),
        environment_request(EndpointDescriptor::new(
            "get_environment",
            CATEGORY,
            HttpMethod::Get,
            ENVIRONMENT_PATH,
        ))
        .named("Get environment")
        .described("Get an environment given a project and key")
        .output(environment()),
        environment_request(EndpointDescriptor::new(
            "patch_environment",
            CATEGORY,
            HttpMethod::Patch,
            ENVIRONMENT_PATH,
        ))
        .named("Update environment")
        .described("Update an environment using a JSON patch representation")
        .json_patch()
        .output(environment()),
        environment_request(EndpointDescriptor::new(
            "delete_environment",
            CATEGORY,
            HttpMethod::Delete,
            ENVIRONMENT_PATH,
        ))
        .named("Delete environment")
        .described("Delete an environment in a specific project"),
        environment_request(EndpointDescriptor::new(
            "reset_environment_sdk_key",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/apiKey",
        ))
        .named("Reset environment SDK key")
        .described("Reset an environment's SDK key with an optional expiry time for the old key")
        .query_param(
            "expiry",
            FieldKind::integer(),
            "The time at which the old SDK key expires, in milliseconds since epoch",
        )
        .output(environment()),
        environment_request(EndpointDescriptor::new(
            "reset_environment_mobile_key",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/mobileKey",
        ))
        .named("Reset environment mobile SDK key")
        .described("Reset an environment's mobile key; the old key is disabled immediately")
        .output(environment()),
    ]
}
