//! Project endpoints

use super::environments::environment;
use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Projects;

fn project() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("includeInSnippetByDefault", FieldKind::boolean()),
        ("defaultClientSideAvailability", FieldKind::any_object()),
        ("tags", FieldKind::array(FieldKind::string())),
        ("defaultReleasePipelineKey", FieldKind::string()),
        ("environments", FieldKind::collection(environment())),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "key", "name", "includeInSnippetByDefault", "tags"])
}

fn expand_param(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor.query_param(
        "expand",
        FieldKind::string(),
        "A comma-separated list of properties that can reveal additional information, such as environments",
    )
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        expand_param(
            EndpointDescriptor::new("get_projects", CATEGORY, HttpMethod::Get, "/api/v2/projects")
                .named("List projects")
                .described("Return a list of projects")
                .paginated()
                .query_param(
                    "filter",
                    FieldKind::string(),
                    "A comma-separated list of filters, such as query:abc,tags:tag-1",
                )
                .query_param("sort", FieldKind::string(), "A comma-separated list of fields to sort by"),
        )
        .output(FieldKind::collection(project())),
        EndpointDescriptor::new("post_project", CATEGORY, HttpMethod::Post, "/api/v2/projects")
            .named("Create project")
            .described("Create a new project with the given key and name")
            .required_body_param("name", FieldKind::string(), "A human-friendly name for the project")
            .required_body_param(
                "key",
                FieldKind::string(),
                "A unique key used to reference the project in your code",
            )
            .body_param(
                "includeInSnippetByDefault",
                FieldKind::boolean(),
                "Whether or not flags created in this project are made available to the client-side JavaScript SDK by default",
            )
            .body_param(
                "defaultClientSideAvailability",
                FieldKind::object([
                    ("usingEnvironmentId", FieldKind::boolean()),
                    ("usingMobileKey", FieldKind::boolean()),
                ]),
                "Controls which client-side SDKs can use new flags by default",
            )
            .body_param("tags", FieldKind::array(FieldKind::string()), "Tags for the project")
            .body_param(
                "environments",
                FieldKind::array(FieldKind::any_object()),
                "Environments to create with the project",
            )
            .body_param(
                "namingConvention",
                FieldKind::object([
                    ("case", FieldKind::string()),
                    ("prefix", FieldKind::string()),
                ]),
                "The flag key naming convention for the project",
            )
            .output(project()),
        expand_param(
            EndpointDescriptor::new(
                "get_project",
                CATEGORY,
                HttpMethod::Get,
                "/api/v2/projects/{projectKey}",
            )
            .named("Get project")
            .described("Get a single project by key")
            .path_param("projectKey", "The project key"),
        )
        .output(project()),
        EndpointDescriptor::new(
            "patch_project",
            CATEGORY,
            HttpMethod::Patch,
            "/api/v2/projects/{projectKey}",
        )
        .named("Update project")
        .described("Update a project using a JSON patch representation")
        .path_param("projectKey", "The project key")
        .json_patch()
        .output(project()),
        EndpointDescriptor::new(
            "delete_project",
            CATEGORY,
            HttpMethod::Delete,
            "/api/v2/projects/{projectKey}",
        )
        .named("Delete project")
        .described("Delete a project by key; this also deletes all of its environments and flags")
        .path_param("projectKey", "The project key"),
    ]
}
