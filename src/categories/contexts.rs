//! Context and context kind endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Contexts;

fn context_kind() -> FieldKind {
    FieldKind::object([
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("description", FieldKind::string()),
        ("version", FieldKind::integer()),
        ("creationDate", FieldKind::integer()),
        ("lastModified", FieldKind::integer()),
        ("hideInTargeting", FieldKind::boolean()),
        ("archived", FieldKind::boolean()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["key", "name", "description", "version"])
}

fn context_records() -> FieldKind {
    FieldKind::object([
        ("items", FieldKind::array(FieldKind::any_object())),
        ("totalCount", FieldKind::integer()),
        ("continuationToken", FieldKind::string()),
        ("environmentId", FieldKind::string()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["items", "environmentId"])
}

fn context_search_params(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor
        .query_param(
            "limit",
            FieldKind::integer(),
            "Specifies the maximum number of items in the collection to return (max: 50)",
        )
        .query_param(
            "continuationToken",
            FieldKind::string(),
            "Limits results to items after the given continuation token",
        )
        .query_param(
            "sort",
            FieldKind::string(),
            "Sort by a field: ts (ascending) or -ts (descending)",
        )
        .query_param("filter", FieldKind::string(), "A comma-separated list of context filters")
        .query_param(
            "includeTotalCount",
            FieldKind::boolean(),
            "Whether to include the total count of matching items",
        )
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_context_kinds_by_project_key",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/context-kinds",
        )
        .named("Get context kinds")
        .described("Get all context kinds for a given project")
        .path_param("projectKey", "The project key")
        .output(FieldKind::collection(context_kind())),
        EndpointDescriptor::new(
            "put_context_kind",
            CATEGORY,
            HttpMethod::Put,
            "/api/v2/projects/{projectKey}/context-kinds/{key}",
        )
        .named("Create or update context kind")
        .described("Create or update a context kind by key")
        .path_param("projectKey", "The project key")
        .path_param("key", "The context kind key")
        .required_body_param("name", FieldKind::string(), "The context kind name")
        .body_param("description", FieldKind::string(), "The context kind description")
        .body_param(
            "hideInTargeting",
            FieldKind::boolean(),
            "Alias for archived",
        )
        .body_param("archived", FieldKind::boolean(), "Whether the context kind is archived")
        .body_param(
            "version",
            FieldKind::integer(),
            "The context kind version; required when updating an existing kind",
        )
        .output(FieldKind::object([
            ("status", FieldKind::string()),
            ("_links", FieldKind::any_object()),
        ])),
        context_search_params(
            EndpointDescriptor::new(
                "get_contexts",
                CATEGORY,
                HttpMethod::Get,
                "/api/v2/projects/{projectKey}/environments/{environmentKey}/contexts/{kind}/{key}",
            )
            .named("Get contexts")
            .described("Get contexts based on kind and key")
            .path_param("projectKey", "The project key")
            .path_param("environmentKey", "The environment key")
            .path_param("kind", "The context kind")
            .path_param("key", "The context key"),
        )
        .output(context_records()),
        context_search_params(
            EndpointDescriptor::new(
                "get_context_instances",
                CATEGORY,
                HttpMethod::Get,
                "/api/v2/projects/{projectKey}/environments/{environmentKey}/context-instances/{id}",
            )
            .named("Get context instances")
            .described("Get context instances by ID")
            .path_param("projectKey", "The project key")
            .path_param("environmentKey", "The environment key")
            .path_param("id", "The context instance ID"),
        )
        .output(context_records()),
        EndpointDescriptor::new(
            "search_contexts",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/contexts/search",
        )
        .named("Search for contexts")
        .described("Search for contexts with the given filter, sort and pagination options")
        .path_param("projectKey", "The project key")
        .path_param("environmentKey", "The environment key")
        .body_param("filter", FieldKind::string(), "A collection of context filters")
        .body_param(
            "sort",
            FieldKind::string(),
            "Sort by a field: ts (ascending) or -ts (descending)",
        )
        .body_param(
            "limit",
            FieldKind::integer(),
            "Specifies the maximum number of items in the collection to return (max: 50)",
        )
        .body_param(
            "continuationToken",
            FieldKind::string(),
            "Limits results to items after the given continuation token",
        )
        .output(context_records()),
        EndpointDescriptor::new(
            "get_context_attribute_names",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/context-attributes",
        )
        .named("Get context attribute names")
        .described("Get context attribute names seen in the given environment")
        .path_param("projectKey", "The project key")
        .path_param("environmentKey", "The environment key")
        .query_param("filter", FieldKind::string(), "A comma-separated list of context filters")
        .query_param(
            "limit",
            FieldKind::integer(),
            "Specifies the maximum number of items to return",
        )
        .output(
            FieldKind::object([("items", FieldKind::array(FieldKind::any_object()))])
                .with_required(["items"]),
        ),
        EndpointDescriptor::new(
            "delete_context_instances",
            CATEGORY,
            HttpMethod::Delete,
            "/api/v2/projects/{projectKey}/environments/{environmentKey}/context-instances/{id}",
        )
        .named("Delete context instances")
        .described("Delete context instances by ID")
        .path_param("projectKey", "The project key")
        .path_param("environmentKey", "The environment key")
        .path_param("id", "The context instance ID"),
    ]
}
