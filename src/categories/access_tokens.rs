//! Access token endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::AccessTokens;

fn token() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("ownerId", FieldKind::string()),
        ("memberId", FieldKind::string()),
        ("name", FieldKind::string()),
        ("description", FieldKind::string()),
        ("role", FieldKind::string()),
        ("customRoleIds", FieldKind::array(FieldKind::string())),
        ("inlineRole", FieldKind::array(FieldKind::any_object())),
        ("token", FieldKind::string()),
        ("serviceToken", FieldKind::boolean()),
        ("defaultApiVersion", FieldKind::integer()),
        ("creationDate", FieldKind::integer()),
        ("lastModified", FieldKind::integer()),
        ("lastUsed", FieldKind::integer()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "ownerId", "memberId", "creationDate", "lastModified"])
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new("get_tokens", CATEGORY, HttpMethod::Get, "/api/v2/tokens")
            .named("List access tokens")
            .described("Fetch a list of all access tokens")
            .query_param(
                "showAll",
                FieldKind::boolean(),
                "If true, include tokens owned by other account members",
            )
            .paginated()
            .output(FieldKind::collection(token())),
        EndpointDescriptor::new("post_token", CATEGORY, HttpMethod::Post, "/api/v2/tokens")
            .named("Create access token")
            .described("Create a new access token")
            .body_param("name", FieldKind::string(), "A human-friendly name for the access token")
            .body_param("description", FieldKind::string(), "A description for the access token")
            .body_param(
                "role",
                FieldKind::string(),
                "Built-in role for the token: reader, writer, or admin",
            )
            .body_param(
                "customRoleIds",
                FieldKind::array(FieldKind::string()),
                "A list of custom role IDs to use as access limits for the access token",
            )
            .body_param(
                "inlineRole",
                FieldKind::array(FieldKind::any_object()),
                "A JSON array of statements represented as JSON objects",
            )
            .body_param(
                "serviceToken",
                FieldKind::boolean(),
                "Whether the token is a service token",
            )
            .body_param(
                "defaultApiVersion",
                FieldKind::integer(),
                "The default API version for this token",
            )
            .output(token()),
        EndpointDescriptor::new("get_token", CATEGORY, HttpMethod::Get, "/api/v2/tokens/{id}")
            .named("Get access token")
            .described("Get a single access token by ID")
            .path_param("id", "The ID of the access token")
            .output(token()),
        EndpointDescriptor::new("patch_token", CATEGORY, HttpMethod::Patch, "/api/v2/tokens/{id}")
            .named("Patch access token")
            .described("Update an access token's settings using a JSON patch representation")
            .path_param("id", "The ID of the access token to update")
            .json_patch()
            .output(token()),
        EndpointDescriptor::new("delete_token", CATEGORY, HttpMethod::Delete, "/api/v2/tokens/{id}")
            .named("Delete access token")
            .described("Delete an access token by ID")
            .path_param("id", "The ID of the access token to delete"),
        EndpointDescriptor::new(
            "reset_token",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/tokens/{id}/reset",
        )
        .named("Reset access token")
        .described("Reset an access token's secret key with an optional expiry time for the old key")
        .path_param("id", "The ID of the access token to reset")
        .query_param(
            "expiry",
            FieldKind::integer(),
            "An expiration time for the old token key, in milliseconds since epoch",
        )
        .output(token()),
    ]
}
