//! Custom role endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::CustomRoles;

fn statement() -> FieldKind {
    FieldKind::object([
        ("effect", FieldKind::string()),
        ("resources", FieldKind::array(FieldKind::string())),
        ("notResources", FieldKind::array(FieldKind::string())),
        ("actions", FieldKind::array(FieldKind::string())),
        ("notActions", FieldKind::array(FieldKind::string())),
    ])
    .with_required(["effect"])
}

fn custom_role() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("description", FieldKind::string()),
        ("policy", FieldKind::array(statement())),
        ("basePermissions", FieldKind::string()),
        ("_access", FieldKind::any_object()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "key", "name", "policy"])
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new("get_custom_roles", CATEGORY, HttpMethod::Get, "/api/v2/roles")
            .named("List custom roles")
            .described("Get a complete list of custom roles")
            .paginated()
            .output(FieldKind::collection(custom_role())),
        EndpointDescriptor::new("post_custom_role", CATEGORY, HttpMethod::Post, "/api/v2/roles")
            .named("Create custom role")
            .described("Create a new custom role")
            .required_body_param("name", FieldKind::string(), "A human-friendly name for the custom role")
            .required_body_param("key", FieldKind::string(), "The custom role key")
            .body_param("description", FieldKind::string(), "Description of custom role")
            .required_body_param(
                "policy",
                FieldKind::array(statement()),
                "Policy statements that make up the role",
            )
            .body_param(
                "basePermissions",
                FieldKind::string(),
                "Base permissions: reader or no_access",
            )
            .output(custom_role()),
        EndpointDescriptor::new(
            "get_custom_role",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/roles/{customRoleKey}",
        )
        .named("Get custom role")
        .described("Get a single custom role by key or ID")
        .path_param("customRoleKey", "The custom role key or ID")
        .output(custom_role()),
        EndpointDescriptor::new(
            "patch_custom_role",
            CATEGORY,
            HttpMethod::Patch,
            "/api/v2/roles/{customRoleKey}",
        )
        .named("Update custom role")
        .described("Update a single custom role using a JSON patch representation")
        .path_param("customRoleKey", "The custom role key")
        .json_patch()
        .output(custom_role()),
        EndpointDescriptor::new(
            "delete_custom_role",
            CATEGORY,
            HttpMethod::Delete,
            "/api/v2/roles/{customRoleKey}",
        )
        .named("Delete custom role")
        .described("Delete a custom role by key")
        .path_param("customRoleKey", "The custom role key"),
    ]
}
