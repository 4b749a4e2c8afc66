//! Account member endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Members;

fn member() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("email", FieldKind::string()),
        ("firstName", FieldKind::string()),
        ("lastName", FieldKind::string()),
        ("role", FieldKind::string()),
        ("customRoles", FieldKind::array(FieldKind::string())),
        ("_pendingInvite", FieldKind::boolean()),
        ("_verified", FieldKind::boolean()),
        ("mfa", FieldKind::string()),
        ("_lastSeen", FieldKind::integer()),
        ("creationDate", FieldKind::integer()),
        ("teams", FieldKind::array(FieldKind::any_object())),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "email", "role", "_pendingInvite", "_verified", "creationDate"])
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new("get_members", CATEGORY, HttpMethod::Get, "/api/v2/members")
            .named("List account members")
            .described("Return a list of account members")
            .paginated()
            .query_param(
                "filter",
                FieldKind::string(),
                "A comma-separated list of filters, such as query:abc,role:admin",
            )
            .query_param("sort", FieldKind::string(), "A comma-separated list of fields to sort by")
            .query_param(
                "expand",
                FieldKind::string(),
                "A comma-separated list of properties that can reveal additional information",
            )
            .output(FieldKind::collection(member())),
        EndpointDescriptor::new("get_member", CATEGORY, HttpMethod::Get, "/api/v2/members/{id}")
            .named("Get account member")
            .described("Get a single account member by member ID")
            .path_param("id", "The member ID")
            .query_param(
                "expand",
                FieldKind::string(),
                "A comma-separated list of properties that can reveal additional information",
            )
            .output(member()),
        EndpointDescriptor::new("patch_member", CATEGORY, HttpMethod::Patch, "/api/v2/members/{id}")
            .named("Modify an account member")
            .described("Update a single account member using a JSON patch representation")
            .path_param("id", "The member ID")
            .json_patch()
            .output(member()),
        EndpointDescriptor::new(
            "delete_member",
            CATEGORY,
            HttpMethod::Delete,
            "/api/v2/members/{id}",
        )
        .named("Delete account member")
        .described("Delete a single account member by ID")
        .path_param("id", "The member ID"),
        EndpointDescriptor::new(
            "post_member_teams",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/members/{id}/teams",
        )
        .named("Add a member to teams")
        .described("Add one member to one or more teams")
        .path_param("id", "The member ID")
        .required_body_param(
            "teamKeys",
            FieldKind::array(FieldKind::string()),
            "List of team keys",
        )
        .output(member()),
    ]
}
