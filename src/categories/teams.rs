//! Team endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Teams;

fn team() -> FieldKind {
    FieldKind::object([
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("description", FieldKind::string()),
        ("_creationDate", FieldKind::integer()),
        ("_lastModified", FieldKind::integer()),
        ("_version", FieldKind::integer()),
        ("_idpSynced", FieldKind::boolean()),
        ("roles", FieldKind::any_object()),
        ("members", FieldKind::object([("totalCount", FieldKind::integer())])),
        ("projects", FieldKind::any_object()),
        ("maintainers", FieldKind::any_object()),
        ("_access", FieldKind::any_object()),
        ("_links", FieldKind::any_object()),
    ])
}

fn expand_param(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor.query_param(
        "expand",
        FieldKind::string(),
        "A comma-separated list of properties: members, roles, projects, or maintainers",
    )
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        expand_param(
            EndpointDescriptor::new("get_teams", CATEGORY, HttpMethod::Get, "/api/v2/teams")
                .named("List teams")
                .described("Return a list of teams")
                .paginated()
                .query_param(
                    "filter",
                    FieldKind::string(),
                    "A comma-separated list of filters, such as query:abc",
                ),
        )
        .output(FieldKind::collection(team())),
        expand_param(
            EndpointDescriptor::new("post_team", CATEGORY, HttpMethod::Post, "/api/v2/teams")
                .named("Create team")
                .described("Create a team"),
        )
        .required_body_param("key", FieldKind::string(), "The team key")
        .required_body_param("name", FieldKind::string(), "A human-friendly name for the team")
        .body_param("description", FieldKind::string(), "A description of the team")
        .body_param(
            "customRoleKeys",
            FieldKind::array(FieldKind::string()),
            "List of custom role keys the team will access",
        )
        .body_param(
            "memberIDs",
            FieldKind::array(FieldKind::string()),
            "A list of member IDs who belong to the team",
        )
        .body_param(
            "permissionGrants",
            FieldKind::array(FieldKind::any_object()),
            "A list of permission grants",
        )
        .output(team()),
        expand_param(
            EndpointDescriptor::new("get_team", CATEGORY, HttpMethod::Get, "/api/v2/teams/{teamKey}")
                .named("Get team")
                .described("Fetch a team by key")
                .path_param("teamKey", "The team key"),
        )
        .output(team()),
        EndpointDescriptor::new(
            "delete_team",
            CATEGORY,
            HttpMethod::Delete,
            "/api/v2/teams/{teamKey}",
        )
        .named("Delete team")
        .described("Delete a team by key")
        .path_param("teamKey", "The team key"),
        EndpointDescriptor::new(
            "get_team_maintainers",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/teams/{teamKey}/maintainers",
        )
        .named("Get team maintainers")
        .described("Fetch the maintainers that have been assigned to the team")
        .path_param("teamKey", "The team key")
        .paginated()
        .output(FieldKind::collection(FieldKind::any_object())),
        EndpointDescriptor::new(
            "get_team_roles",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/teams/{teamKey}/roles",
        )
        .named("Get team custom roles")
        .described("Fetch the custom roles that have been assigned to the team")
        .path_param("teamKey", "The team key")
        .paginated()
        .output(FieldKind::collection(FieldKind::any_object())),
    ]
}
