//! Webhook endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Webhooks;

fn webhook() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("name", FieldKind::string()),
        ("url", FieldKind::string()),
        ("secret", FieldKind::string()),
        ("statements", FieldKind::array(FieldKind::any_object())),
        ("on", FieldKind::boolean()),
        ("tags", FieldKind::array(FieldKind::string())),
        ("_access", FieldKind::any_object()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "url", "on", "tags"])
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new("get_all_webhooks", CATEGORY, HttpMethod::Get, "/api/v2/webhooks")
            .named("List webhooks")
            .described("Fetch a list of all webhooks")
            .output(FieldKind::collection(webhook())),
        EndpointDescriptor::new("post_webhook", CATEGORY, HttpMethod::Post, "/api/v2/webhooks")
            .named("Creates a webhook")
            .described("Create a new webhook")
            .body_param("name", FieldKind::string(), "A human-readable name for your webhook")
            .required_body_param(
                "url",
                FieldKind::string(),
                "The URL of the remote webhook",
            )
            .body_param(
                "secret",
                FieldKind::string(),
                "If sign is true, and the secret attribute is omitted, LaunchDarkly automatically generates a secret for you",
            )
            .body_param(
                "statements",
                FieldKind::array(FieldKind::any_object()),
                "Policy statements restricting which events trigger the webhook",
            )
            .required_body_param(
                "sign",
                FieldKind::boolean(),
                "If sign is false, the webhook does not include a signature header",
            )
            .required_body_param(
                "on",
                FieldKind::boolean(),
                "Whether or not this webhook is enabled",
            )
            .body_param("tags", FieldKind::array(FieldKind::string()), "List of tags for this webhook")
            .output(webhook()),
        EndpointDescriptor::new("get_webhook", CATEGORY, HttpMethod::Get, "/api/v2/webhooks/{id}")
            .named("Get webhook")
            .described("Get a single webhook by ID")
            .path_param("id", "The ID of the webhook")
            .output(webhook()),
        EndpointDescriptor::new(
            "patch_webhook",
            CATEGORY,
            HttpMethod::Patch,
            "/api/v2/webhooks/{id}",
        )
        .named("Update webhook")
        .described("Update a webhook's settings using a JSON patch representation")
        .path_param("id", "The ID of the webhook to update")
        .json_patch()
        .output(webhook()),
        EndpointDescriptor::new(
            "delete_webhook",
            CATEGORY,
            HttpMethod::Delete,
            "/api/v2/webhooks/{id}",
        )
        .named("Delete webhook")
        .described("Delete a webhook by ID")
        .path_param("id", "The ID of the webhook to delete"),
    ]
}
