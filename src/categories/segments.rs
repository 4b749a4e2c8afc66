//! Segment endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Segments;

const SEGMENTS_PATH: &str = "/api/v2/segments/{projectKey}/{environmentKey}";
const SEGMENT_PATH: &str = "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}";

fn segment() -> FieldKind {
    FieldKind::object([
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("description", FieldKind::string()),
        ("tags", FieldKind::array(FieldKind::string())),
        ("creationDate", FieldKind::integer()),
        ("lastModifiedDate", FieldKind::integer()),
        ("included", FieldKind::array(FieldKind::string())),
        ("excluded", FieldKind::array(FieldKind::string())),
        ("includedContexts", FieldKind::array(FieldKind::any_object())),
        ("excludedContexts", FieldKind::array(FieldKind::any_object())),
        ("rules", FieldKind::array(FieldKind::any_object())),
        ("version", FieldKind::integer()),
        ("deleted", FieldKind::boolean()),
        ("unbounded", FieldKind::boolean()),
        ("unboundedContextKind", FieldKind::string()),
        ("generation", FieldKind::integer()),
        ("_access", FieldKind::any_object()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["key", "name", "tags", "creationDate", "lastModifiedDate", "deleted", "generation"])
}

fn target_changes() -> FieldKind {
    FieldKind::object([
        ("add", FieldKind::array(FieldKind::string())),
        ("remove", FieldKind::array(FieldKind::string())),
    ])
}

fn environment_scope(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor
        .path_param("projectKey", "The project key")
        .path_param("environmentKey", "The environment key")
}

fn segment_scope(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    environment_scope(descriptor).path_param("segmentKey", "The segment key")
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        environment_scope(EndpointDescriptor::new(
            "get_segments",
            CATEGORY,
            HttpMethod::Get,
            SEGMENTS_PATH,
        ))
        .named("List segments")
        .described("Get a list of all segments in the given project")
        .paginated()
        .query_param("sort", FieldKind::string(), "Accepts sorting order and fields")
        .query_param(
            "filter",
            FieldKind::string(),
            "Accepts filter by kind, query, tags, unbounded, or external",
        )
        .output(FieldKind::collection(segment())),
        environment_scope(EndpointDescriptor::new(
            "post_segment",
            CATEGORY,
            HttpMethod::Post,
            SEGMENTS_PATH,
        ))
        .named("Create segment")
        .described("Create a new segment")
        .required_body_param("name", FieldKind::string(), "A human-friendly name for the segment")
        .required_body_param(
            "key",
            FieldKind::string(),
            "A unique key used to reference the segment",
        )
        .body_param("description", FieldKind::string(), "A description of the segment's purpose")
        .body_param("tags", FieldKind::array(FieldKind::string()), "Tags for the segment")
        .body_param(
            "unbounded",
            FieldKind::boolean(),
            "Whether to create a standard segment (false) or a big segment (true)",
        )
        .body_param(
            "unboundedContextKind",
            FieldKind::string(),
            "For big segments, the targeted context kind",
        )
        .output(segment()),
        segment_scope(EndpointDescriptor::new(
            "get_segment",
            CATEGORY,
            HttpMethod::Get,
            SEGMENT_PATH,
        ))
        .named("Get segment")
        .described("Get a single segment by key")
        .output(segment()),
        segment_scope(EndpointDescriptor::new(
            "patch_segment",
            CATEGORY,
            HttpMethod::Patch,
            SEGMENT_PATH,
        ))
        .named("Patch segment")
        .described("Update a segment using a JSON patch representation")
        .json_patch()
        .output(segment()),
        segment_scope(EndpointDescriptor::new(
            "delete_segment",
            CATEGORY,
            HttpMethod::Delete,
            SEGMENT_PATH,
        ))
        .named("Delete segment")
        .described("Delete a segment"),
        segment_scope(EndpointDescriptor::new(
            "get_segment_membership_for_context",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}/contexts/{contextKey}",
        ))
        .named("Get big segment membership for context")
        .described("Get the membership status (included/excluded) for a given context in this big segment")
        .path_param("contextKey", "The context key")
        .output(FieldKind::object([
            ("contextKey", FieldKind::string()),
            ("included", FieldKind::boolean()),
        ])),
        segment_scope(EndpointDescriptor::new(
            "update_big_segment_context_targets",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/segments/{projectKey}/{environmentKey}/{segmentKey}/contexts",
        ))
        .named("Update context targets on a big segment")
        .described("Update context targets included or excluded in a big segment")
        .body_param("included", target_changes(), "Context keys to add to or remove from the included list")
        .body_param("excluded", target_changes(), "Context keys to add to or remove from the excluded list"),
    ]
}
