//! Metric endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::Metrics;

const METRIC_PATH: &str = "/api/v2/metrics/{projectKey}/{metricKey}";

fn metric() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("key", FieldKind::string()),
        ("name", FieldKind::string()),
        ("kind", FieldKind::string()),
        ("description", FieldKind::string()),
        ("_versionId", FieldKind::string()),
        ("_creationDate", FieldKind::integer()),
        ("isNumeric", FieldKind::boolean()),
        ("isActive", FieldKind::boolean()),
        ("eventKey", FieldKind::string()),
        ("selector", FieldKind::string()),
        ("urls", FieldKind::array(FieldKind::any_object())),
        ("unit", FieldKind::string()),
        ("successCriteria", FieldKind::string()),
        ("randomizationUnits", FieldKind::array(FieldKind::string())),
        ("tags", FieldKind::array(FieldKind::string())),
        ("experimentCount", FieldKind::integer()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "key", "name", "kind", "_versionId", "_creationDate", "tags"])
}

fn metric_request(descriptor: EndpointDescriptor) -> EndpointDescriptor {
    descriptor
        .path_param("projectKey", "The project key")
        .path_param("metricKey", "The metric key")
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_metrics",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/metrics/{projectKey}",
        )
        .named("List metrics")
        .described("Get a list of all metrics for the specified project")
        .path_param("projectKey", "The project key")
        .query_param(
            "expand",
            FieldKind::string(),
            "A comma-separated list of properties that can reveal additional information",
        )
        .paginated()
        .query_param("sort", FieldKind::string(), "A field to sort the items by, such as name")
        .query_param(
            "filter",
            FieldKind::string(),
            "A comma-separated list of filters, such as eventKind:custom",
        )
        .output(FieldKind::collection(metric())),
        EndpointDescriptor::new(
            "post_metric",
            CATEGORY,
            HttpMethod::Post,
            "/api/v2/metrics/{projectKey}",
        )
        .named("Create metric")
        .described("Create a new metric in the specified project")
        .path_param("projectKey", "The project key")
        .required_body_param("key", FieldKind::string(), "A unique key to reference the metric")
        .body_param("name", FieldKind::string(), "A human-friendly name for the metric")
        .body_param("description", FieldKind::string(), "Description of the metric")
        .required_body_param(
            "kind",
            FieldKind::string(),
            "The kind of event your metric will track: pageview, click, or custom",
        )
        .body_param(
            "selector",
            FieldKind::string(),
            "One or more CSS selectors; required for click metrics",
        )
        .body_param(
            "urls",
            FieldKind::array(FieldKind::any_object()),
            "One or more target URLs; required for click and pageview metrics",
        )
        .body_param("isActive", FieldKind::boolean(), "Whether the metric is active")
        .body_param(
            "isNumeric",
            FieldKind::boolean(),
            "Whether to track numeric changes in value against a baseline",
        )
        .body_param("unit", FieldKind::string(), "The unit of measure, for numeric custom metrics")
        .body_param(
            "eventKey",
            FieldKind::string(),
            "The event key to use in your code; required for custom metrics",
        )
        .body_param(
            "successCriteria",
            FieldKind::string(),
            "Success criteria: HigherThanBaseline or LowerThanBaseline",
        )
        .body_param("tags", FieldKind::array(FieldKind::string()), "Tags for the metric")
        .body_param(
            "randomizationUnits",
            FieldKind::array(FieldKind::string()),
            "Context kinds that this metric may measure",
        )
        .output(metric()),
        metric_request(EndpointDescriptor::new(
            "get_metric",
            CATEGORY,
            HttpMethod::Get,
            METRIC_PATH,
        ))
        .named("Get metric")
        .described("Get information for a single metric from the specific project")
        .query_param(
            "expand",
            FieldKind::string(),
            "A comma-separated list of properties that can reveal additional information",
        )
        .query_param("versionId", FieldKind::string(), "The specific version ID of the metric")
        .output(metric()),
        metric_request(EndpointDescriptor::new(
            "patch_metric",
            CATEGORY,
            HttpMethod::Patch,
            METRIC_PATH,
        ))
        .named("Update metric")
        .described("Patch a metric by key using a JSON patch representation")
        .json_patch()
        .output(metric()),
        metric_request(EndpointDescriptor::new(
            "delete_metric",
            CATEGORY,
            HttpMethod::Delete,
            METRIC_PATH,
        ))
        .named("Delete metric")
        .described("Delete a metric by key"),
    ]
}
