//! Audit log endpoints

use super::BlockCategory;
use crate::client::HttpMethod;
use crate::core::endpoint::EndpointDescriptor;
use crate::core::schema::FieldKind;

const CATEGORY: BlockCategory = BlockCategory::AuditLog;

fn entry() -> FieldKind {
    FieldKind::object([
        ("_id", FieldKind::string()),
        ("_accountId", FieldKind::string()),
        ("date", FieldKind::integer()),
        ("kind", FieldKind::string()),
        ("name", FieldKind::string()),
        ("description", FieldKind::string()),
        ("shortDescription", FieldKind::string()),
        ("comment", FieldKind::string()),
        ("subject", FieldKind::any_object()),
        ("member", FieldKind::any_object()),
        ("token", FieldKind::any_object()),
        ("app", FieldKind::any_object()),
        ("titleVerb", FieldKind::string()),
        ("title", FieldKind::string()),
        ("target", FieldKind::any_object()),
        ("parent", FieldKind::any_object()),
        ("_links", FieldKind::any_object()),
    ])
    .with_required(["_id", "_accountId", "date", "name", "description", "shortDescription"])
}

pub fn descriptors() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::new(
            "get_audit_log_entries",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/auditlog",
        )
        .named("List audit log entries")
        .described("Get a list of all audit log entries, newest first")
        .query_param(
            "before",
            FieldKind::integer(),
            "Only return entries that occurred before this timestamp (milliseconds since epoch)",
        )
        .query_param(
            "after",
            FieldKind::integer(),
            "Only return entries that occurred after this timestamp (milliseconds since epoch)",
        )
        .query_param("q", FieldKind::string(), "Text to search for within entries")
        .query_param(
            "limit",
            FieldKind::integer(),
            "A limit on the number of audit log entries to return (1 to 20)",
        )
        .query_param(
            "spec",
            FieldKind::string(),
            "A resource specifier that restricts the returned entries",
        )
        .output(FieldKind::collection(entry())),
        EndpointDescriptor::new(
            "get_audit_log_entry",
            CATEGORY,
            HttpMethod::Get,
            "/api/v2/auditlog/{id}",
        )
        .named("Get audit log entry")
        .described("Fetch a detailed audit log entry representation, including the change delta")
        .path_param("id", "The ID of the audit log entry")
        .output(entry()),
    ]
}
