//! Endpoint descriptors
//!
//! An [`EndpointDescriptor`] is the static definition behind one block: HTTP
//! method, URL template with `{placeholder}` segments, parameters classified by
//! where they travel, and the response shape. Descriptors are built once when the
//! catalogue is assembled and never mutated afterwards.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use url::form_urlencoded;

use super::block::BlockError;
use super::parameter::{filter_defined_params, scalar_to_string, select_params, Inputs};
use super::schema::{ConfigField, FieldKind};
use crate::categories::BlockCategory;
use crate::client::{HttpMethod, RequestOptions};

/// Where a parameter is placed in the outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Substituted into the URL template
    Path,
    /// Appended to the query string
    Query,
    /// Field of the JSON request body
    Body,
}

/// One endpoint parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointParam {
    pub location: ParamLocation,
    pub field: ConfigField,
}

impl EndpointParam {
    pub fn name(&self) -> &str {
        &self.field.name
    }
}

/// Static method/URL/parameter/response definition of one endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    /// Block identifier, unique across the catalogue
    pub id: String,
    /// Human-readable name
    pub name: String,
    pub description: String,
    pub category: BlockCategory,
    pub method: HttpMethod,
    /// URL template relative to the base URL, e.g. `/api/v2/flags/{projectKey}`
    pub path_template: String,
    pub params: Vec<EndpointParam>,
    /// Shape of the response body
    pub output: FieldKind,
}

/// Path and options ready for the request helper
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub path: String,
    pub options: RequestOptions,
}

impl EndpointDescriptor {
    pub fn new(
        id: impl Into<String>,
        category: BlockCategory,
        method: HttpMethod,
        path_template: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            description: String::new(),
            category,
            method,
            path_template: path_template.into(),
            params: Vec::new(),
            output: FieldKind::any_object(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a path parameter. Path parameters are always required strings.
    pub fn path_param(mut self, name: &str, description: &str) -> Self {
        self.params.push(EndpointParam {
            location: ParamLocation::Path,
            field: ConfigField::new(name, FieldKind::string())
                .required()
                .with_description(description),
        });
        self
    }

    /// Add an optional query parameter
    pub fn query_param(mut self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.params.push(EndpointParam {
            location: ParamLocation::Query,
            field: ConfigField::new(name, kind).with_description(description),
        });
        self
    }

    /// Add an optional body field
    pub fn body_param(mut self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.params.push(EndpointParam {
            location: ParamLocation::Body,
            field: ConfigField::new(name, kind).with_description(description),
        });
        self
    }

    /// Add a body field the host must collect
    pub fn required_body_param(mut self, name: &str, kind: FieldKind, description: &str) -> Self {
        self.params.push(EndpointParam {
            location: ParamLocation::Body,
            field: ConfigField::new(name, kind)
                .required()
                .with_description(description),
        });
        self
    }

    /// Add the `limit`/`offset` query parameters of LaunchDarkly list endpoints
    pub fn paginated(self) -> Self {
        self.query_param("limit", FieldKind::integer(), "The number of items to return")
            .query_param(
                "offset",
                FieldKind::integer(),
                "Where to start in the list, for use with pagination",
            )
    }

    /// Add the `patch`/`comment` body of JSON Patch update endpoints
    pub fn json_patch(self) -> Self {
        self.required_body_param(
            "patch",
            FieldKind::array(FieldKind::any_object()),
            "JSON Patch operations (op, path, value) to apply",
        )
        .body_param(
            "comment",
            FieldKind::string(),
            "Optional comment describing the update",
        )
    }

    pub fn output(mut self, output: FieldKind) -> Self {
        self.output = output;
        self
    }

    /// Parameters at the given location, in declaration order
    pub fn params_at(&self, location: ParamLocation) -> impl Iterator<Item = &EndpointParam> {
        self.params.iter().filter(move |p| p.location == location)
    }

    /// Input fields a host collects for this endpoint
    pub fn input_schema(&self) -> Vec<ConfigField> {
        self.params.iter().map(|p| p.field.clone()).collect()
    }

    /// Placeholder names in the URL template, in order of appearance
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut rest = self.path_template.as_str();
        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    names.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }
        names
    }

    /// Check the descriptor is internally consistent
    pub fn validate(&self) -> Result<(), BlockError> {
        if self.id.is_empty() {
            return Err(BlockError::InvalidDefinition("Block id cannot be empty".into()));
        }
        if !self.path_template.starts_with('/') {
            return Err(BlockError::InvalidDefinition(format!(
                "{}: path template must start with '/'",
                self.id
            )));
        }

        let mut seen = HashSet::new();
        for param in &self.params {
            if !seen.insert(param.name()) {
                return Err(BlockError::InvalidDefinition(format!(
                    "{}: duplicate parameter '{}'",
                    self.id,
                    param.name()
                )));
            }
        }

        let placeholders: HashSet<&str> = self.placeholders().into_iter().collect();
        let path_params: HashSet<&str> = self
            .params_at(ParamLocation::Path)
            .map(EndpointParam::name)
            .collect();
        if let Some(missing) = placeholders.difference(&path_params).next() {
            return Err(BlockError::InvalidDefinition(format!(
                "{}: placeholder '{{{}}}' has no path parameter",
                self.id, missing
            )));
        }
        if let Some(unused) = path_params.difference(&placeholders).next() {
            return Err(BlockError::InvalidDefinition(format!(
                "{}: path parameter '{}' does not appear in the template",
                self.id, unused
            )));
        }

        if !self.method.sends_body() && self.params_at(ParamLocation::Body).next().is_some() {
            return Err(BlockError::InvalidDefinition(format!(
                "{}: {} endpoints cannot declare body parameters",
                self.id, self.method
            )));
        }

        Ok(())
    }

    /// Substitute path parameters from the inputs into the URL template.
    ///
    /// Each value is percent-encoded as a single path segment, so the result never
    /// contains placeholder syntax or stray separators.
    pub fn interpolate_path(&self, inputs: &Inputs) -> Result<String, BlockError> {
        let mut path = self.path_template.clone();
        for param in self.params_at(ParamLocation::Path) {
            let name = param.name();
            let value = inputs
                .get(name)
                .filter(|v| !v.is_null())
                .ok_or_else(|| BlockError::MissingParameter(name.to_string()))?;
            let text = scalar_to_string(value).ok_or_else(|| {
                BlockError::InvalidParameter(format!(
                    "Path parameter '{}' must be a string, number or boolean",
                    name
                ))
            })?;
            if text.is_empty() {
                return Err(BlockError::MissingParameter(name.to_string()));
            }
            // URL parsing collapses dot-segments, even percent-encoded ones
            if text == "." || text == ".." {
                return Err(BlockError::InvalidParameter(format!(
                    "Path parameter '{}' cannot be '{}'",
                    name, text
                )));
            }
            path = path.replace(&format!("{{{}}}", name), &encode_path_segment(&text));
        }
        Ok(path)
    }

    /// Split host inputs into the path, query string and body for one call.
    ///
    /// Absent query and body inputs are left out. The body is `None` when the
    /// method sends no body or when no body field was supplied.
    pub fn prepare(&self, inputs: &Inputs) -> Result<PreparedRequest, BlockError> {
        let path = self.interpolate_path(inputs)?;
        let mut options = RequestOptions::new(self.method);

        let query = filter_defined_params(select_params(
            inputs,
            self.params_at(ParamLocation::Query).map(EndpointParam::name),
        ));
        options.query = query.into_iter().collect();

        if self.method.sends_body() {
            let body = filter_defined_params(select_params(
                inputs,
                self.params_at(ParamLocation::Body).map(EndpointParam::name),
            ));
            if !body.is_empty() {
                options.body = Some(Value::Object(body));
            }
        }

        Ok(PreparedRequest { path, options })
    }
}

/// Percent-encode a value for use as one URL path segment
pub fn encode_path_segment(segment: &str) -> String {
    // form encoding writes spaces as '+' and always escapes a literal '+'
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
