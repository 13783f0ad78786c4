//! Operation extraction: walking the document's path/verb graph into
//! per-operation models ready for client generation.

pub mod names;
pub mod options;
pub mod registry;

use serde_json::Value;

use crate::error::ExtractError;
use crate::infer::{Shape, generalize};
use crate::parse::media_type::MediaType;
use crate::parse::operation::{Operation, PathItem};
use crate::parse::parameter::{ParameterLocation, ParameterOrRef};
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};
use crate::parse::spec::OpenApiDocument;

pub use names::{resolve_method_name, route_to_name};
pub use options::{BodyContext, NameContext, TransformerOptions};
pub use registry::NameRegistry;

/// HTTP verb, in the fixed priority order used for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
    Trace,
}

impl HttpVerb {
    /// Extraction order within one path: document path order first, then
    /// this verb priority.
    pub const ALL: [HttpVerb; 8] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Patch,
        HttpVerb::Delete,
        HttpVerb::Head,
        HttpVerb::Options,
        HttpVerb::Trace,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
            HttpVerb::Delete => "delete",
            HttpVerb::Head => "head",
            HttpVerb::Options => "options",
            HttpVerb::Trace => "trace",
        }
    }
}

/// A path parameter as declared on the operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PathParameter {
    pub name: String,
    pub location: ParameterLocation,
}

/// The derived model for one (path, verb) pair. Created once during
/// extraction and never mutated afterward.
#[derive(Debug, Clone)]
pub struct OperationModel {
    pub path_str: String,
    pub verb: HttpVerb,
    /// Resolved unique identifier, already claimed in the run's registry.
    pub method_name: String,
    /// Declaration order is preserved.
    pub path_parameters: Vec<PathParameter>,
    pub body_shape: Option<Shape>,
    pub response_shape: Option<Shape>,
}

/// Extract one operation model per (path, verb) pair, with the default
/// strategies.
pub fn extract(
    document: &OpenApiDocument,
    registry: &mut NameRegistry,
) -> Result<Vec<OperationModel>, ExtractError> {
    extract_with_options(document, &TransformerOptions::default(), registry)
}

/// Extract with override hooks.
///
/// Order is deterministic regardless of anything else: document path
/// iteration order, then the fixed verb priority. Downstream consumers
/// diff generated files, so this ordering is part of the contract.
pub fn extract_with_options(
    document: &OpenApiDocument,
    options: &TransformerOptions,
    registry: &mut NameRegistry,
) -> Result<Vec<OperationModel>, ExtractError> {
    let mut models = Vec::new();

    for (path, item) in &document.paths {
        for verb in HttpVerb::ALL {
            let Some(operation) = operation_for(item, verb) else {
                continue;
            };
            if operation.is_empty() {
                log::debug!("skipping empty operation object at {} {path}", verb.as_str());
                continue;
            }
            models.push(build_model(path, verb, operation, options, registry)?);
        }
    }

    Ok(models)
}

fn operation_for(item: &PathItem, verb: HttpVerb) -> Option<&Operation> {
    match verb {
        HttpVerb::Get => item.get.as_ref(),
        HttpVerb::Post => item.post.as_ref(),
        HttpVerb::Put => item.put.as_ref(),
        HttpVerb::Patch => item.patch.as_ref(),
        HttpVerb::Delete => item.delete.as_ref(),
        HttpVerb::Head => item.head.as_ref(),
        HttpVerb::Options => item.options.as_ref(),
        HttpVerb::Trace => item.trace.as_ref(),
    }
}

fn build_model(
    path: &str,
    verb: HttpVerb,
    operation: &Operation,
    options: &TransformerOptions,
    registry: &mut NameRegistry,
) -> Result<OperationModel, ExtractError> {
    let candidate = match options.method_name_extractor {
        Some(ref extractor) => extractor(&NameContext {
            path_str: path,
            operation,
            in_use: registry,
        })
        .unwrap_or_else(|| resolve_method_name(operation, verb, path, registry)),
        None => resolve_method_name(operation, verb, path, registry),
    };
    let method_name = registry.claim(&candidate)?;

    let path_parameters = operation
        .parameters
        .iter()
        .filter_map(|param| match param {
            ParameterOrRef::Parameter(p) if p.location == ParameterLocation::Path => {
                Some(PathParameter {
                    name: p.name.clone(),
                    location: p.location,
                })
            }
            _ => None,
        })
        .collect();

    let body_shape = match options.request_body_transform {
        Some(ref transform) => transform(&BodyContext {
            path_str: path,
            operation,
        }),
        None => resolve_body_shape(operation, path, registry)?,
    };

    let response_shape = match options.response_body_transform {
        Some(ref transform) => transform(&BodyContext {
            path_str: path,
            operation,
        }),
        None => resolve_response_shape(operation, path, registry)?,
    };

    Ok(OperationModel {
        path_str: path.to_string(),
        verb,
        method_name,
        path_parameters,
        body_shape,
        response_shape,
    })
}

/// Default request body strategy. An absent `requestBody` yields no shape
/// at all; a present one that defies derivation degrades to the
/// placeholder.
fn resolve_body_shape(
    operation: &Operation,
    path: &str,
    registry: &mut NameRegistry,
) -> Result<Option<Shape>, ExtractError> {
    let Some(ref body) = operation.request_body else {
        return Ok(None);
    };

    let derived = match body {
        RequestBodyOrRef::Ref { .. } => Ok(None),
        RequestBodyOrRef::RequestBody(body) => match body.content.values().next() {
            Some(media) => derive_media_shape(media),
            None => Ok(None),
        },
    };

    degrade_to_placeholder(derived, "request body", operation, path, registry).map(Some)
}

/// Default response strategy: the first response status (document order)
/// carrying `application/json` content wins; other media types are never
/// considered.
fn resolve_response_shape(
    operation: &Operation,
    path: &str,
    registry: &mut NameRegistry,
) -> Result<Option<Shape>, ExtractError> {
    let media = operation.responses.values().find_map(|response| {
        match response {
            ResponseOrRef::Response(r) => r.content.get("application/json"),
            ResponseOrRef::Ref { .. } => None,
        }
    });

    let Some(media) = media else {
        return Ok(None);
    };

    degrade_to_placeholder(derive_media_shape(media), "response", operation, path, registry)
        .map(Some)
}

/// Derive a shape from one media type entry: declared schema first, then
/// an example payload (inline, or under the schema; a string example is
/// parsed as JSON), else nothing.
fn derive_media_shape(media: &MediaType) -> Result<Option<Shape>, serde_json::Error> {
    if let Some(SchemaOrRef::Schema(ref schema)) = media.schema {
        if schema.has_declared_structure() {
            return Ok(Some(schema_to_shape(schema)));
        }
    }

    let example = media.example.as_ref().or_else(|| match media.schema {
        Some(SchemaOrRef::Schema(ref schema)) => schema.example.as_ref(),
        _ => None,
    });
    let Some(example) = example else {
        return Ok(None);
    };

    let value: Value = match example {
        Value::String(encoded) => serde_json::from_str(encoded)?,
        other => other.clone(),
    };
    Ok(Some(generalize(&[value])))
}

/// Shape derivation failures are isolated per operation: log and degrade
/// to the placeholder rather than aborting the run.
fn degrade_to_placeholder(
    derived: Result<Option<Shape>, serde_json::Error>,
    what: &str,
    operation: &Operation,
    path: &str,
    registry: &mut NameRegistry,
) -> Result<Shape, ExtractError> {
    match derived {
        Ok(Some(shape)) => Ok(shape),
        Ok(None) => Ok(Shape::placeholder(&registry.claim_placeholder_suffix()?)),
        Err(err) => {
            log::error!(
                "failed to derive {what} shape for `{path}`: {err}; operation: {}",
                serde_json::to_string(operation).unwrap_or_default()
            );
            Ok(Shape::placeholder(&registry.claim_placeholder_suffix()?))
        }
    }
}

/// Convert a declared schema directly into a shape; no generalization is
/// involved. Unresolvable `$ref`s degrade to accepts-anything.
pub fn schema_to_shape(schema: &Schema) -> Shape {
    use crate::infer::{RecordField, ScalarKind};

    match schema.schema_type {
        Some(SchemaType::String) => Shape::Scalar(ScalarKind::String),
        Some(SchemaType::Number) | Some(SchemaType::Integer) => Shape::Scalar(ScalarKind::Number),
        Some(SchemaType::Boolean) => Shape::Scalar(ScalarKind::Boolean),
        Some(SchemaType::Null) => Shape::Scalar(ScalarKind::Null),
        Some(SchemaType::Array) => {
            let element = match schema.items {
                Some(ref items) => schema_or_ref_to_shape(items),
                None => Shape::Scalar(ScalarKind::Any),
            };
            Shape::List(Box::new(element))
        }
        Some(SchemaType::Object) | None => Shape::Record(
            schema
                .properties
                .iter()
                .map(|(name, prop)| RecordField {
                    name: name.clone(),
                    shape: schema_or_ref_to_shape(prop),
                    optional: !schema.required.iter().any(|r| r == name),
                })
                .collect(),
        ),
    }
}

fn schema_or_ref_to_shape(schema: &SchemaOrRef) -> Shape {
    match schema {
        SchemaOrRef::Schema(schema) => schema_to_shape(schema),
        SchemaOrRef::Ref { .. } => Shape::Scalar(crate::infer::ScalarKind::Any),
    }
}
