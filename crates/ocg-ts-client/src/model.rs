//! The client model: everything the emitter needs, in emission order.

use heck::{ToLowerCamelCase, ToPascalCase};
use ocg_core::error::ExtractError;
use ocg_core::extract::{NameRegistry, OperationModel};
use ocg_core::infer::Shape;
use ocg_core::parse::spec::OpenApiDocument;

use crate::type_mapper::{FieldDef, shape_fields, shape_to_ts};

/// A named, variable-substituted server URL.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseUrlEntry {
    pub name: String,
    pub url: String,
}

/// A type declaration emitted ahead of an operation's function.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeDeclKind,
}

#[derive(Debug, Clone)]
pub enum TypeDeclKind {
    Interface(Vec<FieldDef>),
    /// Non-record top-level shapes (lists, scalars) become type aliases.
    Alias(String),
}

/// One operation, ready to emit.
#[derive(Debug, Clone)]
pub struct OperationDef {
    pub method_name: String,
    pub verb: &'static str,
    /// The raw path with every `{param}` token rewritten to `${param}`,
    /// to be rendered inside a template literal.
    pub request_path: String,
    pub path_param_names: Vec<String>,
    /// Emission order: body, path, response (whichever exist).
    pub body_decl: Option<TypeDecl>,
    pub path_decl: Option<TypeDecl>,
    pub response_decl: Option<TypeDecl>,
}

/// The composed, ordered model for one generated client module.
#[derive(Debug, Clone)]
pub struct ClientModel {
    pub base_urls: Vec<BaseUrlEntry>,
    pub operations: Vec<OperationDef>,
}

/// Compose the client model from the document and its extracted
/// operations. Operation order is preserved as-is.
pub fn build(
    document: &OpenApiDocument,
    operations: &[OperationModel],
    registry: &mut NameRegistry,
) -> Result<ClientModel, ExtractError> {
    let base_urls = build_base_urls(document, registry)?;
    let operations = operations.iter().map(build_operation).collect();
    Ok(ClientModel {
        base_urls,
        operations,
    })
}

/// One entry per `servers` element: variables substituted with their
/// declared defaults, export names de-duplicated through the run's
/// registry (entries sharing a description gain a random suffix).
fn build_base_urls(
    document: &OpenApiDocument,
    registry: &mut NameRegistry,
) -> Result<Vec<BaseUrlEntry>, ExtractError> {
    let mut entries = Vec::new();
    for server in &document.servers {
        let base = server
            .description
            .as_deref()
            .map(|d| d.to_lower_camel_case())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "baseUrl".to_string());
        entries.push(BaseUrlEntry {
            name: registry.claim(&base)?,
            url: server.substituted_url(),
        });
    }
    Ok(entries)
}

fn build_operation(model: &OperationModel) -> OperationDef {
    let pascal = model.method_name.to_pascal_case();

    let path_param_names: Vec<String> = model
        .path_parameters
        .iter()
        .map(|p| p.name.clone())
        .collect();

    let path_decl = if path_param_names.is_empty() {
        None
    } else {
        Some(TypeDecl {
            name: format!("{pascal}Path"),
            kind: TypeDeclKind::Interface(
                path_param_names
                    .iter()
                    .map(|name| FieldDef {
                        name: name.clone(),
                        type_name: "string".to_string(),
                        is_optional: false,
                    })
                    .collect(),
            ),
        })
    };

    let body_decl = model
        .body_shape
        .as_ref()
        .and_then(|shape| decl_for_shape(shape, format!("{pascal}Body")));
    let response_decl = model
        .response_shape
        .as_ref()
        .and_then(|shape| decl_for_shape(shape, format!("{pascal}Response")));

    OperationDef {
        method_name: model.method_name.to_lower_camel_case(),
        verb: model.verb.as_str(),
        request_path: model.path_str.replace('{', "${"),
        path_param_names,
        body_decl,
        path_decl,
        response_decl,
    }
}

/// An empty shape suppresses the declaration entirely, and with it the
/// matching function parameter or return type. Callers must not be handed
/// an empty interface to fill in.
fn decl_for_shape(shape: &Shape, name: String) -> Option<TypeDecl> {
    match shape {
        Shape::Record(fields) => {
            if fields.is_empty() {
                return None;
            }
            Some(TypeDecl {
                name,
                kind: TypeDeclKind::Interface(shape_fields(shape)),
            })
        }
        Shape::List(_) | Shape::Scalar(_) => Some(TypeDecl {
            name,
            kind: TypeDeclKind::Alias(shape_to_ts(shape)),
        }),
    }
}
