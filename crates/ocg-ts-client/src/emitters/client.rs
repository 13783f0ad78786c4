use minijinja::{Environment, context};

use crate::model::{ClientModel, OperationDef, TypeDecl, TypeDeclKind};

/// Emit the generated client module: shim import, `initApiClient`
/// re-export, base-url constants, then every operation's declarations and
/// function in stable order.
pub fn emit_client(model: &ClientModel) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.add_template("client.ts.j2", include_str!("../../templates/client.ts.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("client.ts.j2").unwrap();

    let base_urls: Vec<minijinja::Value> = model
        .base_urls
        .iter()
        .map(|base| {
            context! {
                name => base.name.clone(),
                url => base.url.clone(),
            }
        })
        .collect();

    let operations: Vec<minijinja::Value> = model.operations.iter().map(operation_ctx).collect();

    tmpl.render(context! {
        base_urls => base_urls,
        operations => operations,
    })
    .expect("render should succeed")
}

fn operation_ctx(op: &OperationDef) -> minijinja::Value {
    // Emission order: body, path, response.
    let declarations: Vec<minijinja::Value> = [&op.body_decl, &op.path_decl, &op.response_decl]
        .into_iter()
        .flatten()
        .map(decl_ctx)
        .collect();

    let mut params = Vec::new();
    if let Some(ref path_decl) = op.path_decl {
        params.push(format!(
            "{{ {} }}: {}",
            op.path_param_names.join(", "),
            path_decl.name
        ));
    }
    if let Some(ref body_decl) = op.body_decl {
        params.push(format!("body: {}", body_decl.name));
    }

    let return_type = match op.response_decl {
        Some(ref decl) => format!("Promise<{}>", decl.name),
        None => "Promise<void>".to_string(),
    };

    let mut args = Vec::new();
    if op.body_decl.is_some() {
        args.push("body".to_string());
    }
    args.push(format!("method: \"{}\"", op.verb));

    context! {
        method_name => op.method_name.clone(),
        declarations => declarations,
        params_signature => params.join(", "),
        return_type => return_type,
        request_path => format!("`{}`", op.request_path),
        request_args => args.join(", "),
    }
}

fn decl_ctx(decl: &TypeDecl) -> minijinja::Value {
    match decl.kind {
        TypeDeclKind::Interface(ref fields) => {
            let fields: Vec<minijinja::Value> = fields
                .iter()
                .map(|field| {
                    context! {
                        name => field.name.clone(),
                        type_name => field.type_name.clone(),
                        is_optional => field.is_optional,
                    }
                })
                .collect();
            context! {
                name => decl.name.clone(),
                is_interface => true,
                fields => fields,
            }
        }
        TypeDeclKind::Alias(ref target) => {
            context! {
                name => decl.name.clone(),
                is_interface => false,
                target => target.clone(),
            }
        }
    }
}
