use thiserror::Error;

use ocg_core::config::GeneralOptions;
use ocg_core::error::ExtractError;
use ocg_core::extract::{NameRegistry, OperationModel};
use ocg_core::parse::spec::OpenApiDocument;
use ocg_core::{CodeGenerator, GeneratedFile};

use crate::emitters;
use crate::emitters::shim::SHIM_FILE_NAME;
use crate::model;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),
}

/// TypeScript client generator.
pub struct TsClientGenerator;

impl CodeGenerator for TsClientGenerator {
    type Config = GeneralOptions;
    type Error = GeneratorError;

    fn generate(
        &self,
        document: &OpenApiDocument,
        operations: &[OperationModel],
        registry: &mut NameRegistry,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let model = model::build(document, operations, registry)?;
        log::info!(
            "emitting {} operations and {} base urls for `{}`",
            model.operations.len(),
            model.base_urls.len(),
            config.api_name
        );

        // Output paths are plain concatenation: `<client_file_path><api_name>.ts`.
        Ok(vec![
            GeneratedFile {
                path: format!("{}{}.ts", config.client_file_path, config.api_name),
                content: emitters::client::emit_client(&model),
            },
            GeneratedFile {
                path: format!("{}{}", config.client_file_path, SHIM_FILE_NAME),
                content: emitters::shim::emit_shim(),
            },
        ])
    }
}
