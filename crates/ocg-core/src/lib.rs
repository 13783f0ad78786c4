pub mod config;
pub mod error;
pub mod extract;
pub mod infer;
pub mod parse;

/// A generated file with path and content.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from a document and its
/// extracted operation models.
///
/// The registry is the same one used during extraction: emission claims
/// names (base-url constants, collision suffixes) from the same per-run
/// pool.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;
    fn generate(
        &self,
        document: &parse::spec::OpenApiDocument,
        operations: &[extract::OperationModel],
        registry: &mut extract::NameRegistry,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
