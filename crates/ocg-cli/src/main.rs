use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use ocg_core::config::{self, CONFIG_FILE_NAME, GeneralOptions, OcgConfig};
use ocg_core::extract::{self, NameRegistry, OperationModel};
use ocg_core::parse;
use ocg_core::parse::spec::OpenApiDocument;
use ocg_core::{CodeGenerator, GeneratedFile};
use ocg_ts_client::TsClientGenerator;

#[derive(Parser)]
#[command(name = "ocg", about = "OpenAPI 3.x TypeScript client generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a typed client from an OpenAPI document
    Generate {
        /// Document source: file path (JSON or YAML) or http(s) URL
        #[arg(short, long)]
        input: Option<String>,

        /// Generated module name (overrides config)
        #[arg(long)]
        api_name: Option<String>,

        /// Output prefix, e.g. `src/generated/` (overrides config)
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Validate that a document parses and extracts cleanly
    Validate {
        /// Document source: file path or http(s) URL
        #[arg(short, long)]
        input: String,
    },

    /// Inspect the extracted operation models of a document
    Inspect {
        /// Document source: file path or http(s) URL
        #[arg(short, long)]
        input: String,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new ocg configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            api_name,
            out,
        } => cmd_generate(input, api_name, out),

        Commands::Validate { input } => cmd_validate(&input),

        Commands::Inspect { input, format } => cmd_inspect(&input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "ocg", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<OcgConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

/// Load the raw document: HTTP GET for URLs, filesystem read otherwise.
/// This is the only suspending step of a run and happens exactly once,
/// before any extraction work.
fn load_document(source: &str) -> Result<OpenApiDocument> {
    log::info!("loading OpenAPI document from {source}");
    if source.starts_with("http://") || source.starts_with("https://") {
        let body = reqwest::blocking::get(source)
            .and_then(|response| response.error_for_status())
            .with_context(|| format!("failed to fetch {source}"))?
            .text()
            .with_context(|| format!("failed to read response body from {source}"))?;
        return parse::from_json(&body).with_context(|| format!("failed to parse {source}"));
    }

    let path = Path::new(source);
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    let parsed = match ext {
        "yaml" | "yml" => parse::from_yaml(&content)?,
        _ => parse::from_json(&content)?,
    };
    Ok(parsed)
}

/// Write generated files to disk, creating parent directories as needed.
fn write_files(files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = PathBuf::from(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(
    input: Option<String>,
    api_name: Option<String>,
    out: Option<String>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let source = input.unwrap_or_else(|| cfg.input.clone());

    let mut options = cfg.general_options();
    if let Some(api_name) = api_name {
        options.api_name = api_name;
    }
    if let Some(out) = out {
        options.client_file_path = out;
    }

    let document = load_document(&source)?;
    let files = generate_files(&document, &options)?;

    // Everything is generated in memory first: a failed run writes no
    // partial output.
    write_files(&files)?;
    eprintln!("Generated {} files for `{}`", files.len(), options.api_name);
    Ok(())
}

/// Run the full pipeline against an in-memory document. The name registry
/// lives exactly as long as this one run.
fn generate_files(
    document: &OpenApiDocument,
    options: &GeneralOptions,
) -> Result<Vec<GeneratedFile>> {
    let mut registry = NameRegistry::new();
    let operations = extract::extract(document, &mut registry)?;
    let files = TsClientGenerator.generate(document, &operations, &mut registry, options)?;
    Ok(files)
}

fn cmd_validate(input: &str) -> Result<()> {
    let document = load_document(input)?;

    eprintln!(
        "Valid OpenAPI {} document: {}",
        document.openapi, document.info.title
    );
    eprintln!("  Version: {}", document.info.version);
    eprintln!("  Paths: {}", document.paths.len());

    let mut registry = NameRegistry::new();
    let operations = extract::extract(&document, &mut registry)?;
    eprintln!("  Operations: {}", operations.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: &str, format: InspectFormat) -> Result<()> {
    let document = load_document(input)?;
    let mut registry = NameRegistry::new();
    let operations = extract::extract(&document, &mut registry)?;

    let summary = build_inspect_summary(&document, &operations);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(
    document: &OpenApiDocument,
    operations: &[OperationModel],
) -> serde_json::Value {
    let operations: Vec<serde_json::Value> = operations
        .iter()
        .map(|op| {
            serde_json::json!({
                "name": op.method_name,
                "method": op.verb.as_str(),
                "path": op.path_str,
                "path_parameters": op.path_parameters.iter().map(|p| {
                    serde_json::json!({"name": p.name, "in": p.location.as_str()})
                }).collect::<Vec<_>>(),
                "has_body": op.body_shape.as_ref().is_some_and(|s| !s.is_empty()),
                "has_response": op.response_shape.as_ref().is_some_and(|s| !s.is_empty()),
            })
        })
        .collect();

    serde_json::json!({
        "info": {
            "title": document.info.title,
            "version": document.info.version,
        },
        "servers": document.servers.iter().map(|s| s.substituted_url()).collect::<Vec<_>>(),
        "operations": operations,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_document_reads_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.json");
        fs::write(
            &path,
            r#"{"openapi": "3.0.0", "info": {"title": "T", "version": "1"}, "paths": {}}"#,
        )
        .unwrap();
        let document = load_document(path.to_str().unwrap()).unwrap();
        assert_eq!(document.info.title, "T");
    }

    #[test]
    fn load_document_reads_yaml_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spec.yaml");
        fs::write(
            &path,
            "openapi: \"3.1.0\"\ninfo:\n  title: T\n  version: \"1\"\npaths: {}\n",
        )
        .unwrap();
        let document = load_document(path.to_str().unwrap()).unwrap();
        assert_eq!(document.openapi, "3.1.0");
    }

    #[test]
    fn write_files_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out/deep/client.ts");
        let files = vec![GeneratedFile {
            path: nested.to_str().unwrap().to_string(),
            content: "export {};".to_string(),
        }];
        write_files(&files).unwrap();
        assert_eq!(fs::read_to_string(&nested).unwrap(), "export {};");
    }

    #[test]
    fn generate_files_produces_client_and_shim() {
        let document = parse::from_json(
            r#"{"openapi": "3.0.0", "info": {"title": "T", "version": "1"}, "paths": {}}"#,
        )
        .unwrap();
        let options = GeneralOptions {
            api_name: "echo".to_string(),
            client_file_path: "temp/".to_string(),
        };
        let files = generate_files(&document, &options).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "temp/echo.ts");
        assert_eq!(files[1].path, "temp/httpClient.ts");
    }
}
