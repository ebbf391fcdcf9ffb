use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use examlens::analysis::parse_analysis;
use examlens::backend::{ChatBackend, DashScopeBackend, ImagePayload, OpenAiBackend};
use examlens::config::{ExamlensConfig, Provider};
use examlens::domain::{Difficulty, Grade, Locale, Subject};
use examlens::pipeline::{AnalyzeRequest, ReanswerRequest, SimilarRequest, TutorPipeline};

#[derive(Parser)]
#[command(name = "examlens", version, about = "Exam-question analysis CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, default_value = "info", global = true)]
    log_level: String,
}

#[derive(Args)]
struct BackendArgs {
    /// JSON config file; missing file means built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    provider: Option<Provider>,
    #[arg(long)]
    model: Option<String>,
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long)]
    api_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe, answer and classify an exam question.
    Analyze {
        #[arg(long)]
        image: Option<PathBuf>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        subject: Option<Subject>,
        #[arg(long)]
        grade: Option<Grade>,
        #[arg(long, default_value = "zh")]
        locale: Locale,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Generate a new question testing the same knowledge points.
    Similar {
        #[arg(long)]
        question: String,
        #[arg(long, value_delimiter = ',')]
        knowledge_points: Vec<String>,
        #[arg(long, default_value = "comparable")]
        difficulty: Difficulty,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Re-answer a question whose text the user has corrected.
    Reanswer {
        #[arg(long)]
        question: String,
        #[arg(long)]
        subject: Option<Subject>,
        #[command(flatten)]
        backend: BackendArgs,
    },
    /// Run the extractor on a saved raw reply, no provider call.
    Parse {
        #[arg(long)]
        file: PathBuf,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_config(args: &BackendArgs) -> anyhow::Result<ExamlensConfig> {
    let mut config = match &args.config {
        Some(path) if path.exists() => ExamlensConfig::load_from_path(path)?,
        _ => ExamlensConfig::default(),
    };
    if let Some(provider) = args.provider {
        config.provider = provider;
    }
    if let Some(model) = &args.model {
        config.model = Some(model.clone());
    }
    if let Some(endpoint) = &args.endpoint {
        config.endpoint = Some(endpoint.clone());
    }
    if let Some(api_key) = &args.api_key {
        config.api_key = Some(api_key.clone());
    }
    Ok(config)
}

fn build_pipeline(args: &BackendArgs) -> anyhow::Result<TutorPipeline<dyn ChatBackend>> {
    let config = load_config(args)?;
    let endpoint = config.resolved_endpoint();
    let api_key = config.resolved_api_key()?;
    let model = config.resolved_model();
    info!(provider = %config.provider, %model, "backend selected");

    let backend: Arc<dyn ChatBackend> = match config.provider {
        Provider::OpenAi => Arc::new(OpenAiBackend::new(endpoint, api_key, model)?),
        Provider::DashScope => Arc::new(DashScopeBackend::new(endpoint, api_key, model)?),
    };
    Ok(TutorPipeline::new(backend, config.prompts))
}

fn read_image(path: &Path) -> anyhow::Result<ImagePayload> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("could not read image file {path:?}"))?;
    let media_type = match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        other => return Err(anyhow!("unsupported image extension: {other:?}")),
    };
    Ok(ImagePayload::from_bytes(media_type, &bytes))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Analyze {
            image,
            text,
            subject,
            grade,
            locale,
            backend,
        } => {
            if image.is_none() && text.is_none() {
                return Err(anyhow!("analyze needs --image, --text, or both"));
            }
            let pipeline = build_pipeline(&backend)?;
            let image = image.as_deref().map(read_image).transpose()?;
            let record = pipeline.analyze(&AnalyzeRequest {
                locale,
                subject,
                grade,
                text,
                image,
            })?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Similar {
            question,
            knowledge_points,
            difficulty,
            backend,
        } => {
            let pipeline = build_pipeline(&backend)?;
            let record = pipeline.generate_similar(&SimilarRequest {
                question,
                knowledge_points,
                difficulty,
            })?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Reanswer {
            question,
            subject,
            backend,
        } => {
            let pipeline = build_pipeline(&backend)?;
            let output = pipeline.reanswer(&ReanswerRequest { question, subject })?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        Commands::Parse { file } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("could not read reply file {file:?}"))?;
            let record = parse_analysis(&raw)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
