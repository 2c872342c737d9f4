use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use clap::{ArgAction, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spotform::{
    CreatedSpot, CreationPayload, DocumentFormat, ErrorMap, FormOptions, FormSection, FormState,
    Navigator, Notifier, OutputDestination, OutputOptions, SessionUser, SpotCreator, SpotId,
    SpotImage, StaticSession, SubmissionController, SubmitError, draft_commands, emit,
    parse_document_any, parse_override, require_session,
};

#[derive(Debug, Parser)]
#[command(
    name = "spotform",
    version,
    about = "Validate and submit spot listing drafts"
)]
struct Cli {
    /// Draft spec: file path, inline payload, or "-" for stdin
    #[arg(short = 'd', long = "draft", value_name = "SPEC")]
    draft: Option<String>,

    /// Override a single field, e.g. --set city=Austin. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", action = ArgAction::Append)]
    overrides: Vec<String>,

    /// Form options spec: file path or inline payload
    #[arg(short = 'c', long = "config", value_name = "SPEC")]
    config: Option<String>,

    /// Only validate the draft; never submit
    #[arg(long = "check")]
    check: bool,

    /// Print validation results as a document instead of text
    #[arg(long = "json", requires = "check")]
    json: bool,

    /// List every field with its section, guidance and placeholder, then exit
    #[arg(long = "fields", conflicts_with_all = ["check", "draft", "overrides"])]
    fields: bool,

    /// Id of the signed-in user; omitting it submits anonymously (and is refused)
    #[arg(long = "owner-id", value_name = "ID")]
    owner_id: Option<u64>,

    #[arg(long = "first-name", value_name = "NAME", default_value = "")]
    first_name: String,

    #[arg(long = "last-name", value_name = "NAME", default_value = "")]
    last_name: String,

    /// Id assigned to the created spot
    #[arg(long = "spot-id", value_name = "ID", default_value_t = 1)]
    spot_id: u64,

    /// Output destinations for the created spot ("-" writes to stdout)
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Emit compact documents rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.fields {
        print!("{}", render_field_guide());
        return Ok(());
    }

    let options = match cli.config.as_deref() {
        Some(spec) => load_options(spec)?,
        None => FormOptions::default(),
    };
    let output = build_output_options(&cli)?;

    let controller = SubmissionController::new(
        &options,
        Arc::new(OutboxCreator::new(output, cli.spot_id)),
        Arc::new(StderrNavigator),
        Arc::new(StderrNotifier),
    )?;

    if let Some(spec) = cli.draft.as_deref() {
        let document = load_document(spec, "draft")?;
        for command in draft_commands(&document)? {
            controller.dispatch(command);
        }
    }
    for raw in &cli.overrides {
        controller.dispatch(parse_override(raw)?);
    }

    if cli.check {
        let form = controller.snapshot();
        return report_check(&form, cli.json, !cli.no_pretty);
    }

    let session = match cli.owner_id {
        Some(id) => StaticSession::signed_in(SessionUser::new(
            id,
            cli.first_name.clone(),
            cli.last_name.clone(),
        )),
        None => StaticSession::anonymous(),
    };
    let user = match require_session(&session) {
        Ok(user) => user,
        Err(err) => return Err(eyre!("{err} (redirecting to {})", err.redirect_to())),
    };

    match controller.submit(&user).await {
        Ok(created) => {
            info!(spot_id = %created.id, "done");
            Ok(())
        }
        Err(SubmitError::Blocked { issues }) => {
            let form = controller.snapshot();
            if let Some(errors) = form.visible_errors() {
                eprint!("{}", render_errors(errors));
            }
            Err(eyre!("{issues} issue(s) remaining"))
        }
        Err(err) => Err(err.into()),
    }
}

/// Stand-in for the remote creation service: records the spot to the
/// configured outputs and assigns sequential ids.
struct OutboxCreator {
    output: OutputOptions,
    next_id: AtomicU64,
}

impl OutboxCreator {
    fn new(output: OutputOptions, first_id: u64) -> Self {
        Self {
            output,
            next_id: AtomicU64::new(first_id),
        }
    }
}

#[async_trait]
impl SpotCreator for OutboxCreator {
    async fn create(
        &self,
        payload: CreationPayload,
        images: Vec<SpotImage>,
    ) -> anyhow::Result<CreatedSpot> {
        let created = CreatedSpot {
            id: SpotId(self.next_id.fetch_add(1, Ordering::Relaxed)),
            spot: payload,
            images,
        };
        emit(&created, &self.output)?;
        Ok(created)
    }
}

struct StderrNavigator;

impl Navigator for StderrNavigator {
    fn go_to(&self, path: &str) {
        eprintln!("-> {path}");
    }
}

struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

fn report_check(form: &FormState, as_document: bool, pretty: bool) -> Result<()> {
    let errors = form.errors();
    if as_document {
        let report = json!({ "valid": errors.is_empty(), "errors": errors });
        let options = OutputOptions::default().with_pretty(pretty);
        emit(&report, &options).map_err(|err| eyre!("{err:#}"))?;
    } else if errors.is_empty() {
        println!("draft is ready to submit");
    } else {
        print!("{}", render_errors(errors));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(eyre!("{} issue(s) remaining", errors.len()))
    }
}

fn render_errors(errors: &ErrorMap) -> String {
    let mut body = String::new();
    for section in FormSection::ALL {
        let lines: Vec<(&str, &str)> = errors
            .iter()
            .filter(|(key, _)| FormSection::of(key.field) == section)
            .map(|(key, message)| (key.as_str(), message))
            .collect();
        if lines.is_empty() {
            continue;
        }
        let _ = writeln!(body, "{}", section.title());
        let _ = writeln!(body, "  {}", section.guidance());
        for (key, message) in lines {
            let _ = writeln!(body, "  {key}: {message}");
        }
    }
    body
}

fn render_field_guide() -> String {
    let mut body = String::new();
    for section in FormSection::ALL {
        let _ = writeln!(body, "[{}] {}", section.id(), section.title());
        let _ = writeln!(body, "  {}", section.guidance());
        for field in section.fields() {
            let _ = writeln!(body, "  {:<12} {}", field.key(), field.placeholder());
        }
    }
    body
}

fn load_options(spec: &str) -> Result<FormOptions> {
    let (contents, hint) = read_source(spec, "config")?;
    FormOptions::from_document(&contents, hint)
        .map_err(|err| eyre!("failed to parse config: {err:#}"))
}

fn load_document(spec: &str, label: &str) -> Result<Value> {
    let (contents, hint) = read_source(spec, label)?;
    parse_document_any(&contents, hint).map_err(|err| eyre!("failed to parse {label}: {err:#}"))
}

/// Reads a file path, `-` for stdin, or treats `spec` itself as the document.
fn read_source(spec: &str, label: &str) -> Result<(String, DocumentFormat)> {
    let source = if spec == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        (buffer, DocumentFormat::default())
    } else {
        let path = Path::new(spec);
        if path.is_file() {
            let contents = fs::read_to_string(path)
                .wrap_err_with(|| format!("failed to load {label} from {}", path.display()))?;
            (contents, DocumentFormat::from_path(path).unwrap_or_default())
        } else {
            (spec.to_string(), DocumentFormat::default())
        }
    };
    Ok(source)
}

fn build_output_options(cli: &Cli) -> Result<OutputOptions> {
    let mut destinations = Vec::new();
    let mut format = None;
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            return Err(eyre!("output destination cannot be empty"));
        }
        if raw == "-" {
            destinations.push(OutputDestination::Stdout);
            continue;
        }
        let path = PathBuf::from(raw);
        let detected = DocumentFormat::from_path(&path).ok_or_else(|| {
            eyre!(
                "cannot infer format from output file {}; use .json/.yaml/.toml",
                path.display()
            )
        })?;
        if let Some(existing) = format
            && existing != detected
        {
            return Err(eyre!(
                "output file {} uses {detected} but other destinations use {existing}; align extensions",
                path.display()
            ));
        }
        format = Some(detected);
        destinations.push(OutputDestination::File(path));
    }
    if destinations.is_empty() {
        destinations.push(OutputDestination::Stdout);
    }
    Ok(OutputOptions::new(format.unwrap_or_default())
        .with_pretty(!cli.no_pretty)
        .with_destinations(destinations))
}
