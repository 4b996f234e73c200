//! reltab-dialect CLI - inspect SQL dialect type tables, quoting and rendering.

use clap::{Parser, Subcommand, ValueEnum};
use reltab_dialect::{Config, DialectCatalog, DialectError, RawValue, SqlDialect};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser)]
#[command(name = "reltab-dialect")]
#[command(about = "Inspect reltab SQL dialects: type tables, identifier quoting and value rendering")]
#[command(version)]
struct Cli {
    /// Path to YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dialect to use (overrides the configuration file)
    #[arg(short, long)]
    dialect: Option<String>,

    /// Output JSON result to stdout
    #[arg(long)]
    output_json: bool,

    /// Log format: text or json
    #[arg(long, default_value = "text")]
    log_format: String,

    /// Log verbosity: debug, info, warn, error
    #[arg(long, default_value = "info")]
    verbosity: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered dialects
    Dialects,

    /// Show the native type table of the selected dialect
    Types,

    /// Quote a column identifier for the selected dialect
    Quote {
        /// Column name or expression to quote
        ident: String,
    },

    /// Render a raw value as display text
    Render {
        /// Native type name the value was reported under (e.g. TIMESTAMP)
        #[arg(short = 't', long = "type")]
        native_type: String,

        /// How to interpret VALUE
        #[arg(long = "as", value_enum, default_value_t = ValueShape::Text)]
        shape: ValueShape,

        /// Raw value (omit with --as null)
        value: Option<String>,
    },
}

/// Interpretation of the raw value passed to `render`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ValueShape {
    Text,
    Int,
    Float,
    Hex,
    Json,
    Null,
}

#[derive(Serialize)]
struct TypeRow<'a> {
    native_type: &'a str,
    kind: &'a str,
    representative: bool,
}

#[derive(Serialize)]
struct QuoteOutput<'a> {
    dialect: &'a str,
    ident: &'a str,
    quoted: &'a str,
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    dialect: &'a str,
    native_type: &'a str,
    kind: &'a str,
    value: &'a RawValue<'a>,
    text: &'a str,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_detailed());
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> Result<(), DialectError> {
    let cli = Cli::parse();

    setup_logging(&cli.verbosity, &cli.log_format).map_err(DialectError::Config)?;

    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };
    if let Some(name) = &cli.dialect {
        config.dialect = name.clone();
    }

    let catalog = DialectCatalog::global();

    if let Commands::Dialects = cli.command {
        let names = catalog.dialect_names();
        if cli.output_json {
            println!("{}", serde_json::to_string_pretty(&names)?);
        } else {
            for name in names {
                println!("{}", name);
            }
        }
        return Ok(());
    }

    let dialect = catalog.require_dialect(&config.dialect)?;
    debug!(dialect = dialect.dialect_name(), "Selected dialect");

    match cli.command {
        Commands::Dialects => unreachable!(), // Handled above

        Commands::Types => {
            let rows = type_rows(dialect);
            if cli.output_json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("Dialect: {}", dialect.dialect_name());
                println!(
                    "  Subquery alias required: {}",
                    dialect.require_subquery_alias()
                );
                for row in &rows {
                    println!(
                        "  {:<10} {}{}",
                        row.native_type,
                        row.kind,
                        if row.representative { " *" } else { "" }
                    );
                }
            }
        }

        Commands::Quote { ident } => {
            let quoted = dialect.try_quote_col(&ident)?;
            if cli.output_json {
                let out = QuoteOutput {
                    dialect: dialect.dialect_name(),
                    ident: &ident,
                    quoted: &quoted,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", quoted);
            }
        }

        Commands::Render {
            native_type,
            shape,
            value,
        } => {
            let column_type = dialect.require_column_type(&native_type)?;
            let raw = parse_value(shape, value.as_deref())?;
            let text = column_type.render_with(&raw, &config.render_env());
            if cli.output_json {
                let out = RenderOutput {
                    dialect: dialect.dialect_name(),
                    native_type: &native_type,
                    kind: column_type.kind().as_str(),
                    value: &raw,
                    text: &text,
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", text);
            }
        }
    }

    Ok(())
}

/// Native type table rows, sorted by name, flagging representative types.
fn type_rows(dialect: &dyn SqlDialect) -> Vec<TypeRow<'_>> {
    let types = dialect.column_types();
    let core = dialect.core_column_types();
    types
        .native_names()
        .into_iter()
        .filter_map(|name| {
            let column_type = types.get(name)?;
            let representative = core
                .get(column_type.kind())
                .is_some_and(|rep| rep.native_type_name() == name);
            Some(TypeRow {
                native_type: name,
                kind: column_type.kind().as_str(),
                representative,
            })
        })
        .collect()
}

/// Build a raw value from command-line text.
fn parse_value(shape: ValueShape, value: Option<&str>) -> Result<RawValue<'static>, DialectError> {
    if shape == ValueShape::Null {
        return Ok(RawValue::Null);
    }
    let text = value.ok_or_else(|| {
        DialectError::Config("VALUE is required unless --as null is given".to_string())
    })?;

    let raw = match shape {
        ValueShape::Null => RawValue::Null,
        ValueShape::Text => RawValue::from(text.to_string()),
        ValueShape::Int => text
            .parse::<i64>()
            .map(RawValue::Int)
            .map_err(|e| DialectError::Config(format!("invalid int value '{}': {}", text, e)))?,
        ValueShape::Float => text
            .parse::<f64>()
            .map(RawValue::Float)
            .map_err(|e| DialectError::Config(format!("invalid float value '{}': {}", text, e)))?,
        ValueShape::Hex => hex::decode(text)
            .map(RawValue::from)
            .map_err(|e| DialectError::Config(format!("invalid hex value '{}': {}", text, e)))?,
        ValueShape::Json => RawValue::Json(serde_json::from_str(text)?),
    };
    Ok(raw)
}

/// Setup logging based on verbosity and format.
fn setup_logging(verbosity: &str, format: &str) -> Result<(), String> {
    let level = match verbosity.to_lowercase().as_str() {
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .with_writer(std::io::stderr);

    match format {
        "json" => subscriber.json().init(),
        "text" => subscriber.init(),
        other => return Err(format!("unknown log format '{}' (expected text or json)", other)),
    }

    Ok(())
}
