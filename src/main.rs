use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use ddlforge::compiler::validate_schema;
use ddlforge::{SchemaDefinition, SqliteDialect, compile_create_table, compile_drop_table};

/// DdlForge schema compiler
#[derive(Parser, Debug)]
#[command(name = "ddlforge")]
#[command(about = "Compile a table-schema document to SQL DDL", long_about = None)]
struct Args {
    /// Path to the JSON schema document
    schema: String,

    /// Emit DROP TABLE statements instead of CREATE TABLE
    #[arg(long)]
    drop: bool,

    /// Validate the document and exit without emitting DDL
    #[arg(long)]
    check: bool,

    /// Target SQL dialect
    #[arg(short, long)]
    dialect: Option<String>,
}

/// Compiler configuration
#[derive(Debug, Deserialize)]
struct ForgeConfig {
    #[serde(default = "default_dialect")]
    dialect: String,
}

fn default_dialect() -> String {
    "sqlite".to_string()
}

impl ForgeConfig {
    /// Load configuration with priority: CLI args > ENV > config file > defaults
    fn load(args: &Args) -> Self {
        let config_paths = ["/etc/ddlforge/ddlforge.toml", "./ddlforge.toml"];

        let mut builder = Config::builder();
        for path in &config_paths {
            if Path::new(path).exists() {
                builder = builder.add_source(File::with_name(path));
                break;
            }
        }
        builder = builder.add_source(Environment::with_prefix("DDLFORGE"));

        let base = builder
            .build()
            .ok()
            .and_then(|c| c.try_deserialize::<Self>().ok())
            .unwrap_or_else(|| Self {
                dialect: default_dialect(),
            });

        Self {
            dialect: args.dialect.clone().unwrap_or(base.dialect),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = ForgeConfig::load(&args);

    if config.dialect != "sqlite" {
        return Err(format!("unsupported dialect '{}'", config.dialect).into());
    }
    let dialect = SqliteDialect::new();

    let document = std::fs::read_to_string(&args.schema)?;
    let schema = SchemaDefinition::from_json(&document)?;
    validate_schema(&schema)?;

    if args.check {
        eprintln!("{}: {} table(s) OK", args.schema, schema.tables.len());
        return Ok(());
    }

    for table in &schema.tables {
        if args.drop {
            println!("{}", compile_drop_table(&table.name, &dialect));
        } else {
            println!("{}", compile_create_table(table, &dialect)?);
        }
        println!();
    }

    Ok(())
}
