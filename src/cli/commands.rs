use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use slang_translator::config::{
    CorsOrigins, ServerConfig, DEFAULT_DICTIONARY_PATH, DEFAULT_HOST, DEFAULT_MAX_TEXT_LENGTH,
    DEFAULT_PORT,
};
use slang_translator::error::Result;
use slang_translator::export::{export_js, DEFAULT_EXPORT_PATH};
use slang_translator::{router_from_config, translate, SlangDictionary, SlangEntry, SlangError};

#[derive(Parser)]
#[command(name = "slang-translator")]
#[command(about = "Expand SMS/chat abbreviations over HTTP or from the command line")]
#[command(version)]
#[command(after_long_help = r#"
EXAMPLES:
    # Start the API on the default port (5000)
    slang-translator serve

    # Restrict browser origins and raise the input ceiling
    slang-translator serve --cors-origins http://localhost:3000 --max-text-length 20000

    # Translate a single message
    slang-translator translate "brb, need to check something asap"

    # Search the dictionary
    slang-translator list --search lol

    # Regenerate the frontend data file
    slang-translator export --output frontend/js/slangData.js
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the slang dictionary (KEY=value per line)
    #[arg(long, global = true, env = "SLANG_FILE", default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve(ServeArgs),

    /// Translate text once and print the result
    Translate {
        /// Text to translate
        text: String,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// List dictionary entries
    List {
        /// Case-insensitive filter on abbreviation or expansion
        #[arg(long)]
        search: Option<String>,

        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Write the dictionary as a JavaScript data file for the frontend
    Export {
        /// Output file
        #[arg(long, default_value = DEFAULT_EXPORT_PATH)]
        output: PathBuf,
    },
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = "HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Verbose logging (env accepts true/false, 1/0, yes/no, on/off)
    #[arg(long, env = "DEBUG", value_parser = clap::builder::BoolishValueParser::new())]
    pub debug: bool,

    /// Allowed CORS origins: "*" or a comma-separated list
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    pub cors_origins: String,

    /// Maximum accepted length of `text`, in characters
    #[arg(long, env = "MAX_TEXT_LENGTH", default_value_t = DEFAULT_MAX_TEXT_LENGTH)]
    pub max_text_length: usize,
}

impl ServeArgs {
    pub fn to_config(&self, dictionary: &Path) -> ServerConfig {
        ServerConfig {
            host: self.host.clone(),
            port: self.port,
            debug: self.debug,
            cors_origins: CorsOrigins::parse(&self.cors_origins),
            max_text_length: self.max_text_length,
            dictionary_path: dictionary.to_path_buf(),
        }
    }
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    config.validate()?;

    let dictionary = Arc::new(SlangDictionary::load(&config.dictionary_path));
    let app = router_from_config(&config, dictionary);

    let listener = bind_listener(&config).await?;
    info!("Slang translator listening on http://{}", listener.local_addr()?);
    if config.debug {
        info!("Debug mode enabled");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Bind the configured host and port; hostnames such as `localhost` are resolved.
pub async fn bind_listener(config: &ServerConfig) -> Result<TcpListener> {
    TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| {
            SlangError::Config(format!(
                "Cannot listen on {}:{}: {}",
                config.host, config.port, e
            ))
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

pub fn translate_once(dictionary_path: &Path, text: &str, format: &str) -> Result<()> {
    let dictionary = SlangDictionary::load(dictionary_path);
    let result = translate(text, &dictionary);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.translated);
        println!("({} translations)", result.translations_count);
    }

    Ok(())
}

pub fn list_entries(dictionary_path: &Path, search: Option<String>, format: &str) -> Result<()> {
    let dictionary = SlangDictionary::load(dictionary_path);
    let matches = match search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(query) => dictionary.search(query),
        None => dictionary.clone(),
    };
    let entries: Vec<SlangEntry> = matches.entries().collect();

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No slang entries found");
        return Ok(());
    }

    for entry in &entries {
        println!("{:<10} {}", entry.abbreviation, entry.expansion);
    }
    println!();
    println!("{} of {} entries", entries.len(), dictionary.len());

    Ok(())
}

pub fn export_dictionary(dictionary_path: &Path, output: &Path) -> Result<()> {
    println!("Reading from: {}", dictionary_path.display());
    let dictionary = SlangDictionary::load(dictionary_path);
    println!("Found {} entries.", dictionary.len());

    let source_name = dictionary_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| {
            SlangError::Export(format!(
                "Dictionary path has no file name: {}",
                dictionary_path.display()
            ))
        })?;

    export_js(&dictionary, &source_name, output)?;
    println!("Successfully wrote to: {}", output.display());

    Ok(())
}
