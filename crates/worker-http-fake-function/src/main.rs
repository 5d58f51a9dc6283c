//! Example Function Runner
//!
//! Builds a fake request from a fixture file, runs `ExampleFunction` against
//! it and prints the response body.
//!
//! Usage:
//!   example-function --fixture request.yaml [--pretty]

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use worker_http_fake::{
    BuilderOptions, HttpRequestDataBuilder, HttpResponseDataExt, JsonObjectSerializer,
    RequestFixture,
};
use worker_http_fake_function::ExampleFunction;

/// Run the example function against a fake request
#[derive(Parser, Debug)]
#[command(name = "example-function")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Request fixture (YAML or JSON). A default GET request is used when omitted
    #[arg(short, long)]
    fixture: Option<PathBuf>,

    /// Pretty-print the JSON response
    #[arg(short, long)]
    pretty: bool,

    /// Log filter directive
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the response body
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let fixture = match &args.fixture {
        Some(path) => RequestFixture::from_file(path)?,
        None => RequestFixture::default(),
    };

    let serializer = if args.pretty {
        JsonObjectSerializer::pretty()
    } else {
        JsonObjectSerializer::new()
    };
    let mut builder = HttpRequestDataBuilder::with_options(BuilderOptions {
        serializer: Arc::new(serializer),
        ..Default::default()
    });
    fixture
        .apply(&mut builder)
        .context("Failed to apply fixture to request")?;

    let request = builder.build();
    let response = ExampleFunction::default()
        .run(&request)
        .await
        .context("ExampleFunction failed")?;

    println!("{}", response.body_as_string());
    Ok(())
}
