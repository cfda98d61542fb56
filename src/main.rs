// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::Path;
use std::time::Instant;

use anyhow::Context as _;
use nodeflow::backends::local::keys::{DOCUMENT, OUTLINE};
use nodeflow::backends::local::DocumentPipeline;
use nodeflow::config::{load_and_validate_config, Config};
use nodeflow::observability::init_tracing;

fn is_config_path(arg: &str) -> bool {
    matches!(
        Path::new(arg).extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        println!("Usage: nodeflow [config.yaml] [topic ...]");
        println!("Example: nodeflow configs/pipeline.yaml \"error handling\"");
        return Ok(());
    }

    let (mut config, topic_args) = match args.split_first() {
        Some((first, rest)) if is_config_path(first) => (
            load_and_validate_config(first)
                .with_context(|| format!("loading config {}", first))?,
            rest,
        ),
        _ => (Config::default(), args.as_slice()),
    };
    if !topic_args.is_empty() {
        config.pipeline.topic = topic_args.join(" ");
        config.validate()?;
    }

    init_tracing(&config.logging.filter);

    let pipeline = DocumentPipeline::from_config(&config.pipeline)?;
    let ctx = pipeline.context();

    println!("Topic: \"{}\"", pipeline.topic());
    let started = Instant::now();
    let report = pipeline.flow().run(&ctx).await?;
    let elapsed = started.elapsed();

    let outline = ctx.fetch(&OUTLINE)?.unwrap_or_default();
    let document = ctx
        .fetch(&DOCUMENT)?
        .context("flow finished without producing a document")?;

    println!(
        "Ran {} nodes in {:?}, last action {:?}",
        report.steps(),
        elapsed,
        report.last_action().unwrap_or("<none>")
    );
    println!("Outline: {}", outline.join(" | "));
    println!();
    print!("{}", document);

    ctx.teardown();
    Ok(())
}
