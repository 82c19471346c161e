// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command handlers.
//
// `process` is the strict primary flow: any unreadable page aborts the batch
// and nothing is exported. `convert` is the best-effort bulk path: failed
// pages become empty "Untitled {n}" files and the rest are still written.

use std::path::PathBuf;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use pagescribe_bridge::platform_bridge;
use pagescribe_core::error::{PagescribeError, Result};
use pagescribe_core::types::{ExportFormat, PipelineProgress, PipelineStage, ProcessingMode};
use pagescribe_export::combined_content;
use pagescribe_ocr::OcrClient;
use pagescribe_pipeline::Session;

use crate::cli::{ConfigCommand, ConvertArgs, ProcessArgs};
use crate::services::app_services::{AppServices, read_images};

pub async fn process(services: &AppServices, args: ProcessArgs) -> Result<()> {
    let format = args.format.unwrap_or(services.config().export_format);
    let images = read_images(&args.images)?;
    let mut session =
        recognise(services.ocr_client()?, images, format, ProcessingMode::Strict).await?;

    let bridge = platform_bridge();
    let mut exported = false;

    if let Some(out) = &args.out {
        print_written(&session.export_to_folder(out)?);
        exported = true;
    }
    if args.copy {
        session.copy_all(&bridge)?;
        println!("Copied {} page(s) to the clipboard.", session.pages().len());
        exported = true;
    }
    if args.share {
        print_written(&session.share(&bridge)?);
        exported = true;
    }
    if !exported {
        println!("{}", combined_content(session.pages(), format));
    }
    Ok(())
}

pub async fn convert(services: &AppServices, args: ConvertArgs) -> Result<()> {
    let format = args.format.unwrap_or(services.config().export_format);
    let images = read_images(&args.images)?;
    let mut session =
        recognise(services.ocr_client()?, images, format, ProcessingMode::BestEffort).await?;

    print_written(&session.export_to_folder(&args.out)?);
    let failed = session.failed_pages();
    if failed > 0 {
        println!("{failed} page(s) could not be read and were saved empty.");
    }
    Ok(())
}

pub fn config(services: &mut AppServices, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => println!("{}", describe_config(services)?),
        ConfigCommand::SetKey { key } => {
            services.update_config(|c| c.api_key = Some(key.trim().to_owned()))?;
            println!("API key saved.");
        }
        ConfigCommand::SetModel { model_id } => {
            services.update_config(|c| c.model_id = Some(model_id.trim().to_owned()))?;
            println!("Model id saved.");
        }
        ConfigCommand::SetFormat { format } => {
            services.update_config(|c| c.export_format = format)?;
            println!("Default format set to {format}.");
        }
    }
    Ok(())
}

/// Load `images` into a fresh session and run OCR over them.
async fn recognise<C: OcrClient>(
    client: C,
    images: Vec<Vec<u8>>,
    format: ExportFormat,
    mode: ProcessingMode,
) -> Result<Session<C>> {
    if images.is_empty() {
        return Err(PagescribeError::NothingToProcess);
    }
    let mut session = Session::new(client);
    session.set_format(format);
    for bytes in images {
        session.add_image(bytes)?;
    }
    session.mark_ready()?;

    let reporter = report_progress(session.subscribe());
    let outcome = session.process(mode).await;
    reporter.abort();

    let count = outcome?;
    info!(pages = count, %format, "batch recognised");
    Ok(session)
}

fn report_progress(mut progress: watch::Receiver<PipelineProgress>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let current = *progress.borrow_and_update();
            if current.stage == PipelineStage::Processing {
                eprintln!("Recognising pages... {:>3}%", current.percent());
            }
        }
    })
}

fn print_written(paths: &[PathBuf]) {
    for path in paths {
        println!("{}", path.display());
    }
}

/// Settings in effect, as shown by `config show`.
fn describe_config(services: &AppServices) -> Result<String> {
    let config = services.config();
    let mut shown = config.clone();
    shown.api_key = shown.api_key.as_deref().map(mask);

    let mut text = format!(
        "# {}\n{}",
        services.config_path().display(),
        serde_json::to_string_pretty(&shown)?
    );
    if !config.has_api_key() {
        text.push_str("\nNo API key set. Run `pagescribe config set-key <KEY>` to add one.");
    }
    Ok(text)
}

/// Keep only the last four characters visible.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "****".into();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("****{tail}")
}
