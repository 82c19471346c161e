// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pagescribe_core::types::ExportFormat;

#[derive(Parser, Debug)]
#[command(name = "pagescribe", version)]
#[command(about = "Turn photographed pages into named text documents")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recognise a batch of pages; any failed page aborts the whole batch.
    Process(ProcessArgs),
    /// Convert images to text files, keeping an empty placeholder for any
    /// page that fails.
    Convert(ConvertArgs),
    /// Show or change saved settings.
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Page images, in reading order.
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Save one file per page into this folder.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Export format (markdown or plain-text). Defaults to the saved setting.
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<ExportFormat>,

    /// Copy all pages to the clipboard.
    #[arg(long)]
    pub copy: bool,

    /// Export into a fresh temporary folder for sharing and print the paths.
    #[arg(long)]
    pub share: bool,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Page images, in reading order.
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Folder to write the converted files into.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Export format (markdown or plain-text). Defaults to the saved setting.
    #[arg(short, long, value_parser = parse_format)]
    pub format: Option<ExportFormat>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the settings in effect (API key masked).
    Show,
    /// Save the OCR service API key.
    SetKey { key: String },
    /// Save the OCR model id.
    SetModel { model_id: String },
    /// Save the default export format.
    SetFormat {
        #[arg(value_parser = parse_format)]
        format: ExportFormat,
    },
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    ExportFormat::parse(value).ok_or_else(|| {
        let known: Vec<String> = ExportFormat::ALL
            .iter()
            .map(|f| format!("{} ({})", f.extension(), f.label()))
            .collect();
        format!("unknown format `{value}`, expected one of: {}", known.join(", "))
    })
}
