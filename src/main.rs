// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pathgrid Editor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pathgrid Editor CLI entrypoint.
//!
//! Loads a document (or the built-in demo), replays an optional intent script against it and
//! prints the resulting document as JSON.

use std::error::Error;
use std::path::PathBuf;

use pathgrid_editor::config::EditorConfig;
use pathgrid_editor::model::fixtures::demo_document;
use pathgrid_editor::render::RecordingScene;
use pathgrid_editor::store::{render_document, script_schema, DocumentFile, Script};
use pathgrid_editor::workspace::Workspace;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "PATHGRID_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <document.json> [--config <path>] [--script <path>] [--output <path>]\n  {program} --demo [--config <path>] [--script <path>] [--output <path>]\n  {program} --print-schema\n\nThe resulting document is printed to stdout unless --output is given.\n--script replays a JSON list of intents; each step opens its pathgrid on first use.\n--print-schema prints the JSON schema of the script format and exits.\n\nSet {LOG_ENV} (e.g. `{LOG_ENV}=debug`) to control log output on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    print_schema: bool,
    document: Option<String>,
    config: Option<String>,
    script: Option<String>,
    output: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--print-schema" => {
                if options.print_schema {
                    return Err(());
                }
                options.print_schema = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--script" => {
                if options.script.is_some() {
                    return Err(());
                }
                options.script = Some(args.next().ok_or(())?);
            }
            "--output" => {
                if options.output.is_some() {
                    return Err(());
                }
                options.output = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.document.is_some() {
                    return Err(());
                }
                options.document = Some(arg);
            }
        }
    }

    if options.print_schema {
        let only_schema = options == CliOptions {
            print_schema: true,
            ..CliOptions::default()
        };
        return if only_schema { Ok(options) } else { Err(()) };
    }

    if options.demo == options.document.is_some() {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "pathgrid-editor".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();

        if options.print_schema {
            println!("{}", serde_json::to_string_pretty(&script_schema())?);
            return Ok(());
        }

        let config = match &options.config {
            Some(path) => EditorConfig::load(&PathBuf::from(path))?,
            None => EditorConfig::default(),
        };

        let document = match &options.document {
            Some(path) => DocumentFile::new(path).load()?,
            None => demo_document(),
        };

        let scene = RecordingScene::new();
        let root = scene.root();
        let mut workspace = Workspace::new(document, scene, root, config);

        if let Some(path) = &options.script {
            let script = Script::load(&PathBuf::from(path))?;
            tracing::info!(steps = script.len(), "replaying script");
            for step in script.steps() {
                workspace.open(step.pathgrid_id.clone());
                let performed = workspace.perform(&step.pathgrid_id, step.intent)?;
                tracing::debug!(
                    pathgrid = %step.pathgrid_id,
                    intent = ?step.intent,
                    commands = performed.commands,
                    "step performed"
                );
                workspace.tick();
            }
        }

        let document = workspace.into_document();
        match &options.output {
            Some(path) => DocumentFile::new(path).save(&document)?,
            None => println!("{}", render_document(&document)?),
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("pathgrid-editor: {err}");
        std::process::exit(1);
    }
}
