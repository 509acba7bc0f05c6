//! Story workflow CLI entry point
//!
//! Thin front-end over the workflow controller: logs in (optionally
//! registering first), prints the story catalog, and can drive one
//! generate-and-save cycle from command-line character notation.

use std::env;

use anyhow::{bail, Context, Result};
use clap::Parser;

use controller::{HttpStoryService, WorkflowController};
use shared::EmotionKind;

#[derive(Parser)]
#[command(name = "controller")]
#[command(about = "Client workflow controller for the story generation service")]
struct Args {
    /// Base URL of the remote story service
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    backend_url: String,

    /// Register the account before logging in
    #[arg(long)]
    register: bool,

    /// Character in "Name" or "Name:happiness=80,fear=20" notation
    /// (repeatable; the first replaces the initial blank roster entry)
    #[arg(long = "character")]
    characters: Vec<String>,

    /// Scene for the generated story
    #[arg(long)]
    scene: Option<String>,

    /// Scenario for the generated story
    #[arg(long)]
    scenario: Option<String>,

    /// Save the generated story under this title
    #[arg(long)]
    title: Option<String>,
}

/// Split "Name:happiness=80,fear=20" into the name and its emotion settings
fn parse_character(notation: &str) -> Result<(String, Vec<(EmotionKind, String)>)> {
    let Some((name, emotions)) = notation.split_once(':') else {
        return Ok((notation.to_string(), Vec::new()));
    };

    let mut settings = Vec::new();
    for part in emotions.split(',').filter(|p| !p.trim().is_empty()) {
        let (kind, value) = part
            .split_once('=')
            .with_context(|| format!("expected emotion=value, got '{part}'"))?;
        let kind: EmotionKind = kind
            .trim()
            .parse()
            .map_err(|e: String| anyhow::anyhow!(e))?;
        settings.push((kind, value.trim().to_string()));
    }
    Ok((name.to_string(), settings))
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    shared::logging::init_tracing("controller");

    let args = Args::parse();

    let username = env::var("STORY_USERNAME").context("STORY_USERNAME must be set")?;
    let password = env::var("STORY_PASSWORD").context("STORY_PASSWORD must be set")?;

    let service = HttpStoryService::new(&args.backend_url);
    let controller = WorkflowController::new(service.clone(), service.clone(), service);

    if args.register {
        controller.register(&username, &password).await?;
        println!("Registered account '{username}'");
    }

    controller.login(&username, &password).await?;
    println!("Logged in as '{username}'");

    let catalog = controller.state.catalog.read().await.clone();
    if catalog.is_empty() {
        println!("No saved stories");
    } else {
        println!("Saved stories:");
        for story in &catalog {
            println!("  [{}] {}", story.id, story.title);
        }
    }

    // Nothing to generate without both prompt fields
    let (Some(scene), Some(scenario)) = (args.scene, args.scenario) else {
        return Ok(());
    };

    if args.characters.is_empty() {
        bail!("at least one --character is required to generate a story");
    }

    for (position, notation) in args.characters.iter().enumerate() {
        let (name, emotions) = parse_character(notation)?;
        let index = if position == 0 {
            0
        } else {
            controller.add_character().await
        };
        controller.set_name(index, &name).await?;
        for (kind, value) in emotions {
            controller.set_emotion(index, kind, &value).await?;
        }
    }
    controller.set_scene(&scene).await;
    controller.set_scenario(&scenario).await;

    let generation = controller.submit_generation().await?;
    println!("\n{}\n", generation.text);

    if let Some(title) = args.title {
        let id = controller.save_active(&title).await?;
        println!("Saved as story {id} ('{title}')");
    }

    Ok(())
}
