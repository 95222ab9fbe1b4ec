//! Autoprompt CLI - Compose system prompts from the terminal
//!
//! Composes locally by default; `--remote` sends the inputs to an
//! Autoprompt server instead.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use autoprompt::{AutoSystemPrompt, Component, ModelFamily, PromptRequest, Tone};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use tracing_subscriber::EnvFilter;

use api::AutopromptClient;
use config::{Config, Preset};

#[derive(Parser)]
#[command(name = "autoprompt")]
#[command(about = "Autoprompt CLI - Compose system prompts for LLM apps", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a system prompt and print it to stdout
    Compose {
        /// Main objective for the AI
        goal: Option<String>,
        /// Comma-separated keywords or concepts
        #[arg(short, long)]
        keywords: Option<String>,
        /// Tone: formal, casual, technical, friendly, assertive
        #[arg(short, long)]
        tone: Option<Tone>,
        /// Target model family: default, openai, anthropic, open-source
        #[arg(short, long)]
        model: Option<ModelFamily>,
        /// Preset to start from
        #[arg(short, long)]
        preset: Option<String>,
        /// Compose on the configured server instead of locally
        #[arg(long)]
        remote: bool,
        /// Ask for the goal if none was given
        #[arg(short, long)]
        interactive: bool,
        /// Show status and options on stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Manage saved presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },

    /// List tone and model family options
    Options {
        /// Ask the configured server instead
        #[arg(long)]
        remote: bool,
    },

    /// Store API key for remote mode
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum PresetAction {
    /// Add or replace a preset
    Add {
        /// Preset name (e.g., "french", "docs")
        name: String,
        #[arg(short, long)]
        goal: Option<String>,
        #[arg(short, long)]
        keywords: Option<String>,
        #[arg(short, long)]
        tone: Option<Tone>,
        #[arg(short, long)]
        model: Option<ModelFamily>,
    },
    /// List all presets
    List,
    /// Show one preset
    Show {
        name: String,
    },
    /// Remove a preset
    Remove {
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compose {
            goal,
            keywords,
            tone,
            model,
            preset,
            remote,
            interactive,
            verbose,
        } => {
            let flags = Preset {
                user_goal: goal,
                keywords,
                tone,
                target_model_family: model,
            };
            cmd_compose(flags, preset, remote, interactive, verbose).await
        }
        Commands::Preset { action } => cmd_preset(action),
        Commands::Options { remote } => cmd_options(remote).await,
        Commands::Login { key } => cmd_login(key).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_compose(
    mut flags: Preset,
    preset: Option<String>,
    remote: bool,
    interactive: bool,
    verbose: bool,
) -> Result<()> {
    let config = Config::load()?;

    if interactive && flags.user_goal.is_none() && preset.is_none() {
        let goal: String = Input::new()
            .with_prompt("User goal")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        flags.user_goal = Some(goal);
    }

    let request = config.resolve(preset.as_deref(), &flags)?;
    tracing::debug!("Resolved compose inputs: {:?}", request);

    let (prompt, status) = if remote {
        let client = AutopromptClient::new(&config.base_url, config.api_key.as_deref());
        let resp = client.compose(&request).await?;
        (resp.system_prompt, resp.status)
    } else {
        compose_local(request.clone()).await?
    };

    if verbose {
        // Metadata to stderr so stdout is clean for piping
        eprintln!(
            "{} {} - {} tone, {} ({})",
            "✓".green(),
            status,
            request.tone.to_string().cyan(),
            request.target_model_family.to_string().cyan(),
            (if remote { "remote" } else { "local" }).dimmed()
        );
        eprintln!("{}", "---".dimmed());
    }

    println!("{}", prompt);

    Ok(())
}

/// Run the component in-process and collect its output and status
async fn compose_local(request: PromptRequest) -> Result<(String, String)> {
    let mut component = AutoSystemPrompt::with_inputs(request);
    let message = component.run().await?;
    let status = component.status().unwrap_or_default().to_string();
    Ok((message.into_text(), status))
}

fn cmd_preset(action: PresetAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        PresetAction::Add {
            name,
            goal,
            keywords,
            tone,
            model,
        } => {
            let preset = Preset {
                user_goal: goal,
                keywords,
                tone,
                target_model_family: model,
            };
            let replaced = config.get_preset(&name).is_some();
            config.add_preset(name.clone(), preset);
            config.save()?;

            let verb = if replaced { "updated" } else { "added" };
            println!("{} Preset '{}' {}", "✓".green(), name, verb);
        }

        PresetAction::List => {
            if config.presets.is_empty() {
                println!("No presets configured.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  autoprompt preset add <name> --goal \"...\" --tone formal");
                return Ok(());
            }

            println!("{}", "Presets:".bold());
            for (name, preset) in &config.presets {
                let goal = preset.user_goal.as_deref().unwrap_or("-");
                println!("  {} {}", name.cyan(), truncate_string(goal, 50).dimmed());
            }
        }

        PresetAction::Show { name } => {
            let preset = config
                .get_preset(&name)
                .with_context(|| format!("Preset '{}' not found", name))?;

            println!("{}", name.cyan().bold());
            println!("  Goal: {}", preset.user_goal.as_deref().unwrap_or("-"));
            println!("  Keywords: {}", preset.keywords.as_deref().unwrap_or("-"));
            println!(
                "  Tone: {}",
                preset.tone.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string())
            );
            println!(
                "  Model Family: {}",
                preset
                    .target_model_family
                    .map(|f| f.to_string())
                    .unwrap_or_else(|| "-".to_string())
            );
        }

        PresetAction::Remove { name } => {
            if config.remove_preset(&name) {
                config.save()?;
                println!("{} Preset '{}' removed", "✓".green(), name);
            } else {
                bail!("Preset '{}' not found", name);
            }
        }
    }

    Ok(())
}

async fn cmd_options(remote: bool) -> Result<()> {
    let (tones, families) = if remote {
        let config = Config::load()?;
        let client = AutopromptClient::new(&config.base_url, config.api_key.as_deref());
        let options = client.options().await?;
        (options.tones, options.model_families)
    } else {
        (Tone::ALL.to_vec(), ModelFamily::ALL.to_vec())
    };

    println!("{}", "Tones:".bold());
    for tone in tones {
        let marker = if tone == Tone::default() { " (default)".green().to_string() } else { String::new() };
        println!("  {}{}", tone.to_string().cyan(), marker);
    }

    println!("{}", "Model Families:".bold());
    for family in families {
        let marker = if family == ModelFamily::default() { " (default)".green().to_string() } else { String::new() };
        let hint = if family.instruction().is_some() { "" } else { " - no extra instruction" };
        println!("  {}{}{}", family.to_string().cyan(), marker, hint.dimmed());
    }

    Ok(())
}

async fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    let client = AutopromptClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Autoprompt API at {}", config.base_url);
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().take(max_chars).collect();
    if s.chars().count() > max_chars {
        format!("{}...", chars.into_iter().collect::<String>())
    } else {
        s.to_string()
    }
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
    );
    println!(
        "  Default Tone: {}",
        config.default_tone.unwrap_or_default().to_string().cyan()
    );
    println!(
        "  Default Model Family: {}",
        config.default_model_family.unwrap_or_default().to_string().cyan()
    );
    println!("  Presets: {}", config.presets.len());

    Ok(())
}
