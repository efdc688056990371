use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing_subscriber::EnvFilter;

use kisan::config::ConfigError;
use kisan::data::market::{Crop, Market};
use kisan::data::schemes::CategoryFilter;
use kisan::image::{ImageError, ImageRef};
use kisan::panels::{DiagnosisPanel, MarketPanel, SchemesPanel, VoicePanel};
use kisan::{AnalysisError, Dashboard, DashboardConfig, Language, NotificationFeed, Tab, notify, render};

/// Bundled stand-in photo for `demo`; never decoded.
const DEMO_IMAGE: &[u8] = b"\xff\xd8\xff\xe0kisan-demo-leaf";

const PROGRESS_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Image(#[from] ImageError),
    #[error("{0} [{code}]", code = .0.error_code())]
    Analysis(#[from] AnalysisError),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

#[derive(Parser, Debug)]
#[command(name = "kisan", about = "Project Kisan farming assistant dashboard")]
struct Cli {
    /// Print panel snapshots as JSON instead of text.
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    /// Response language.
    #[arg(long, global = true, env = "KISAN_LANGUAGE")]
    lang: Option<Language>,

    /// Seed for diagnosis selection.
    #[arg(long, global = true, env = "KISAN_SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Upload a crop photo and run the diagnosis.
    Diagnose { image: std::path::PathBuf },
    /// Show mandi prices for a crop and market.
    Market {
        #[arg(long, default_value = "tomato")]
        crop: Crop,
        #[arg(long, default_value = "bangalore")]
        market: Market,
    },
    /// Search government schemes.
    Schemes {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, default_value = "all")]
        category: CategoryFilter,
    },
    /// Ask the voice assistant a question.
    Ask { query: String },
    /// Ask one of the predefined sample phrases.
    Sample { index: usize },
    /// Play the latest assistant reply.
    Play,
    /// Toggle the voice listening flag from the header.
    Listen,
    /// Walk through all four tabs, or just one.
    Demo {
        #[arg(long)]
        tab: Option<Tab>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    match try_main().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn try_main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kisan=warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = DashboardConfig::from_env()?;
    if let Some(lang) = cli.lang {
        config.language = lang;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let (notifier, feed) = notify::channel();
    let printer = spawn_printer(feed);
    let mut dash = Dashboard::new(&config, notifier);

    let outcome = run(&mut dash, cli.command, cli.json).await;

    // Dropping the dashboard drops every notifier, which ends the printer.
    drop(dash);
    printer.await?;
    outcome
}

fn spawn_printer(mut feed: NotificationFeed) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(n) = feed.next().await {
            eprintln!("{}", render::notification(&n));
        }
    })
}

async fn run(dash: &mut Dashboard, command: Command, json: bool) -> Result<(), CliError> {
    match command {
        Command::Diagnose { image } => {
            dash.select_tab(Tab::Diagnosis);
            dash.diagnosis.select_image(ImageRef::from_path(&image).await?);
            analyze_with_progress(&dash.diagnosis, !json).await?;
            let state = dash.diagnosis.snapshot();
            emit(json, &state, || render::diagnosis(&state, dash.diagnosis.photo_tips()))?;
        }
        Command::Market { crop, market } => {
            dash.select_tab(Tab::Market);
            dash.market.load(crop, market).await;
            let state = dash.market.snapshot();
            emit(json, &state, || render::market(&state))?;
        }
        Command::Schemes { search, category } => {
            dash.select_tab(Tab::Schemes);
            dash.schemes.set_search(search);
            dash.schemes.set_category(category);
            let visible = dash.schemes.visible();
            let state = dash.schemes.snapshot();
            emit(json, &visible, || render::schemes(&state, &visible))?;
        }
        Command::Ask { query } => {
            dash.select_tab(Tab::Voice);
            dash.voice.ask(&query).await?;
            let state = dash.voice.snapshot();
            emit(json, &state, || render::voice(&state))?;
        }
        Command::Sample { index } => {
            dash.select_tab(Tab::Voice);
            dash.voice.ask_sample(index).await?;
            let state = dash.voice.snapshot();
            emit(json, &state, || render::voice(&state))?;
        }
        Command::Play => {
            dash.select_tab(Tab::Voice);
            if let Some(id) = dash.voice.last_reply_id() {
                dash.voice.play_audio(id).await?;
            }
            let state = dash.voice.snapshot();
            emit(json, &state, || render::voice(&state))?;
        }
        Command::Listen => {
            let listening = dash.header().toggle_voice();
            println!("{} ({})", dash.header().mic_label(), if listening { "listening" } else { "idle" });
        }
        Command::Demo { tab } => demo(dash, tab).await?,
    }
    Ok(())
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce() -> String) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{}", text());
    }
    Ok(())
}

/// Run the diagnosis while printing each progress value as it lands.
async fn analyze_with_progress(panel: &DiagnosisPanel, show: bool) -> Result<(), CliError> {
    let task = tokio::spawn({
        let panel = panel.clone();
        async move { panel.run_analysis().await }
    });

    let mut last = None;
    while !task.is_finished() {
        let state = panel.snapshot();
        if show && state.analyzing && last != Some(state.progress) {
            println!("Analyzing crop image... {}", render::progress_bar(state.progress));
            last = Some(state.progress);
        }
        tokio::time::sleep(PROGRESS_POLL).await;
    }
    task.await??;
    Ok(())
}

async fn demo(dash: &mut Dashboard, only: Option<Tab>) -> Result<(), CliError> {
    println!("Project Kisan: Your AI Agricultural Assistant");
    println!("{}\n", render::headline_stats(Dashboard::headline_stats()));

    for tab in Tab::ALL.into_iter().filter(|t| only.is_none_or(|o| o == *t)) {
        dash.select_tab(tab);
        println!("{}", render::tabs(dash.active_tab()));
        match tab {
            Tab::Diagnosis => demo_diagnosis(&dash.diagnosis).await?,
            Tab::Market => demo_market(&dash.market).await,
            Tab::Schemes => demo_schemes(&dash.schemes),
            Tab::Voice => demo_voice(dash).await?,
        }
    }
    Ok(())
}

async fn demo_diagnosis(panel: &DiagnosisPanel) -> Result<(), CliError> {
    if let Err(e) = panel.run_analysis().await {
        println!("Analyze without a photo: {e}");
    }
    panel.select_image(ImageRef::new("demo-leaf.jpg", "image/jpeg", DEMO_IMAGE));
    analyze_with_progress(panel, true).await?;
    println!("{}", render::diagnosis(&panel.snapshot(), panel.photo_tips()));
    Ok(())
}

async fn demo_market(panel: &MarketPanel) {
    panel.mount().await;
    panel.select_crop(Crop::Onion).await;
    panel.select_market(Market::Hubli).await;
    println!("{}", render::market(&panel.snapshot()));
}

fn demo_schemes(panel: &SchemesPanel) {
    panel.set_search("irrigation");
    println!("{}", render::schemes(&panel.snapshot(), &panel.visible()));
}

async fn demo_voice(dash: &Dashboard) -> Result<(), CliError> {
    dash.header().toggle_voice();
    for index in 0..VoicePanel::sample_queries().len() {
        dash.voice.ask_sample(index).await?;
    }
    dash.voice.set_language(Language::Kn);
    dash.voice.ask_sample(0).await?;
    if let Some(id) = dash.voice.last_reply_id() {
        dash.voice.play_audio(id).await?;
    }
    dash.voice.toggle_listening();
    println!("{}", render::voice(&dash.voice.snapshot()));
    Ok(())
}
