use clap::Parser;
use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use amparo_chat::{ChatSession, Responder, RuleTable, SUGGESTIONS};
use amparo_content::{professionals, Catalog, CVV_PHONE_NUMBER};
use amparo_core::mood::{Mood, MoodEntry};
use amparo_core::trend::{aggregate_windowed, MoodTrend};
use amparo_core::{AmparoConfig, MOOD_LOG_KEY};
use amparo_store::{HistoryStore, InsertOrder, SqliteStorage};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(short, long, default_value = "amparo.toml")]
    config: String,

    /// Path to the history database (overrides config)
    #[arg(short, long)]
    db: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = AmparoConfig::load_or_default(&args.config);
    if let Some(db) = args.db {
        config.storage.db_path = db;
    }

    info!("Opening history database at {}...", config.storage.db_path);
    let storage = Arc::new(SqliteStorage::new(&config.storage.db_path).await?);

    let catalog = Catalog::builtin();
    let responder = Responder::new(RuleTable::builtin());
    let typing_delay = Duration::from_millis(config.chat.typing_delay_ms);

    let mut session = ChatSession::open(storage.clone(), responder, typing_delay).await;
    let mut mood_log: HistoryStore<MoodEntry> =
        HistoryStore::new(storage, MOOD_LOG_KEY, InsertOrder::Prepend);
    mood_log.load().await;

    println!("Amparo — sua companheira de bem-estar. Digite /ajuda para ver os comandos.");
    println!("Precisa de ajuda urgente? Ligue {} (CVV)\n", CVV_PHONE_NUMBER);
    for message in session.messages() {
        let who = if message.is_user { "Você" } else { "Amparo" };
        println!("{}: {}", who, message.text);
    }
    println!("\nSugestões: {}\n", SUGGESTIONS.join(" | "));

    print!("> ");
    io::stdout().flush()?;

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();

        if trimmed == "quit" || trimmed == "exit" {
            break;
        }

        if trimmed.is_empty() {
            print!("> ");
            io::stdout().flush()?;
            continue;
        }

        if let Some(command) = trimmed.strip_prefix('/') {
            handle_command(command, &catalog, &mut mood_log, config.trend.window).await;
        } else {
            println!("Amparo está digitando...");
            match session.send(trimmed).await {
                Ok(Some(exchange)) => println!("\nAmparo: {}\n", exchange.bot.text),
                Ok(None) => {}
                Err(e) => tracing::error!("Failed to record message: {}", e),
            }
        }

        print!("> ");
        io::stdout().flush()?;
    }

    Ok(())
}

async fn handle_command(
    command: &str,
    catalog: &Catalog,
    mood_log: &mut HistoryStore<MoodEntry>,
    trend_window: usize,
) {
    let mut parts = command.splitn(2, ' ');
    let name = parts.next().unwrap_or("");
    let arg = parts.next().map(str::trim).unwrap_or("");

    match name {
        "ajuda" => print_help(),
        "humor" => record_mood(arg, catalog, mood_log).await,
        "tendencia" => print_trend(mood_log.entries(), trend_window),
        "conteudo" => {
            if arg.is_empty() {
                list_catalog(catalog);
            } else {
                show_content(catalog, arg);
            }
        }
        "profissionais" => list_professionals(),
        other => println!("Comando desconhecido: /{other}. Digite /ajuda."),
    }
}

fn print_help() {
    println!("Comandos:");
    println!("  /humor <Feliz|Neutro|Triste|Irritado|Relaxado>  registra seu humor");
    println!("  /tendencia                                      evolução do humor");
    println!("  /conteudo [id]                                  recursos de bem-estar");
    println!("  /profissionais                                  diretório de psicólogos");
    println!("  quit                                            sair");
    println!();
    println!("Precisa de ajuda urgente? Ligue {} (CVV)", CVV_PHONE_NUMBER);
}

async fn record_mood(label: &str, catalog: &Catalog, mood_log: &mut HistoryStore<MoodEntry>) {
    let mood = Mood::ALL
        .iter()
        .copied()
        .find(|m| m.label().eq_ignore_ascii_case(label));

    let Some(mood) = mood else {
        let options: Vec<&str> = Mood::ALL.iter().map(|m| m.label()).collect();
        println!("Humor desconhecido: {:?}. Opções: {}", label, options.join(", "));
        return;
    };

    if let Err(e) = mood_log.append(MoodEntry::now(mood)).await {
        tracing::error!("Failed to record mood: {}", e);
        return;
    }
    println!("Humor \"{}\" registrado.", mood.label());

    let suggestions = catalog.recommend_for(mood);
    if !suggestions.is_empty() {
        println!("Conteúdos que podem ajudar:");
        for item in suggestions {
            println!("  [{}] {} ({})", item.id, item.title, item.category);
        }
    }
}

fn print_trend(log: &[MoodEntry], window: usize) {
    match aggregate_windowed(log, window) {
        MoodTrend::InsufficientData => {
            println!("Registre pelo menos dois humores para ver seu gráfico de evolução.");
        }
        MoodTrend::Series(points) => {
            println!("Evolução do humor (últimos {} registros):", points.len());
            for point in &points {
                let bar = "█".repeat(point.value as usize);
                println!(
                    "  {} {:>10}  {} {}",
                    point.day_label(),
                    point.timestamp.format("%d/%m/%Y"),
                    bar,
                    point.value
                );
            }
        }
    }
}

fn list_catalog(catalog: &Catalog) {
    println!("Recursos de bem-estar:");
    for item in catalog.items() {
        let duration = item.duration.as_deref().unwrap_or("-");
        println!(
            "  [{}] {} — {} ({}, {})",
            item.id,
            item.title,
            item.category,
            item.kind.icon(),
            duration
        );
    }
}

fn show_content(catalog: &Catalog, id: &str) {
    match catalog.get(id) {
        Some(item) => {
            println!("{} — {}", item.title, item.category);
            if let Some(body) = &item.body {
                println!("\n{}\n", body);
            }
            if let Some(url) = &item.audio_url {
                let duration = item.duration.as_deref().unwrap_or("?");
                println!("Áudio ({}): {}", duration, url);
            }
        }
        None => println!("Conteúdo {:?} não encontrado.", id),
    }
}

fn list_professionals() {
    println!("Profissionais disponíveis para a sessão mensal:");
    for p in professionals() {
        println!("  [{}] {} — {}", p.id, p.name, p.specialty);
    }
}
