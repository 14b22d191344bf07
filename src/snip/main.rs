use clap::Parser;
use colored::Colorize;
use log::debug;
use snip::api::{CmdMessage, MessageLevel, SnipApi};
use snip::config::{SnipConfig, StoreBackend};
use snip::editor::capture_content;
use snip::error::{Result, SnipError};
use snip::model::{parse_tag_list, Snippet};
use snip::store::json::JsonStore;
use snip::store::sqlite::SqliteStore;
use snip::store::SnippetStore;
use snip::tags::OpenAiTagClient;

mod args;
mod logging;

use args::{Cli, Commands};

fn main() {
    // A missing .env is fine; system env still applies
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::setup(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = SnipConfig::resolve(cli.backend.map(Into::into), cli.store)?;
    debug!(
        "using {:?} store at '{}'",
        config.backend,
        config.store_path.display()
    );

    match config.backend {
        StoreBackend::Json => {
            let api = build_api(JsonStore::new(&config.store_path), &config)?;
            dispatch(api, &config, cli.command)
        }
        StoreBackend::Sqlite => {
            let api = build_api(SqliteStore::open(&config.store_path)?, &config)?;
            dispatch(api, &config, cli.command)
        }
    }
}

fn build_api<S: SnippetStore>(store: S, config: &SnipConfig) -> Result<SnipApi<S>> {
    let api = SnipApi::new(store);
    match &config.tag_api {
        Some(tag_config) => {
            let client = OpenAiTagClient::new(tag_config.clone())?;
            Ok(api.with_suggester(Box::new(client)))
        }
        None => Ok(api),
    }
}

fn dispatch<S: SnippetStore>(
    mut api: SnipApi<S>,
    config: &SnipConfig,
    command: Commands,
) -> Result<()> {
    match command {
        Commands::Add {
            name,
            language,
            tags,
            content,
        } => handle_add(&mut api, config, name, language, tags, content),
        Commands::List => handle_list(&api),
        Commands::Search { query } => handle_search(&api, query),
    }
}

fn handle_add<S: SnippetStore>(
    api: &mut SnipApi<S>,
    config: &SnipConfig,
    name: String,
    language: Option<String>,
    tags: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let content = match content {
        Some(content) => content,
        None => capture_content(config.editor.as_deref())?,
    };
    let user_tags = parse_tag_list(&tags.unwrap_or_default());

    let result = api.add_snippet(name, language.unwrap_or_default(), user_tags, content)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list<S: SnippetStore>(api: &SnipApi<S>) -> Result<()> {
    let result = api.list_snippets()?;
    print_snippets(&result.snippets, "No snippets found.");
    print_messages(&result.messages);
    Ok(())
}

fn handle_search<S: SnippetStore>(api: &SnipApi<S>, query: String) -> Result<()> {
    if query.trim().is_empty() {
        return Err(SnipError::Usage(
            "Please provide a non-empty search query".into(),
        ));
    }

    let result = api.search_snippets(&query)?;
    print_snippets(&result.snippets, "No snippets matched your query.");
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_snippets(snippets: &[Snippet], empty_message: &str) {
    if snippets.is_empty() {
        println!("{}", empty_message);
        return;
    }

    for (i, snippet) in snippets.iter().enumerate() {
        let language = if snippet.language.is_empty() {
            String::new()
        } else {
            format!(" ({})", snippet.language)
        };
        let tags = if snippet.tags.is_empty() {
            String::new()
        } else {
            format!(" - Tags: {}", snippet.tags.join(", "))
        };
        println!(
            "{} {}{}{}",
            format!("[{}]", i + 1).dimmed(),
            snippet.name.bold(),
            language.cyan(),
            tags.dimmed()
        );
    }
}
