use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use action_loaders::app::{AppState, AppStore};
use action_loaders::config::Config;
use action_loaders::loader::{ActionState, LoaderKey, LoaderSelector};
use action_loaders::logging::init_tracing;
use action_loaders::replay::{load_actions, replay, SelectorReport};
use action_loaders::users::{
    user_add_request, user_delete_request, user_list_load_request, UserAction, UserEffects,
    USER_ADD_KEY, USER_DELETE_KEY, USER_LIST_LOAD_KEY,
};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::json;

#[derive(Debug, Parser)]
#[command(
    name = "action-loaders",
    version,
    about = "Track the loading state of dispatched actions"
)]
struct Cli {
    /// Config file (default: the platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the users demo against a simulated backend
    Demo(DemoArgs),
    /// Fold a JSON Lines action log and print the resulting loader states
    Replay(ReplayArgs),
}

#[derive(Debug, Args)]
struct DemoArgs {
    /// Effect delay in milliseconds (overrides demo.effect_delay_ms)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Username to add, may be repeated
    #[arg(long = "add", value_name = "NAME")]
    add: Vec<String>,

    /// User id to delete, may be repeated
    #[arg(long = "delete", value_name = "ID")]
    delete: Vec<u64>,
}

#[derive(Debug, Args)]
struct ReplayArgs {
    /// Action log, one JSON action per line
    file: PathBuf,

    /// Loader keys to evaluate the selectors for
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;
    init_tracing(&config.logging);

    match cli.command {
        Command::Demo(args) => {
            tokio::select! {
                result = run_demo(config, args) => result,
                _ = tokio::signal::ctrl_c() => {
                    eprintln!("Interrupted");
                    Ok(())
                }
            }
        }
        Command::Replay(args) => run_replay(args),
    }
}

async fn run_demo(mut config: Config, args: DemoArgs) -> anyhow::Result<()> {
    if let Some(delay) = args.delay_ms {
        config.demo.effect_delay_ms = delay;
    }
    let timeout = Duration::from_millis(config.store.settle_timeout_ms);

    let store = Arc::new(AppStore::with_capacity(
        AppState::default(),
        config.store.action_capacity,
    ));
    let effects = UserEffects::new(&config.demo).spawn(&store);
    let printer = print_transitions(&store);

    let mut steps: Vec<(UserAction, &str)> = vec![(user_list_load_request(), USER_LIST_LOAD_KEY)];
    steps.extend(args.add.iter().map(|name| (user_add_request(name.as_str()), USER_ADD_KEY)));
    steps.extend(args.delete.iter().map(|id| (user_delete_request(*id), USER_DELETE_KEY)));

    for (action, key) in steps {
        let kind = action.kind.clone();
        store.dispatch(action);
        let outcome = store
            .settle(&LoaderSelector::new([key]), Some(timeout))
            .await
            .with_context(|| format!("waiting for '{}'", kind))?;
        println!("{} => {}", kind, outcome);
    }

    let state = store.state();
    let summary = json!({
        "users": state.users.users(),
        "loaders": state.loaders,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    drop(store);
    printer.await.context("transition printer")?;
    effects.await.context("user effects")?;
    Ok(())
}

/// Print every loader key whose status changes, until the store is dropped.
fn print_transitions(store: &Arc<AppStore>) -> tokio::task::JoinHandle<()> {
    let mut receiver = store.subscribe();
    tokio::spawn(async move {
        let mut last = receiver.borrow_and_update().loaders.clone();
        while receiver.changed().await.is_ok() {
            let loaders = receiver.borrow_and_update().loaders.clone();
            for (key, state) in loaders.changes_since(&last) {
                println!("  {} -> {}", key, state);
            }
            last = loaders;
        }
    })
}

fn run_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let actions = load_actions(&args.file)?;
    let map = replay(&actions);

    let mut output = json!({
        "actions": actions.len(),
        "loaders": map,
    });
    if !args.keys.is_empty() {
        let keys = args.keys.into_iter().map(LoaderKey::from).collect();
        output["selected"] = serde_json::to_value(SelectorReport::new(&map, keys))?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);

    if map.iter().any(|(_, state)| state == ActionState::Loading) {
        tracing::info!("replay ended with operations still loading");
    }
    Ok(())
}
