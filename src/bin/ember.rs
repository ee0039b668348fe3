use std::{collections::BTreeMap, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ember", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build the entrance groups of a page and print them as JSON.
    Inspect(InspectArgs),
    /// Run a page on a virtual clock and print the final element states as JSON.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Input page JSON.
    #[arg(long)]
    page: PathBuf,

    /// Settings patch JSON merged over the defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra animation pack JSON registered after the built-ins.
    #[arg(long)]
    animations: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    #[command(flatten)]
    page: PageArgs,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[command(flatten)]
    page: PageArgs,

    /// Virtual time to run for, in milliseconds.
    #[arg(long, default_value_t = 5_000)]
    until_ms: u64,

    /// Frame step in milliseconds.
    #[arg(long, default_value_t = 16)]
    step_ms: u64,
}

#[derive(serde::Serialize)]
struct NodeReport {
    node: usize,
    tag: String,
    classes: Vec<String>,
    style: ember_entrance::StyleState,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Inspect(args) => cmd_inspect(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn load(args: &PageArgs) -> anyhow::Result<(ember_entrance::Ember, ember_entrance::Page)> {
    let page = ember_entrance::Page::from_path(&args.page)
        .with_context(|| format!("load page '{}'", args.page.display()))?;
    let document = page.build_document().with_context(|| "build page document")?;

    let mut ember = ember_entrance::Ember::new(document, page.viewport);
    if let Some(path) = &args.config {
        let patch = ember_entrance::SettingsPatch::from_path(path)
            .with_context(|| format!("load settings '{}'", path.display()))?;
        ember.set_defaults(patch);
    }

    let mut issues = ember.register_builtin_animations();
    if let Some(path) = &args.animations {
        let defs = ember_entrance::load_animation_pack(path)
            .with_context(|| format!("load animation pack '{}'", path.display()))?;
        issues.extend(ember.register_animations(ember_entrance::ENTRANCE_ROLE, defs));
    }
    for issue in &issues {
        eprintln!("warning: {issue}");
    }

    Ok((ember, page))
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let (mut ember, _) = load(&args.page)?;
    ember.init()?;

    let out = serde_json::to_string_pretty(ember.groups()).with_context(|| "serialize groups")?;
    println!("{out}");
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let (mut ember, page) = load(&args.page)?;
    ember.init()?;

    let step = args.step_ms.max(1);
    let mut scroll = page.scroll_steps().into_iter().peekable();
    while ember.now_ms() < args.until_ms {
        while let Some(s) = scroll.next_if(|s| s.at_ms <= ember.now_ms()) {
            ember.scroll_to(s.y)?;
        }
        let next_stop = scroll
            .peek()
            .map_or(args.until_ms, |s| s.at_ms.min(args.until_ms));
        let dt = step.min(next_stop.saturating_sub(ember.now_ms())).max(1);
        ember.advance(dt)?;
    }

    let doc = ember.document();
    let mut report = BTreeMap::new();
    for group in ember.groups() {
        for element in &group.elements {
            for node in std::iter::once(element.node).chain(doc.descendants(element.node)) {
                let (Some(tag), Some(data)) = (doc.tag(node), doc.element(node)) else {
                    continue;
                };
                report.insert(
                    node.index(),
                    NodeReport {
                        node: node.index(),
                        tag: tag.to_string(),
                        classes: data.classes.clone(),
                        style: data.style.clone(),
                    },
                );
            }
        }
    }

    let out = serde_json::to_string_pretty(&serde_json::json!({
        "now_ms": ember.now_ms(),
        "completed_elements": ember.completed_elements(),
        "nodes": report.into_values().collect::<Vec<_>>(),
    }))
    .with_context(|| "serialize simulation report")?;
    println!("{out}");
    Ok(())
}
