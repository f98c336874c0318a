use rpb_core::project::{Category, ConfigDocument, Platform};
use rpb_core::{TOOL_NAME, VERSION};
use std::env;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("{} v{}", TOOL_NAME, VERSION);
        println!("Usage: dump_project <file.rpc> [--json]");
        return Ok(());
    }

    let path = &args[1];
    let document = ConfigDocument::load(path)?;

    if args.iter().any(|a| a == "--json") {
        println!("{}", document.to_json()?);
        return Ok(());
    }

    println!("Project: {}", path);
    println!("Entries: {}", document.len());

    for category in Category::ALL.into_iter().chain([Category::Unknown]) {
        let entries: Vec<_> = document.by_category(category).collect();
        if entries.is_empty() {
            continue;
        }

        println!("\n{}:", category.label());
        for entry in entries {
            let value = if entry.entry_type.is_numeric() {
                entry.value().to_string()
            } else {
                format!("\"{}\"", entry.text())
            };
            let scope = match entry.platform {
                Platform::Any => String::new(),
                platform => format!(" [{}]", platform.label()),
            };
            println!(
                "  - {}{}: {:?} = {}",
                entry.name, scope, entry.entry_type, value
            );
        }
    }

    Ok(())
}
