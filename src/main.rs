use anyhow::{Context, Result};
use clap::Parser;
use coffee_set::utils::{logger, validation::Validate};
use coffee_set::{CliConfig, Coffee, InventoryConfig, LinkedSet};

fn main() -> Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting coffee-set demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let mut set = load_inventory(&config)?;
    println!("Inventory holds {} unique coffees:", set.len());
    for coffee in &set {
        println!("  {}", coffee);
    }

    // Membership and removal, branching on the boolean results.
    let snapshot = set.to_vec();
    if let Some(first) = snapshot.first() {
        println!("Contains {}: {}", first.name(), set.contains(first));
    }
    if let Some(second) = snapshot.get(1) {
        let removed = set.remove(second);
        tracing::debug!("remove({}) -> {}", second.name(), removed);
        println!("After removing {} ({} left):", second.name(), set.len());
        for coffee in &set {
            println!("  {}", coffee);
        }
    }
    if let Some(first) = snapshot.first() {
        let added = set.add(first.clone());
        println!("Re-adding {} changed the set: {}", first.name(), added);
    }

    // Sorted and filtered views work on snapshots; the set keeps insertion
    // order internally.
    let mut by_ratio = set.to_vec();
    by_ratio.sort_by(|a, b| {
        a.price_to_volume_ratio()
            .total_cmp(&b.price_to_volume_ratio())
    });
    println!("By price-to-volume ratio:");
    for coffee in &by_ratio {
        println!("  {} (ratio = {:.2})", coffee, coffee.price_to_volume_ratio());
    }

    println!(
        "Quality between {:.1} and {:.1}:",
        config.min_quality, config.max_quality
    );
    for coffee in set
        .iter()
        .filter(|c| c.quality() >= config.min_quality && c.quality() <= config.max_quality)
    {
        println!("  {}", coffee);
    }

    tracing::info!("Demo finished");
    Ok(())
}

fn load_inventory(config: &CliConfig) -> Result<LinkedSet> {
    match &config.inventory {
        Some(path) => {
            tracing::info!("Loading inventory from {}", path);
            let inventory = InventoryConfig::from_file(path)
                .with_context(|| format!("failed to load inventory from {}", path))?;
            inventory.into_set().context("invalid inventory entry")
        }
        None => {
            tracing::info!("No inventory file given, using built-in samples");
            Ok(LinkedSet::from_records([
                Coffee::new("Arabica", 30.0, 85.0, 0.8)?,
                Coffee::new("Robusta", 20.0, 75.0, 0.9)?,
                Coffee::new("Liberica", 25.0, 80.0, 0.85)?,
            ]))
        }
    }
}
