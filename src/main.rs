use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use stylus::config::{ConfigManager, StylusConfig};
use stylus::genetics::{CodonTable, CodonTableDocument, Gene};
use stylus::han::Hcf;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut manager = ConfigManager::new();
    if let Some(path) = std::env::args().nth(1) {
        manager
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration from {}", path))?;
    }
    let config = manager.get();

    let table = load_codon_table(config)?;
    log::info!(
        "Using codon table {}{}",
        table.uuid,
        if table.differs_from_standard() {
            " (modified)"
        } else {
            ""
        }
    );

    for source in &config.han.sources {
        let hcf = Hcf::load(source)
            .with_context(|| format!("Failed to parse HCF {}", source.display()))?;
        println!("{}", serde_json::to_string_pretty(&hcf)?);
    }

    let target = match &config.codon_table.target {
        Some(path) => load_document(path)?,
        None => table.clone(),
    };
    if target.uuid != table.uuid {
        log::info!("Re-encoding genomes into codon table {}", target.uuid);
    }

    let mut rng = match config.codon_table.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for (i, sequence) in config.genome.sequences.iter().enumerate() {
        let gene = Gene::translate(sequence, &table, config.genome.origin())
            .with_context(|| format!("Failed to translate genome sequence {}", i + 1))?;

        for segment in gene.segments() {
            log::info!(
                "Sequence {}: {} {} units over bases {}-{}",
                i + 1,
                if segment.coherent {
                    "coherent"
                } else {
                    "incoherent"
                },
                segment.units,
                segment.bases.first(),
                segment.bases.last()
            );
        }
        println!("{}", serde_json::to_string_pretty(&gene)?);

        let synonym = gene.reencode(&target, &mut rng)?;
        log::debug!("Sequence {} encoded for {}: {}", i + 1, target.uuid, synonym);
    }

    Ok(())
}

fn load_codon_table(config: &StylusConfig) -> anyhow::Result<CodonTable> {
    let table = match &config.codon_table.document {
        Some(path) => load_document(path)?,
        None => CodonTable::standard(),
    };
    table.validate()?;
    Ok(table)
}

fn load_document(path: &Path) -> anyhow::Result<CodonTable> {
    let document = CodonTableDocument::load(path)
        .with_context(|| format!("Failed to read codon table {}", path.display()))?;
    Ok(CodonTable::from_document(&document)?)
}
