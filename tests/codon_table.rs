use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use stylus::genetics::{codon_to_index, Codon, CodonTable, CodonTableDocument, Vector, STANDARD_UUID};

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("stylus_{}_{}", std::process::id(), name))
}

#[test]
fn test_every_codon_maps_into_a_consistent_bucket() {
    let table = CodonTable::standard();
    let mut seen = HashSet::new();

    for codon in Codon::all() {
        let vector = table.vector_for(codon);
        assert!(table.codons_for(vector).contains(&codon), "{} missing from {}", codon, vector);
    }
    for vector in Vector::ALL {
        assert!(!table.codons_for(vector).is_empty(), "{} is empty", vector);
        for codon in table.codons_for(vector) {
            assert!(seen.insert(*codon), "{} listed twice", codon);
        }
    }
    assert_eq!(seen.len(), 64);
}

#[test]
fn test_canonical_lookups() {
    let table = CodonTable::standard();
    assert_eq!(codon_to_index("ATG").unwrap(), 35);
    assert_eq!(table.vector_at(35), Some(Vector::NortheastMedium));
    assert_eq!(table.vector_name("TAA").unwrap(), "STP");
    assert_eq!(table.vector_name("GGG").unwrap(), "Wes");
    assert_eq!(table.vector_name("TTT").unwrap(), "Nol");
    assert_eq!(table.uuid, STANDARD_UUID);
}

#[test]
fn test_validate_holds_across_bucket_preserving_remaps() {
    let mut table = CodonTable::standard();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..500 {
        let codon = Codon::from_index(rng.gen_range(0..64)).unwrap();
        let target = Vector::ALL[rng.gen_range(0..Vector::ALL.len())];

        // Leave every bucket with at least one codon
        if table.codons_for(table.vector_for(codon)).len() == 1 {
            continue;
        }

        table.remap(codon.as_str(), target.name()).unwrap();
        assert_eq!(table.vector_for(codon), target);
        assert!(table.codons_for(target).contains(&codon));
        assert!(table.validate().is_ok());

        let total: usize = Vector::ALL.iter().map(|v| table.codons_for(*v).len()).sum();
        assert_eq!(total, 64);
    }
    assert!(table.differs_from_standard());
}

#[test]
fn test_entries_rebuild_an_identical_table() {
    let mut source = CodonTable::standard();
    source.remap("CTT", "Eal").unwrap();
    source.remap("GGA", "Nom").unwrap();
    source.remap("AAT", "Sws").unwrap();

    let mut rebuilt = CodonTable::standard();
    for (codon, vector) in source.entries() {
        rebuilt.remap(codon.as_str(), vector).unwrap();
    }

    assert_eq!(rebuilt.entries(), source.entries());
    assert!(rebuilt.validate().is_ok());
}

#[test]
fn test_sampling_reaches_every_synonym() {
    let table = CodonTable::standard();
    let mut rng = StdRng::seed_from_u64(99);

    for vector in Vector::ALL {
        let bucket = table.codons_for(vector);
        let drawn: HashSet<Codon> = (0..200)
            .map(|_| table.sample_codon(vector, &mut rng).unwrap())
            .collect();
        assert_eq!(drawn.len(), bucket.len(), "{}", vector);
        assert!(drawn.iter().all(|c| bucket.contains(c)));
    }
}

#[test]
fn test_document_files_round_trip() {
    let mut table = CodonTable::standard();
    table.remap("CTT", "Eal").unwrap();
    table.uuid = "6B1C7A2E-0D43-4A8B-9E0F-1234567890AB".to_string();
    table.author = Some("stylus tests".to_string());

    for name in ["table.json", "table.toml"] {
        let path = temp_path(name);
        table.to_document().save(&path).unwrap();

        let document = CodonTableDocument::load(&path).unwrap();
        let loaded = CodonTable::from_document(&document).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.entries(), table.entries());
        assert_eq!(loaded.uuid, table.uuid);
        assert_eq!(loaded.author, table.author);
        assert!(!loaded.is_standard());
    }
}
