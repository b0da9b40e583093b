use rand::rngs::StdRng;
use rand::SeedableRng;
use stylus::genetics::{CodonTable, Gene, Vector};
use stylus::geometry::{Point, Range};

// Nos Nos Nos | Sos | Nos Eas Eas Eas
const MIXED: &str = "ATGCTTCTTCTTCAACTTGCTGCTGCTTAA";

#[test]
fn test_segments_alternate_and_tile_the_coding_region() {
    let table = CodonTable::standard();
    let gene = Gene::translate(MIXED, &table, Point::default()).unwrap();

    assert_eq!(gene.coherence(), &[0, 1, 1, 1, 0, 1, 2, 2, 1, 0]);

    let segments = gene.segments();
    assert_eq!(segments.len(), 3);
    assert_eq!(
        segments.iter().map(|s| s.coherent).collect::<Vec<_>>(),
        vec![true, false, true]
    );
    assert_eq!(segments[0].bases, Range::new(4, 12).unwrap());
    assert_eq!(segments[1].bases, Range::new(13, 15).unwrap());
    assert_eq!(segments[2].bases, Range::new(16, 27).unwrap());

    // Contiguous from the first base after the start codon to the last before the stop
    for pair in segments.windows(2) {
        assert_eq!(pair[0].bases.last() + 1, pair[1].bases.first());
        assert_ne!(pair[0].coherent, pair[1].coherent);
    }
    assert_eq!(segments[0].bases.first(), 4);
    assert_eq!(segments[2].bases.last(), MIXED.len() - 3);

    let units: f64 = segments.iter().map(|s| s.units).sum();
    assert_eq!(units, gene.units());
    assert_eq!(gene.units(), 8.0);
}

#[test]
fn test_points_follow_vectors() {
    let table = CodonTable::standard();
    let gene = Gene::translate(MIXED, &table, Point::new(10.0, 10.0)).unwrap();

    assert_eq!(gene.points().len(), gene.acids().len());
    assert_eq!(gene.points()[4], Point::new(10.0, 12.0));
    assert_eq!(gene.points()[8], Point::new(13.0, 13.0));

    for i in 1..gene.acids().len() - 1 {
        let line = gene.line(i).unwrap();
        assert_eq!(line.direction(), gene.acids()[i].direction());
    }

    let last = &gene.segments()[2];
    let points = gene.segment_points(last);
    assert_eq!(points.len(), last.acid_count() + 1);
    assert_eq!(points[0], Point::new(10.0, 12.0));
}

#[test]
fn test_translation_follows_the_table() {
    let mut table = CodonTable::standard();
    table.remap("CTT", "Eas").unwrap();

    let gene = Gene::translate("ATGCTTCTTCTTTAA", &table, Point::default()).unwrap();
    assert_eq!(&gene.acids()[1..4], &[Vector::EastShort; 3]);
    assert_eq!(gene.points()[3], Point::new(3.0, 0.0));
}

#[test]
fn test_reencoding_is_reproducible_with_a_seed() {
    let table = CodonTable::standard();
    let gene = Gene::translate(MIXED, &table, Point::default()).unwrap();

    let first = gene.reencode(&table, &mut StdRng::seed_from_u64(5)).unwrap();
    let second = gene.reencode(&table, &mut StdRng::seed_from_u64(5)).unwrap();
    assert_eq!(first, second);

    let again = Gene::translate(&first, &table, Point::default()).unwrap();
    assert_eq!(again.acids(), gene.acids());
    assert_eq!(again.segments(), gene.segments());
}

#[test]
fn test_reencode_into_a_target_table() {
    let source = CodonTable::standard();
    let gene = Gene::translate(MIXED, &source, Point::default()).unwrap();

    // Swap the Nos and Eas buckets, keeping both non-empty throughout
    let mut target = CodonTable::create("stylus-test", &mut StdRng::seed_from_u64(5));
    for (codon, vector) in [
        ("GCT", "Nos"),
        ("CTT", "Eas"),
        ("CTC", "Eas"),
        ("CTA", "Eas"),
        ("CTG", "Eas"),
        ("GCC", "Nos"),
        ("GCA", "Nos"),
        ("GCG", "Nos"),
    ] {
        target.remap(codon, vector).unwrap();
    }
    target.validate().unwrap();

    let mut rng = StdRng::seed_from_u64(11);
    let bases = gene.reencode(&target, &mut rng).unwrap();
    assert_eq!(bases.len(), MIXED.len());

    let in_target = Gene::translate(&bases, &target, Point::default()).unwrap();
    assert_eq!(in_target.acids(), gene.acids());

    let swapped: Vec<Vector> = gene
        .acids()
        .iter()
        .map(|v| match v {
            Vector::NorthShort => Vector::EastShort,
            Vector::EastShort => Vector::NorthShort,
            other => *other,
        })
        .collect();
    let in_source = Gene::translate(&bases, &source, Point::default()).unwrap();
    assert_eq!(in_source.acids(), swapped.as_slice());
}
