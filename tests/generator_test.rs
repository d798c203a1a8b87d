use mortcalc::domain::loan::LoanRequest;
use mortcalc::interfaces::csv::loan_reader::LoanReader;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;

mod common;

#[test]
fn test_generate_loans_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("generated.csv");
    common::generate_loans_csv(&path, 5).expect("Failed to generate CSV");

    let content = std::fs::read_to_string(&path).expect("Failed to read file");
    // Header + 5 rows = 6 lines
    assert_eq!(content.lines().count(), 6);

    let loans: Vec<LoanRequest> = LoanReader::new(File::open(&path).unwrap())
        .loans()
        .collect::<Result<_, _>>()
        .expect("Generated rows should parse");
    assert_eq!(loans.len(), 5);
    assert!(loans.iter().all(|loan| loan.interest_rate.is_some()));
    assert!(loans.iter().all(|loan| loan.term_years >= 5.0));
}

#[test]
fn test_random_loans_are_realistic() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..1_000 {
        let loan = common::random_loan(&mut rng);
        assert!(loan.adjusted_loan_amount() > 0.0);
        assert!(loan.annual_interest_rate_percent >= 0.0);
        assert!(loan.term_years >= 1.0 && loan.term_years.fract() == 0.0);
    }
}
