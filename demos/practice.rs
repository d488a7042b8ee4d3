use std::path::PathBuf;

use practice_rs::{BigramScorer, PracticeAttempt, ScoringPolicy, WordItem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let reference = args
        .next()
        .unwrap_or_else(|| "I would like a cup of tea.".to_string());
    let mut transcripts: Vec<String> = args.collect();
    if transcripts.is_empty() {
        transcripts = vec![
            "I".to_string(),
            "I would".to_string(),
            "I would like a cup".to_string(),
            "I would like a cup of tea".to_string(),
        ];
    }

    let policy = match std::env::var_os("PRACTICE_POLICY") {
        Some(path) => ScoringPolicy::from_json_file(&PathBuf::from(path))?,
        None => ScoringPolicy::default(),
    };

    let word = WordItem::new("demo", "demo", "demo").with_example(reference);
    let mut attempt = PracticeAttempt::new(&word, BigramScorer::new(), policy)?;
    println!("Reference: {:?}", attempt.reference());

    for transcript in &transcripts {
        let assessment = attempt.update(transcript);
        println!(
            "{:>3}  {:<9}  {}{}",
            assessment.score,
            format!("{:?}", assessment.tier).to_lowercase(),
            transcript,
            if assessment.reveal { "  (revealed)" } else { "" }
        );
    }

    println!("Best score: {}", attempt.best_score());
    Ok(())
}
