//! Library API tests for the scorer

use std::sync::Arc;
use std::thread;

use sentimeter::classifier::{classify, LabelThresholds};
use sentimeter::lexicon::Lexicon;
use sentimeter::models::Label;
use sentimeter::scoring::SentimentScorer;

fn scorer() -> SentimentScorer {
    SentimentScorer::new(Arc::new(Lexicon::bundled().unwrap()))
}

#[test]
fn test_reference_sentences() {
    let s = scorer();
    let cases = [
        ("The service was absolutely terrible and slow.", Label::Negative),
        ("I love this product, it works great!", Label::Positive),
        ("The package arrived on Tuesday.", Label::Neutral),
        ("The food was good but the service was terrible", Label::Negative),
        ("Not bad at all", Label::Positive),
        ("I don't love it", Label::Negative),
    ];
    for (text, expected) in cases {
        let analysis = s.analyze(text);
        assert_eq!(analysis.sentiment, expected, "{text}: {:?}", analysis.scores);
        assert_eq!(classify(analysis.scores.compound), expected);
    }
}

#[test]
fn test_shared_scorer_across_threads() {
    let s = scorer();
    let expected = s.score("What a wonderful, friendly place!!");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let s = s.clone();
            thread::spawn(move || s.score("What a wonderful, friendly place!!"))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn test_full_lexicon_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vader_lexicon.txt");
    std::fs::write(
        &path,
        "$:\t-1.5\t0.80623\t[-1, -1, -1, -1, -3, -1, -3, -1, -2, -1]\n\
         good\t1.9\t0.9434\t[2, 1, 1, 3, 2, 4, 2, 2, 1, 1]\n\
         \n\
         horrible\t-2.5\t0.92195\t[-3, -2, -2, -1, -3, -4, -3, -1, -3, -3]\n",
    )
    .unwrap();

    let lexicon = Lexicon::load(&path).unwrap();
    assert_eq!(lexicon.len(), 3);
    let s = SentimentScorer::new(Arc::new(lexicon)).with_thresholds(LabelThresholds::default());
    assert_eq!(s.analyze("good").sentiment, Label::Positive);
    assert_eq!(s.analyze("horrible").sentiment, Label::Negative);
    assert_eq!(s.analyze("love").sentiment, Label::Neutral);
}
