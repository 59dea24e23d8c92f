use proptest::prelude::*;
use rapid_summary::{
    build_similarity, rank, split_sentences, summarize, ExtractiveSummarizer, SentenceSplitter,
    SummaryOutcome,
};

const WORDS: &[&str] = &[
    "rust", "cargo", "compiler", "borrow", "tulip", "basil", "kernel", "garden", "thread",
    "lifetime", "orchard", "violin",
];

fn sentence() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(WORDS), 1..6),
        prop::sample::select(vec![".", "!", "?"]),
    )
        .prop_map(|(words, end)| format!("{}{}", words.join(" "), end))
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(sentence(), 1..12).prop_map(|s| s.join(" "))
}

proptest! {
    #[test]
    fn non_blank_text_gives_non_empty_summary(s in ".{0,200}", n in 1usize..5) {
        let summary = summarize(&s, n);
        if s.trim().is_empty() {
            prop_assert_eq!(summary, "");
        } else {
            prop_assert!(!summary.is_empty());
        }
    }

    #[test]
    fn selected_sentences_come_from_input(s in ".{0,200}", n in 1usize..5) {
        let summary = ExtractiveSummarizer::default().summarize_detailed(&s, n);
        for selected in &summary.sentences {
            prop_assert!(s.contains(selected.sentence.text.as_str()));
            prop_assert_eq!(&s[selected.sentence.start..selected.sentence.end], selected.sentence.text.as_str());
        }
    }

    #[test]
    fn short_documents_are_returned_unchanged(doc in document(), extra in 0usize..3) {
        let count = split_sentences(&doc).len();
        let summary = summarize(&doc, count + extra);
        prop_assert_eq!(summary, doc);
    }

    #[test]
    fn long_documents_give_exactly_n_sentences_in_order(doc in document(), n in 1usize..6) {
        let sentences = split_sentences(&doc);
        prop_assume!(sentences.len() > n);

        let summary = ExtractiveSummarizer::default().summarize_detailed(&doc, n);
        prop_assert_eq!(summary.outcome, SummaryOutcome::Ranked);
        prop_assert_eq!(summary.len(), n);

        let indices: Vec<usize> = summary.sentences.iter().map(|s| s.sentence.index).collect();
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for selected in &summary.sentences {
            prop_assert_eq!(&selected.sentence.text, &sentences[selected.sentence.index]);
        }

        let joined: Vec<&str> = summary.sentences.iter().map(|s| s.sentence.text.as_str()).collect();
        prop_assert_eq!(summary.text, joined.join("\n"));
    }

    #[test]
    fn summarize_is_deterministic(doc in document(), n in 1usize..6) {
        prop_assert_eq!(summarize(&doc, n), summarize(&doc, n));
    }

    #[test]
    fn score_map_sums_to_one(doc in document()) {
        let sentences = SentenceSplitter::new().split(&doc);
        let scores = rank(&build_similarity(&sentences));

        prop_assert_eq!(scores.len(), sentences.len());
        prop_assert!((scores.total() - 1.0).abs() < 1e-9);
        prop_assert!(scores.iter().all(|(_, s)| s >= 0.0));
    }
}
