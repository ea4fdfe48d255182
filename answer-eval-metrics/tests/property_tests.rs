use answer_eval_core::{Corpus, CorpusScorer};
use answer_eval_metrics::calculators::{brevity_penalty, BleuCalculator, BleuStats, RougeCalculator};
use proptest::prelude::*;

fn sentence(min: usize, max: usize) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        prop::sample::select(vec!["the", "cat", "sat", "on", "mat", "a", "dog"]),
        min..max,
    )
}

fn pairs() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(
        (sentence(0, 10), sentence(1, 10)).prop_map(|(h, r)| (h.join(" "), r.join(" "))),
        1..8,
    )
}

proptest! {
    #[test]
    fn test_identity_scores_one(words in sentence(4, 16)) {
        let text = words.join(" ");
        let bleu = BleuCalculator::default().sentence_bleu(&text, &[text.as_str()]);
        for score in bleu.scores {
            prop_assert!((score - 1.0).abs() < 1e-12);
        }

        let rouge = RougeCalculator::default().score_pair(&text, &[text.as_str()]);
        prop_assert!((rouge - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_split_reduction_matches_whole(items in pairs(), split in 0usize..8) {
        let calculator = BleuCalculator::default();
        let split = split.min(items.len());

        let stats: Vec<BleuStats> = items
            .iter()
            .map(|(h, r)| calculator.pair_stats(h, &[r.as_str()]))
            .collect();
        let left: BleuStats = stats[..split].iter().sum();
        let right: BleuStats = stats[split..].iter().sum();
        let mut recombined = left;
        recombined += right;

        let mut corpus = Corpus::new();
        for (i, (h, r)) in items.iter().enumerate() {
            corpus.accumulate(i.to_string(), h.clone(), vec![r.clone()]).unwrap();
        }
        let whole = calculator.compute(corpus).unwrap();
        let split_scores = calculator.score_stats(&recombined).scores;

        for (a, b) in whole.scores.iter().zip(split_scores.iter()) {
            prop_assert!((a - b).abs() <= 1e-12 * a.abs().max(1e-300));
        }
    }

    #[test]
    fn test_scores_are_bounded(items in pairs()) {
        let mut corpus = Corpus::new();
        for (i, (h, r)) in items.iter().enumerate() {
            corpus.accumulate(i.to_string(), h.clone(), vec![r.clone()]).unwrap();
        }

        let bleu = BleuCalculator::default().compute(corpus.clone()).unwrap();
        for score in bleu.scores {
            prop_assert!(score > 0.0 && score <= 1.0 + 1e-12);
        }

        let rouge = RougeCalculator::default().compute(corpus).unwrap();
        prop_assert!((0.0..=1.0 + 1e-12).contains(&rouge.score));
    }

    #[test]
    fn test_matching_reference_never_lowers_rouge(
        hyp in sentence(1, 10),
        reference in sentence(1, 10),
    ) {
        let calculator = RougeCalculator::default();
        let hyp = hyp.join(" ");
        let reference = reference.join(" ");

        let before = calculator.score_pair(&hyp, &[reference.as_str()]);
        let after = calculator.score_pair(&hyp, &[reference.as_str(), hyp.as_str()]);
        prop_assert!(after >= before);
    }

    #[test]
    fn test_prefix_never_beats_full_reference(words in sentence(2, 12), cut in 1usize..12) {
        let calculator = BleuCalculator::default();
        let reference = words.join(" ");
        let cut = cut.min(words.len() - 1);
        let prefix = words[..cut].join(" ");

        let full = calculator.sentence_bleu(&reference, &[reference.as_str()]);
        let truncated = calculator.sentence_bleu(&prefix, &[reference.as_str()]);
        for (p, f) in truncated.scores.iter().zip(full.scores.iter()) {
            prop_assert!(p < f);
        }
    }

    #[test]
    fn test_brevity_penalty_strictly_increases_with_length(reference in 2u64..200, c in 1u64..200) {
        let c = c.min(reference - 1);
        let r = reference as f64;
        prop_assert!(brevity_penalty(c, r) < brevity_penalty(c + 1, r));
        prop_assert!(brevity_penalty(c, r) < 1.0);
        prop_assert_eq!(brevity_penalty(reference, r), 1.0);
    }
}
