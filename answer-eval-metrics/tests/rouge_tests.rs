use answer_eval_core::{Corpus, CorpusScorer};
use answer_eval_metrics::calculators::{f_measure, RougeCalculator};
use answer_eval_metrics::Tokenizer;
use approx::assert_relative_eq;
use test_case::test_case;

fn tokens(text: &str) -> Vec<String> {
    Tokenizer::default().tokenize(text)
}

#[test]
fn test_rouge_l_identical_text() {
    let calculator = RougeCalculator::default();
    let score = calculator.score_pair("the cat sat on the mat", &["the cat sat on the mat"]);
    assert_relative_eq!(score, 1.0, epsilon = 1e-12);
}

#[test]
fn test_rouge_l_partial_overlap() {
    let calculator = RougeCalculator::default();
    let m = calculator.lcs_match(&tokens("a cat was on a mat"), &tokens("the cat sat on the mat"));

    assert_eq!(m.lcs_length, 3);
    assert_relative_eq!(m.precision, 0.5);
    assert_relative_eq!(m.recall, 0.5);
    assert_relative_eq!(m.f_measure, 0.5, epsilon = 1e-12);
}

#[test]
fn test_rouge_l_weights_recall_over_precision() {
    let calculator = RougeCalculator::default();

    // full precision, recall 1/3
    let short = calculator.score_pair("the cat", &["the cat sat on the mat"]);
    // full recall, precision 1/3
    let long = calculator.score_pair("the cat sat on the mat", &["the cat"]);

    assert_relative_eq!(short, (2.44 / 3.0) / (1.0 / 3.0 + 1.44), epsilon = 1e-12);
    assert_relative_eq!(long, (2.44 / 3.0) / (1.0 + 1.44 / 3.0), epsilon = 1e-12);
    assert!(long > short);
}

#[test]
fn test_rouge_l_beta_one_is_harmonic_mean() {
    assert_relative_eq!(f_measure(0.5, 1.0, 1.0), 2.0 / 3.0, epsilon = 1e-12);
    assert_eq!(f_measure(0.0, 0.0, 1.2), 0.0);
}

#[test_case("", &["the cat"] ; "empty hypothesis")]
#[test_case("the cat", &[""] ; "empty reference")]
#[test_case("", &[""] ; "both empty")]
#[test_case("hello world", &["goodbye universe"] ; "no overlap")]
fn test_rouge_l_degenerate_inputs_score_zero(hypothesis: &str, references: &[&str]) {
    let calculator = RougeCalculator::default();
    assert_eq!(calculator.score_pair(hypothesis, references), 0.0);
}

#[test]
fn test_rouge_l_takes_best_reference() {
    let calculator = RougeCalculator::default();
    let hypothesis = "the cat sat on the mat";

    let single = calculator.score_pair(hypothesis, &["a dog lay on a rug"]);
    let with_match = calculator.score_pair(hypothesis, &["a dog lay on a rug", hypothesis]);

    assert!(with_match >= single);
    assert_relative_eq!(with_match, 1.0, epsilon = 1e-12);
}

#[test]
fn test_rouge_l_non_contiguous_subsequence() {
    let calculator = RougeCalculator::default();
    let m = calculator.lcs_match(&tokens("a x b y c"), &tokens("a b c"));

    assert_eq!(m.lcs_length, 3);
    assert_relative_eq!(m.recall, 1.0);
    assert_relative_eq!(m.precision, 0.6);
}

#[test]
fn test_rouge_l_corpus_mean_and_items() {
    let calculator = RougeCalculator::default();
    let mut corpus = Corpus::new();
    corpus
        .accumulate("a", "the cat sat on the mat", vec!["the cat sat on the mat".to_string()])
        .unwrap();
    corpus
        .accumulate("b", "a cat was on a mat", vec!["the cat sat on the mat".to_string()])
        .unwrap();

    let output = calculator.compute(corpus).unwrap();

    assert_relative_eq!(output.score, 0.75, epsilon = 1e-12);
    assert_eq!(output.item_scores.len(), 2);
    assert_relative_eq!(output.item_scores["a"], 1.0, epsilon = 1e-12);
    assert_relative_eq!(output.item_scores["b"], 0.5, epsilon = 1e-12);
}

#[test]
fn test_rouge_l_empty_corpus() {
    let output = RougeCalculator::default().compute(Corpus::new()).unwrap();
    assert_eq!(output.score, 0.0);
    assert!(output.item_scores.is_empty());
}

#[test]
fn test_rouge_l_is_case_insensitive_by_default() {
    let calculator = RougeCalculator::default();
    assert_relative_eq!(
        calculator.score_pair("The CAT", &["the cat"]),
        1.0,
        epsilon = 1e-12
    );
}
