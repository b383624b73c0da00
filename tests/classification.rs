use newswire_core::classify::{Classifier, KeywordClassifier, KeywordRule, KeywordTable};
use newswire_core::types::Category;

#[test]
fn scenario_digital_health_article() {
    let classifier = KeywordClassifier::default();

    let title = "New AI-based Health Monitoring System Launched";
    let content = "The ministry launched an AI-powered monitoring system. \
                   The digital health platform includes telemedicine capabilities.";

    assert_eq!(
        classifier.classify(title, content),
        Category::DigitalHealth
    );
}

#[test]
fn no_keyword_matches_is_others() {
    let classifier = KeywordClassifier::default();

    let category = classifier.classify(
        "Budget session concludes",
        "The session closed yesterday with votes on several motions.",
    );

    assert_eq!(category, Category::Others);
}

#[test]
fn single_match_falls_below_confidence_gate() {
    let classifier = KeywordClassifier::default();

    // One distinct keyword, even repeated, scores 1 and falls back.
    let category = classifier.classify(
        "On cancer",
        "Notes on cancer. More notes on cancer. Yet more on cancer.",
    );

    assert_eq!(category, Category::Others);
}

#[test]
fn repeated_keyword_counts_once() {
    let classifier = KeywordClassifier::default();

    // Two distinct keywords clear the gate; repeats of one do not.
    let two_distinct = classifier.classify("Cancer and diabetes screening", "");
    let one_repeated = classifier.classify("Cancer cancer cancer cancer", "");

    assert_eq!(two_distinct, Category::NonCommunicableDiseases);
    assert_eq!(one_repeated, Category::Others);
}

#[test]
fn classification_is_case_insensitive() {
    let classifier = KeywordClassifier::default();

    let category = classifier.classify(
        "VACCINE ROLLOUT",
        "The PHARMACEUTICAL regulator cleared the new VACCINE batch.",
    );

    assert_eq!(category, Category::Pharmaceuticals);
}

#[test]
fn invariant_tie_breaks_by_table_order() {
    let classifier = KeywordClassifier::default();

    // Two NCD keywords and two digital keywords, no other matches.
    // Priority order puts NonCommunicableDiseases first.
    let text = "cancer diabetes telehealth machine learning";
    assert_eq!(
        classifier.classify("", text),
        Category::NonCommunicableDiseases
    );
}

#[test]
fn table_order_is_the_priority_order() {
    // Same tied text, reversed table: the digital rule now wins.
    let table = KeywordTable::new(vec![
        KeywordRule::new(Category::DigitalHealth, &["telehealth", "machine learning"]),
        KeywordRule::new(Category::NonCommunicableDiseases, &["cancer", "diabetes"]),
    ]);
    let classifier = KeywordClassifier::new(table, 1);

    let text = "cancer diabetes telehealth machine learning";
    assert_eq!(classifier.classify("", text), Category::DigitalHealth);
}

#[test]
fn invariant_classification_determinism() {
    let classifier = KeywordClassifier::default();

    let title = "India Achieves Record Pharmaceutical Exports";
    let content = "Pharmaceutical exports reached a record high. Generic medicines \
                   account for most of the export value, followed by vaccines.";

    let first = classifier.classify(title, content);
    for _ in 0..10 {
        assert_eq!(classifier.classify(title, content), first);
    }
    assert_eq!(first, Category::Pharmaceuticals);
}

#[test]
fn title_and_content_both_contribute() {
    let classifier = KeywordClassifier::default();

    // One keyword in the title, one in the content.
    let category = classifier.classify(
        "Medical device imports",
        "New diagnostic rules take effect next month.",
    );

    assert_eq!(category, Category::MedicalTechnologies);
}
