//! Sentence classification seam.
//!
//! The keyword matcher is a deliberately simple stand-in for concept
//! extraction. Downstream scoring thresholds were tuned against its output
//! distribution, so a replacement classifier must keep the same contract:
//! one signal per sentence, nothing else.

use once_cell::sync::Lazy;

/// What a sentence contributes to insight extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceSignal {
    /// The sentence gives direct advice
    DirectAdvice,
    /// The sentence states a key point without advising
    KeyPoint,
    /// Nothing actionable
    None,
}

/// Pluggable sentence classifier. Implementations must be deterministic and
/// side-effect free.
pub trait Classifier: Send + Sync {
    fn classify(&self, sentence: &str) -> SentenceSignal;
}

static ADVISORY_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "should",
        "must",
        "recommend",
        "need to",
        "ought to",
        "had better",
        "suggest",
        "advise",
    ]
});

/// Default fixed-vocabulary classifier
#[derive(Debug, Default, Clone)]
pub struct KeywordClassifier;

impl Classifier for KeywordClassifier {
    fn classify(&self, sentence: &str) -> SentenceSignal {
        let lower = sentence.to_lowercase();
        if ADVISORY_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
            SentenceSignal::DirectAdvice
        } else {
            SentenceSignal::None
        }
    }
}

/// Split text into sentences on terminal punctuation. A trailing fragment
/// without a terminator still counts as a sentence.
pub fn split_sentences(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    for ch in s.chars() {
        if ch == '.' || ch == '!' || ch == '?' || ch == ';' {
            if !cur.trim().is_empty() {
                out.push(cur.trim().to_string());
            }
            cur.clear();
        } else {
            cur.push(ch);
        }
    }
    if !cur.trim().is_empty() {
        out.push(cur.trim().to_string());
    }
    out
}
