pub trait Summarizer {
    /// Derive a short summary from free text. Total function: arbitrary
    /// input, no failure modes.
    fn summarize(&self, content: &str) -> String;
}

/// Extractive lead summarizer: the first `sentences` sentences, bounded
/// to `max_chars` characters.
///
/// Sentences end at `.`, `!`, or `?` followed by whitespace. A summary
/// longer than `max_chars` is cut to `max_chars - 3` characters with
/// `...` appended, so the truncated length is exactly `max_chars`.
/// Bounds are in characters, not bytes.
pub struct LeadSummarizer {
    sentences: usize,
    max_chars: usize,
}

impl Default for LeadSummarizer {
    fn default() -> Self {
        Self {
            sentences: 2,
            max_chars: 200,
        }
    }
}

impl LeadSummarizer {
    pub fn new(sentences: usize, max_chars: usize) -> Self {
        debug_assert!(max_chars > 3, "max_chars must leave room for the ellipsis");
        Self {
            sentences,
            max_chars,
        }
    }
}

impl Summarizer for LeadSummarizer {
    fn summarize(&self, content: &str) -> String {
        let text = content.trim();
        if text.is_empty() {
            return String::new();
        }

        let lead = lead_sentences(text, self.sentences).join(" ");

        if lead.chars().count() > self.max_chars {
            let mut cut: String = lead.chars().take(self.max_chars - 3).collect();
            cut.push_str("...");
            cut
        } else {
            lead
        }
    }
}

/// Split off the first `n` sentences, each trimmed of the inter-sentence
/// whitespace. Text without a terminator is a single sentence.
fn lead_sentences(text: &str, n: usize) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        let at_boundary = matches!(ch, '.' | '!' | '?')
            && chars.peek().is_some_and(|&(_, next)| next.is_whitespace());
        if at_boundary {
            let end = idx + ch.len_utf8();
            sentences.push(text[start..end].trim_start());
            start = end;
            if sentences.len() == n {
                return sentences;
            }
        }
    }

    let tail = text[start..].trim_start();
    if !tail.is_empty() {
        sentences.push(tail);
    }
    sentences
}
