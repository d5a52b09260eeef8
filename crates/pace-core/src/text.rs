#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub index: usize,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordSequence {
    words: Vec<Word>,
}

pub fn tokenize(text: &str) -> WordSequence {
    let words = text
        .split_whitespace()
        .enumerate()
        .map(|(index, word)| Word {
            index,
            text: word.to_string(),
        })
        .collect();
    WordSequence { words }
}

impl WordSequence {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn last_index(&self) -> usize {
        self.words.len().saturating_sub(1)
    }

    /// Clamps `index` into `[0, len - 1]`; an empty sequence always yields 0.
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }
}

impl<'a> IntoIterator for &'a WordSequence {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(seq: &WordSequence) -> Vec<&str> {
        seq.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn splits_on_whitespace_runs() {
        let seq = tokenize("  the quick\tbrown \n\n fox  ");
        assert_eq!(texts(&seq), vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn indices_follow_order() {
        let seq = tokenize("a b c");
        let indices: Vec<usize> = seq.iter().map(|w| w.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \t\r\n ").is_empty());
    }

    #[test]
    fn extra_whitespace_between_tokens_is_ignored() {
        let tight = tokenize("one two three");
        let loose = tokenize("one    two\n\n\t three");
        assert_eq!(tight, loose);
    }

    #[test]
    fn no_empty_tokens() {
        let seq = tokenize("x\u{3000}\u{3000}y \u{a0} z");
        assert!(seq.iter().all(|w| !w.text.is_empty()));
    }

    #[test]
    fn clamp_index_handles_empty_and_overflow() {
        assert_eq!(WordSequence::default().clamp_index(7), 0);
        let seq = tokenize("a b c");
        assert_eq!(seq.clamp_index(1), 1);
        assert_eq!(seq.clamp_index(99), 2);
    }
}
