use answer_eval_core::TokenizerConfig;

/// Splits text into word tokens according to a [`TokenizerConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    config: TokenizerConfig,
}

impl Tokenizer {
    pub fn new(config: TokenizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> TokenizerConfig {
        self.config
    }

    /// Whitespace-split `text`, applying case folding and punctuation
    /// stripping as configured. Tokens left empty after stripping are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .filter_map(|word| {
                let word = if self.config.strip_punctuation {
                    word.chars().filter(|c| c.is_alphanumeric()).collect()
                } else {
                    word.to_string()
                };

                if word.is_empty() {
                    None
                } else if self.config.lowercase {
                    Some(word.to_lowercase())
                } else {
                    Some(word)
                }
            })
            .collect()
    }
}
