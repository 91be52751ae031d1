//! Whitespace-and-punctuation word tokenizer.

/// A piece of an utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word, possibly with inner apostrophes or hyphens ("don't", "x-ray").
    Word(String),
    /// Punctuation that opened a chunk, such as `"` or `(`.
    Open(char),
    /// Punctuation that closed a chunk, such as `?` or `,`.
    Close(char),
}

impl Token {
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(word) => Some(word),
            Self::Open(_) | Self::Close(_) => None,
        }
    }
}

/// Split `text` into words and edge punctuation.
///
/// Whitespace separates chunks; punctuation at either end of a chunk becomes
/// its own token while punctuation inside a word is kept, so contractions
/// survive intact.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let is_edge = |c: char| c.is_ascii_punctuation();
        let body_start = chunk.find(|c: char| !is_edge(c));

        let Some(body_start) = body_start else {
            tokens.extend(chunk.chars().map(Token::Close));
            continue;
        };

        let body_end = chunk
            .rfind(|c: char| !is_edge(c))
            .map_or(chunk.len(), |i| {
                i + chunk[i..].chars().next().map_or(1, char::len_utf8)
            });

        tokens.extend(chunk[..body_start].chars().map(Token::Open));
        tokens.push(Token::Word(chunk[body_start..body_end].to_string()));
        tokens.extend(chunk[body_end..].chars().map(Token::Close));
    }
    tokens
}

/// Join tokens back into a single line, gluing punctuation to its word.
#[must_use]
pub fn join(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut glue_next = false;
    for token in tokens {
        match token {
            Token::Word(word) => {
                if !out.is_empty() && !glue_next {
                    out.push(' ');
                }
                out.push_str(word);
                glue_next = false;
            }
            Token::Open(c) => {
                if !out.is_empty() && !glue_next {
                    out.push(' ');
                }
                out.push(*c);
                glue_next = true;
            }
            Token::Close(c) => {
                out.push(*c);
                glue_next = false;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        tokenize(text)
            .iter()
            .filter_map(Token::as_word)
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn test_splits_edge_punctuation() {
        assert_eq!(
            tokenize("Hello, world!"),
            vec![
                Token::Word("Hello".to_string()),
                Token::Close(','),
                Token::Word("world".to_string()),
                Token::Close('!'),
            ]
        );
    }

    #[test]
    fn test_keeps_contractions() {
        assert_eq!(words("I don't know, I'm sure"), vec!["I", "don't", "know", "I'm", "sure"]);
    }

    #[test]
    fn test_quotes_and_brackets() {
        let tokens = tokenize("(\"really\")");
        assert_eq!(
            tokens,
            vec![
                Token::Open('('),
                Token::Open('"'),
                Token::Word("really".to_string()),
                Token::Close('"'),
                Token::Close(')'),
            ]
        );
        assert_eq!(join(&tokens), "(\"really\")");
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(tokenize("?!"), vec![Token::Close('?'), Token::Close('!')]);
        assert_eq!(join(&tokenize("?!")), "?!");
    }

    #[test]
    fn test_join_collapses_whitespace() {
        assert_eq!(join(&tokenize("  is   it\training ? ")), "is it raining?");
    }

    #[test]
    fn test_empty() {
        assert!(tokenize("   ").is_empty());
        assert_eq!(join(&[]), "");
    }
}
