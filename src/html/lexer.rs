//! Permissive HTML tag-stream lexer.
//!
//! Produces start tags, end tags and text. Comments, doctypes and processing
//! instructions are skipped. Nothing here ever fails: markup that cannot be
//! read as a tag is passed through as text.

use std::borrow::Cow;

/// Elements whose content is raw text up to the matching close tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    StartTag {
        name: String,
        attrs: Attributes,
        self_closing: bool,
    },
    EndTag(String),
    Text(String),
    Eof,
}

/// Attributes of one start tag in source order. Names are lowercase;
/// valueless attributes have no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(String, Option<String>)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: Option<String>) {
        self.0.push((name.into(), value));
    }

    /// Value of `name`; a repeated attribute resolves to its last occurrence
    /// and a valueless attribute reads as the empty string.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_deref().unwrap_or(""))
    }

    /// Like [`Attributes::get`], but empty values count as absent.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    raw_text: Option<&'static str>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            raw_text: None,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn current_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    fn peek_byte(&self, n: usize) -> Option<u8> {
        self.input.as_bytes().get(self.position + n).copied()
    }

    fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.input.len());
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.current_byte() {
            if b.is_ascii_whitespace() {
                self.advance(1);
            } else {
                break;
            }
        }
    }

    /// Move past the next occurrence of `terminator`, or to the end of input.
    fn skip_past(&mut self, terminator: &str) {
        match self.rest().find(terminator) {
            Some(idx) => self.advance(idx + terminator.len()),
            None => self.position = self.input.len(),
        }
    }

    /// Read bytes until one matches `stop` or whitespace.
    fn read_until(&mut self, stop: &[u8]) -> &'a str {
        let start = self.position;
        while let Some(b) = self.current_byte() {
            if b.is_ascii_whitespace() || stop.contains(&b) {
                break;
            }
            self.advance(1);
        }
        &self.input[start..self.position]
    }

    fn read_attribute_value(&mut self) -> String {
        match self.current_byte() {
            Some(quote @ (b'"' | b'\'')) => {
                self.advance(1);
                let start = self.position;
                let end = self.rest()
                    .find(quote as char)
                    .map(|idx| start + idx)
                    .unwrap_or(self.input.len());
                self.position = end;
                self.advance(1); // closing quote
                decode_entities(&self.input[start..end]).into_owned()
            }
            _ => decode_entities(self.read_until(b">")).into_owned(),
        }
    }

    fn read_start_tag(&mut self) -> Option<Token> {
        let start = self.position;
        self.advance(1); // '<'
        let name = self.read_until(b"/>").to_ascii_lowercase();
        let mut attrs = Attributes::new();

        loop {
            self.skip_whitespace();
            match self.current_byte() {
                None => {
                    // Unterminated tag: hand the remainder back as text.
                    self.position = start;
                    return None;
                }
                Some(b'>') => {
                    self.advance(1);
                    return Some(self.finish_start_tag(name, attrs, false));
                }
                Some(b'/') if self.peek_byte(1) == Some(b'>') => {
                    self.advance(2);
                    return Some(self.finish_start_tag(name, attrs, true));
                }
                Some(b'/') => self.advance(1),
                Some(_) => {
                    let mut key = self.read_until(b"=/>");
                    if key.is_empty() {
                        // A stray '=' becomes an attribute name of its own.
                        key = &self.input[self.position..self.position + 1];
                        self.advance(1);
                    }
                    let key = key.to_ascii_lowercase();

                    self.skip_whitespace();
                    if self.current_byte() == Some(b'=') {
                        self.advance(1);
                        self.skip_whitespace();
                        let value = self.read_attribute_value();
                        attrs.push(key, Some(value));
                    } else {
                        attrs.push(key, None);
                    }
                }
            }
        }
    }

    fn finish_start_tag(&mut self, name: String, attrs: Attributes, self_closing: bool) -> Token {
        if !self_closing {
            self.raw_text = RAW_TEXT_ELEMENTS.iter().copied().find(|el| *el == name);
        }
        Token::StartTag {
            name,
            attrs,
            self_closing,
        }
    }

    fn read_end_tag(&mut self) -> Token {
        self.advance(2); // '</'
        let name = self.read_until(b">").to_ascii_lowercase();
        self.skip_past(">");
        Token::EndTag(name)
    }

    /// Raw text of a `script`/`style` element, up to its close tag.
    fn read_raw_text(&mut self, element: &str) -> Option<Token> {
        let closer = format!("</{}", element);
        match find_ignore_ascii_case(self.rest(), &closer) {
            Some(0) => {
                self.raw_text = None;
                None
            }
            Some(idx) => {
                let text = &self.rest()[..idx];
                self.advance(idx);
                self.raw_text = None;
                Some(Token::Text(text.to_string()))
            }
            None => {
                let text = self.rest().to_string();
                self.position = self.input.len();
                Some(Token::Text(text))
            }
        }
    }

    fn read_text(&mut self) -> Token {
        // Always consume at least one byte so a lone '<' makes progress.
        let skip = self.rest().chars().next().map(char::len_utf8).unwrap_or(1);
        let end = self.rest()[skip..]
            .find('<')
            .map(|idx| self.position + skip + idx)
            .unwrap_or(self.input.len());
        let text = &self.input[self.position..end];
        self.position = end;
        Token::Text(text.to_string())
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.position >= self.input.len() {
                return Token::Eof;
            }

            if let Some(element) = self.raw_text {
                if let Some(token) = self.read_raw_text(element) {
                    return token;
                }
            }

            let rest = self.rest();
            if !rest.starts_with('<') {
                return self.read_text();
            }

            if rest.starts_with("<!--") {
                self.advance(4);
                self.skip_past("-->");
                continue;
            }

            match self.peek_byte(1) {
                Some(b'!') | Some(b'?') => {
                    self.skip_past(">");
                    continue;
                }
                Some(b'/') => match self.peek_byte(2) {
                    Some(b) if b.is_ascii_alphabetic() => return self.read_end_tag(),
                    Some(_) => {
                        self.skip_past(">");
                        continue;
                    }
                    None => return self.read_text(),
                },
                Some(b) if b.is_ascii_alphabetic() => {
                    if let Some(token) = self.read_start_tag() {
                        return token;
                    }
                    let text = self.rest().to_string();
                    self.position = self.input.len();
                    return Token::Text(text);
                }
                _ => return self.read_text(),
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.next_token() {
            Token::Eof => None,
            token => Some(token),
        }
    }
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if pat.len() > hay.len() {
        return None;
    }
    (0..=hay.len() - pat.len()).find(|&i| hay[i..i + pat.len()].eq_ignore_ascii_case(pat))
}

/// Decode named and numeric character references in attribute values.
/// Unknown references are left as written.
pub fn decode_entities(value: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(value)
}
