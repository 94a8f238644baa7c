//! Template scanning.
//!
//! A template is a single left-to-right pass alternating between literal
//! runs and `{...}` placeholders. `{{` and `}}` stand for a literal brace;
//! the doubled brace is folded into the literal run it ends.

use crate::error::WriterError;
use crate::printf::spec::{PlaceholderSpec, parse_placeholder};

/// One piece of a scanned template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Bytes to emit verbatim (escapes already resolved).
    Literal(&'a str),
    /// Placeholder body, without the surrounding braces.
    Placeholder(&'a str),
}

/// Lazy scanner over a template.
///
/// Yields at most one error, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct TemplateScanner<'a> {
    src: &'a str,
    pos: usize,
    failed: bool,
}

impl<'a> TemplateScanner<'a> {
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            failed: false,
        }
    }

    /// Byte offset of the next unscanned character.
    pub const fn position(&self) -> usize {
        self.pos
    }

    fn fail(&mut self, err: WriterError) -> Option<Result<Token<'a>, WriterError>> {
        self.failed = true;
        Some(Err(err))
    }
}

impl<'a> Iterator for TemplateScanner<'a> {
    type Item = Result<Token<'a>, WriterError>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.src.as_bytes();
        let len = bytes.len();
        if self.failed || self.pos >= len {
            return None;
        }

        let start = self.pos;
        let mut i = start;
        while i < len && bytes[i] != b'{' && bytes[i] != b'}' {
            i += 1;
        }
        if i >= len {
            self.pos = len;
            return Some(Ok(Token::Literal(&self.src[start..])));
        }

        let brace = bytes[i];
        if i + 1 < len && bytes[i + 1] == brace {
            self.pos = i + 2;
            return Some(Ok(Token::Literal(&self.src[start..=i])));
        }
        if i > start {
            self.pos = i;
            return Some(Ok(Token::Literal(&self.src[start..i])));
        }

        if brace == b'}' {
            return self.fail(WriterError::FormatStart);
        }
        let body_start = i + 1;
        match bytes[body_start..].iter().position(|&b| b == b'}') {
            Some(offset) => {
                let body_end = body_start + offset;
                self.pos = body_end + 1;
                Some(Ok(Token::Placeholder(&self.src[body_start..body_end])))
            }
            None => {
                self.pos = len;
                self.fail(WriterError::FormatEnd)
            }
        }
    }
}

/// A template piece with its placeholder already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(PlaceholderSpec),
}

/// Scan and parse a whole template up front.
///
/// Useful for validating a template once and rendering it many times.
pub fn compile(template: &str) -> Result<Vec<Segment<'_>>, WriterError> {
    TemplateScanner::new(template)
        .map(|token| match token? {
            Token::Literal(text) => Ok(Segment::Literal(text)),
            Token::Placeholder(body) => parse_placeholder(body).map(Segment::Placeholder),
        })
        .collect()
}
