use std::rc::Rc;

use memchr::memchr;
use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_ERROR,
};

use super::{chars::is_space_char, scanners::SCAN_RULES, tokens::TokenKind};

#[derive(Debug, Clone)]
enum ScanState {
    Ready,
    Failed(Error),
}

/// Backtrackable tokenizer over a single query.
///
/// The current token is empty before the first `advance` and at the end of
/// input. Whitespace and `#` comments are skipped and never emitted.
#[derive(Debug, Clone)]
pub struct Scanner {
    /// The current token
    token: String,
    /// Tokens emitted before the current one, most recent last
    prev_tokens: Vec<String>,
    /// Tokens pushed back by `retreat`, replayed before scanning resumes
    next_tokens: Vec<String>,
    /// The query being scanned
    source: String,
    /// Byte offset of the unconsumed tail
    pos: usize,
    state: ScanState,
    /// Name of the query source, reported in error positions
    file: Rc<String>,
}

impl Scanner {
    /// Creates a scanner over `source`. `file` names the query in
    /// diagnostics and defaults to `query`.
    pub fn new(source: &str, file: Option<String>) -> Scanner {
        let file_name = match file {
            Some(file) => Rc::new(file),
            None => Rc::new(String::from("query")),
        };

        let mut scanner = Scanner {
            token: String::new(),
            prev_tokens: vec![],
            next_tokens: vec![],
            source: String::new(),
            pos: 0,
            state: ScanState::Ready,
            file: file_name,
        };
        scanner.init(source);
        scanner
    }

    /// Resets all state to scan `source` from the beginning.
    pub fn init(&mut self, source: &str) {
        debug!(file = %self.file, len = source.len(), "initializing scanner");

        self.token.clear();
        self.prev_tokens.clear();
        self.next_tokens.clear();
        self.source = source.to_string();
        self.pos = 0;
        self.state = ScanState::Ready;
    }

    /// Moves to the next token and returns it. An empty token means the end
    /// of input.
    ///
    /// Once scanning fails every further call returns the same error until
    /// the scanner is re-initialized.
    pub fn advance(&mut self) -> Result<&str, Error> {
        if let ScanState::Failed(err) = &self.state {
            return Err(err.clone());
        }

        self.prev_tokens.push(self.token.clone());

        if let Some(token) = self.next_tokens.pop() {
            trace!(token = %token, "replaying pushed back token");
            self.token = token;
            return Ok(&self.token);
        }

        match self.scan_next() {
            Ok(token) => {
                self.token = token;
                Ok(&self.token)
            }
            Err(kind) => {
                let err = MK_ERROR!(kind, self.pos, self.file);
                debug!(error = %err, "scanner failed");
                self.state = ScanState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Moves back to the previous token. The current token is replayed by the
    /// next `advance`.
    pub fn retreat(&mut self) -> Result<(), Error> {
        let Some(prev) = self.prev_tokens.pop() else {
            return Err(MK_ERROR!(ErrorImpl::RetreatWithoutHistory, self.pos, self.file));
        };

        trace!(token = %self.token, prev = %prev, "retreating");
        let current = std::mem::replace(&mut self.token, prev);
        self.next_tokens.push(current);
        Ok(())
    }

    /// The current token followed by the unconsumed input, for diagnostics.
    pub fn context(&self) -> String {
        format!("{}{}", self.token, self.tail())
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Input not yet consumed by scanning.
    pub fn tail(&self) -> &str {
        &self.source[self.pos..]
    }

    /// Input already consumed by scanning; `consumed() + tail()` is the
    /// original query.
    pub fn consumed(&self) -> &str {
        &self.source[..self.pos]
    }

    /// Byte offset of the unconsumed input.
    pub fn offset(&self) -> usize {
        self.pos
    }

    fn scan_next(&mut self) -> Result<String, ErrorImpl> {
        loop {
            let skipped = self.source.as_bytes()[self.pos..]
                .iter()
                .take_while(|ch| is_space_char(**ch))
                .count();
            self.pos += skipped;

            let tail = &self.source[self.pos..];
            if tail.is_empty() {
                return Ok(String::new());
            }

            if tail.as_bytes()[0] == b'#' {
                // Comments run to the end of the line or of the input
                self.pos += match memchr(b'\n', tail.as_bytes()) {
                    Some(n) => n + 1,
                    None => tail.len(),
                };
                continue;
            }

            for rule in SCAN_RULES {
                if let Some(n) = (rule.scanner)(tail)? {
                    let token = tail[..n].to_string();
                    trace!(
                        rule = rule.name,
                        kind = %TokenKind::of(&token),
                        token = %token,
                        offset = self.pos,
                        "scanned token"
                    );
                    self.pos += n;
                    return Ok(token);
                }
            }

            return Err(ErrorImpl::UnrecognisedToken {
                token: tail.to_string(),
            });
        }
    }
}
