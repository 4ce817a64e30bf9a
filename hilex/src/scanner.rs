use crate::*;

#[cfg(feature = "scan_trace")]
mod scan_trace {
    use crate::{Category, Span};

    #[derive(Debug, Clone)]
    enum Record {
        Matched {
            state: &'static str,
            category: Category,
            span: Span,
        },
        Default {
            state: &'static str,
        },
        Recovered {
            span: Span,
        },
    }

    /// every rule hit of one scan, for chasing table bugs
    #[derive(Default, Debug, Clone)]
    pub struct ScanTrace {
        records: Vec<Record>,
    }

    impl ScanTrace {
        pub(crate) fn record_match(&mut self, state: &'static str, category: Category, span: Span) {
            self.records.push(Record::Matched {
                state,
                category,
                span,
            });
        }

        pub(crate) fn record_default(&mut self, state: &'static str) {
            self.records.push(Record::Default { state });
        }

        pub(crate) fn record_recovery(&mut self, span: Span) {
            self.records.push(Record::Recovered { span });
        }
    }

    impl std::fmt::Display for ScanTrace {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            for record in &self.records {
                match record {
                    Record::Matched {
                        state,
                        category,
                        span,
                    } => writeln!(f, "{state}: {category}{span}")?,
                    Record::Default { state } => writeln!(f, "{state}: default pop")?,
                    Record::Recovered { span } => writeln!(f, "recovered{span}")?,
                }
            }
            Ok(())
        }
    }
}

#[cfg(feature = "scan_trace")]
pub use scan_trace::ScanTrace;

/// drives one scan of a source against a lexicon
///
/// all the moving state lives here, the lexicon and the source stay
/// untouched, so one lexicon may serve many scanners at once
pub struct Scanner<'s> {
    lexicon: &'s Lexicon,
    source: &'s Source,
    pos: usize,
    stack: Vec<&'static str>,
    #[cfg(feature = "scan_trace")]
    trace: scan_trace::ScanTrace,
}

impl<'s> Scanner<'s> {
    pub fn new(lexicon: &'s Lexicon, source: &'s Source) -> Self {
        Self {
            lexicon,
            source,
            pos: 0,
            stack: vec![Lexicon::ROOT],
            #[cfg(feature = "scan_trace")]
            trace: Default::default(),
        }
    }

    #[cfg(feature = "scan_trace")]
    pub fn get_trace(&self) -> &ScanTrace {
        &self.trace
    }

    /// scan to the end of the source
    ///
    /// deterministic: the same lexicon over the same source always gives
    /// the same stream, and the token texts concatenate back into the
    /// source text
    pub fn get_tokens(&mut self) -> Vec<Token> {
        let source = self.source;
        let text = source.text();
        let mut tokens = vec![];

        'scan: while self.pos < text.len() {
            let rest = &text[self.pos..];
            let state = self.lexicon.get_state(self.current());

            for rule in &state.rules {
                let Some(len) = rule.matcher.match_len(rest) else {
                    continue;
                };
                // a rule may take nothing only to change state, otherwise
                // the scan would never advance
                if len == 0 && rule.action == Action::Stay {
                    continue;
                }

                if len == 0 {
                    #[cfg(feature = "scan_trace")]
                    self.trace.record_default(state.name);
                } else {
                    let span = Span::new(self.pos, self.pos + len);
                    #[cfg(feature = "scan_trace")]
                    self.trace.record_match(state.name, rule.category, span);
                    tokens.push(Token::new(rule.category, &text[span.start..span.end], span));
                    self.pos = span.end;
                }

                self.apply(rule.action);
                continue 'scan;
            }

            // no rule matched: a stray newline drops the scan back to the
            // root state, anything else comes out as a one character error
            match rest.chars().next() {
                Some('\n') => {
                    self.stack.clear();
                    self.stack.push(Lexicon::ROOT);
                    let span = Span::new(self.pos, self.pos + 1);
                    #[cfg(feature = "scan_trace")]
                    self.trace.record_recovery(span);
                    tokens.push(Token::new(Category::Text, "\n", span));
                    self.pos = span.end;
                }
                Some(other) => {
                    let span = Span::new(self.pos, self.pos + other.len_utf8());
                    #[cfg(feature = "scan_trace")]
                    self.trace.record_recovery(span);
                    tokens.push(Token::new(
                        Category::Error,
                        &text[span.start..span.end],
                        span,
                    ));
                    self.pos = span.end;
                }
                None => break,
            }
        }

        tokens
    }

    fn current(&self) -> &'static str {
        self.stack.last().copied().unwrap_or(Lexicon::ROOT)
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Stay => {}
            Action::Push(state) => self.stack.push(state),
            Action::Pop => {
                // the root state always stays, popping past it would
                // wedge the scan
                if self.stack.len() > 1 {
                    self.stack.pop();
                }
            }
        }
    }
}
