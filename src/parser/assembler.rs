//! Question assembly.
//!
//! [`AssemblerState`] is folded over the classified lines. It owns the
//! question under construction and the option still open for continuation
//! lines, and moves each question into the finished list when the next
//! question starts or the input ends.

use tracing::debug;

use crate::parser::classify::{classify, label_style, LabelStyle, LineRole, QuestionContext, Scheme};
use crate::types::Statement;

/// An option as written, before correctness is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOption {
    pub label: char,
    pub text: String,
    /// Carried an inline correctness marker.
    pub marked: bool,
}

/// A closed question, before correctness is resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledQuestion {
    /// Number from the source text, used to look up the answer key.
    pub number: u32,
    pub text: String,
    pub statements: Vec<Statement>,
    pub options: Vec<DraftOption>,
}

/// A question dropped at close time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Discarded {
    pub number: u32,
    pub reason: &'static str,
}

/// Everything the forward pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assembly {
    pub questions: Vec<AssembledQuestion>,
    pub discarded: Vec<Discarded>,
    /// Lines with no role (before the first question).
    pub ignored: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct OpenQuestion {
    number: u32,
    scheme: Scheme,
    style: Option<LabelStyle>,
    text: String,
    statements: Vec<Statement>,
    options: Vec<DraftOption>,
    open_option: Option<DraftOption>,
    option_scheme: Option<Scheme>,
    option_style: Option<LabelStyle>,
}

impl OpenQuestion {
    fn new(number: u32, scheme: Scheme, style: Option<LabelStyle>, text: String) -> Self {
        Self {
            number,
            scheme,
            style,
            text,
            statements: Vec::new(),
            options: Vec::new(),
            open_option: None,
            option_scheme: None,
            option_style: None,
        }
    }

    fn option_count(&self) -> usize {
        self.options.len() + usize::from(self.open_option.is_some())
    }

    fn uses_label(&self, label: char) -> bool {
        self.options
            .iter()
            .chain(self.open_option.iter())
            .any(|o| o.label == label)
    }

    /// The next letter in sequence that no option of this question has.
    fn next_label(&self) -> char {
        let mut index = self.option_count() as u32;
        loop {
            match char::from_u32('A' as u32 + index) {
                Some(c) if c.is_ascii_uppercase() && self.uses_label(c) => index += 1,
                Some(c) if c.is_ascii_uppercase() => return c,
                _ => return 'Z',
            }
        }
    }

    fn context(&self) -> QuestionContext {
        QuestionContext {
            number: self.number,
            scheme: self.scheme,
            style: self.style,
            option_scheme: self.option_scheme,
            option_style: self.option_style,
            option_count: self.option_count(),
            next_label: self.next_label(),
        }
    }

    fn flush_option(&mut self) {
        if let Some(option) = self.open_option.take() {
            self.options.push(option);
        }
    }
}

/// Reducer state for the forward pass over the lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblerState {
    current: Option<OpenQuestion>,
    assembly: Assembly,
}

impl AssemblerState {
    /// Classification context for the next line.
    pub fn context(&self) -> Option<QuestionContext> {
        self.current.as_ref().map(OpenQuestion::context)
    }

    /// Whether a question is open.
    pub fn in_question(&self) -> bool {
        self.current.is_some()
    }

    /// Classify `line` against the current state and apply it, remembering
    /// how question and option labels are written.
    pub fn feed(self, line: &str) -> Self {
        let role = classify(line, self.context().as_ref());
        self.apply_styled(role, label_style(line))
    }

    /// Apply one classified line whose label style is unknown.
    pub fn apply(self, role: Option<LineRole>) -> Self {
        self.apply_styled(role, None)
    }

    /// Apply one classified line. `style` is the style of its label, if any.
    pub fn apply_styled(mut self, role: Option<LineRole>, style: Option<LabelStyle>) -> Self {
        match role {
            None => self.assembly.ignored += 1,
            Some(LineRole::QuestionStart {
                number,
                scheme,
                text,
            }) => {
                self.close_question();
                self.current = Some(OpenQuestion::new(number, scheme, style, text));
            }
            Some(role) => {
                if let Some(q) = self.current.as_mut() {
                    apply_to_question(q, role, style);
                } else {
                    self.assembly.ignored += 1;
                }
            }
        }
        self
    }

    /// Close the last question and return the result.
    pub fn finish(mut self) -> Assembly {
        self.close_question();
        self.assembly
    }

    fn close_question(&mut self) {
        let Some(mut q) = self.current.take() else {
            return;
        };
        q.flush_option();

        let reason = if q.text.trim().is_empty() {
            Some("question has no text")
        } else if q.options.is_empty() && q.statements.is_empty() {
            Some("question has no options or statements")
        } else {
            None
        };

        if let Some(reason) = reason {
            debug!(number = q.number, reason, "discarding question");
            self.assembly.discarded.push(Discarded {
                number: q.number,
                reason,
            });
            return;
        }

        debug!(
            number = q.number,
            options = q.options.len(),
            statements = q.statements.len(),
            "closed question"
        );
        self.assembly.questions.push(AssembledQuestion {
            number: q.number,
            text: q.text,
            statements: q.statements,
            options: q.options,
        });
    }
}

fn apply_to_question(q: &mut OpenQuestion, role: LineRole, style: Option<LabelStyle>) {
    match role {
        LineRole::Statement { numeral, text } => {
            q.flush_option();
            q.statements.push(Statement { numeral, text });
        }
        LineRole::OptionStart {
            label,
            scheme,
            text,
            marked,
        } => {
            q.flush_option();
            if q.option_scheme.is_none() && scheme.is_some() {
                q.option_scheme = scheme;
                q.option_style = style;
            }
            let option = DraftOption {
                label,
                text,
                marked,
            };
            if marked {
                q.options.push(option);
            } else {
                q.open_option = Some(option);
            }
        }
        LineRole::Continuation { text } => {
            let target = match (q.open_option.as_mut(), q.options.last_mut()) {
                (Some(open), _) => &mut open.text,
                (None, Some(last)) => &mut last.text,
                (None, None) => &mut q.text,
            };
            append_text(target, &text);
        }
        LineRole::QuestionStart { .. } => {}
    }
}

fn append_text(target: &mut String, text: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Run the forward pass over `lines`.
pub fn assemble<'a, I>(lines: I) -> Assembly
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .fold(AssemblerState::default(), AssemblerState::feed)
        .finish()
}
