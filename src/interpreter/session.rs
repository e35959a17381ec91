use crate::{
    error::Error,
    interpreter::{
        evaluator::{core::execute_with_trace, trace::Trace},
        lexer::tokenize,
        parser::core::{PostfixSequence, lex},
        token::Token,
    },
};

/// A reusable evaluation pipeline over one input at a time.
///
/// A session keeps the output of every stage so callers can inspect the
/// tokens, the postfix sequence and the trace after a run. Setting new input
/// discards all of it. Each stage runs the stages before it if they have not
/// run yet, so `session.execute()` on fresh input scans, validates and
/// executes.
///
/// # Examples
/// ```
/// use opprec::interpreter::session::Session;
///
/// let mut session = Session::new("1 / 0");
/// assert!(session.run().is_err());
///
/// session.set_input("7 * 6");
/// assert_eq!(session.run().unwrap(), 42.0);
/// assert_eq!(session.trace().steps(), ["7 * 6 = 42"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    input:   String,
    tokens:  Option<Vec<Token>>,
    postfix: Option<PostfixSequence>,
    trace:   Trace,
    result:  Option<f64>,
}

impl Session {
    /// Creates a session over `input`. Nothing runs until a stage is called.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self { input: input.into(),
               ..Self::default() }
    }

    /// Replaces the input and discards every derived result.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.reset();
    }

    /// The current input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Scans the input.
    ///
    /// # Errors
    /// Returns [`Error::Lexical`] if the input cannot be scanned.
    pub fn tokenize(&mut self) -> Result<&[Token], Error> {
        self.reset();
        let tokens = tokenize(&self.input)?;
        Ok(self.tokens.insert(tokens).as_slice())
    }

    /// Validates the scanned tokens and converts them to postfix order.
    ///
    /// # Errors
    /// Returns [`Error::Lexical`] if scanning has to run and fails, or
    /// [`Error::Syntax`] if the tokens do not follow the grammar.
    pub fn lex(&mut self) -> Result<&PostfixSequence, Error> {
        let postfix = self.convert()?;
        Ok(&*self.postfix.insert(postfix))
    }

    /// Executes the postfix sequence and stores the result.
    ///
    /// # Errors
    /// Returns the error of any earlier stage that has to run, or
    /// [`Error::Runtime`] if execution fails. In the latter case the steps
    /// made before the failure are in the error and remain in
    /// [`Session::trace`].
    pub fn execute(&mut self) -> Result<f64, Error> {
        let postfix = match self.postfix.take() {
            Some(postfix) => postfix,
            None => self.convert()?,
        };
        self.result = None;

        let outcome = execute_with_trace(&postfix, &mut self.trace);
        self.postfix = Some(postfix);
        let value = outcome.map_err(|error| Error::Runtime { error,
                                                             trace: self.trace.clone() })?;
        self.result = Some(value);
        Ok(value)
    }

    /// Runs all three stages from scratch.
    ///
    /// # Errors
    /// Returns the error of the first stage that fails.
    pub fn run(&mut self) -> Result<f64, Error> {
        self.tokenize()?;
        self.lex()?;
        self.execute()
    }

    /// The tokens of the last successful scan.
    #[must_use]
    pub fn tokens(&self) -> Option<&[Token]> {
        self.tokens.as_deref()
    }

    /// The postfix sequence of the last successful conversion.
    #[must_use]
    pub const fn postfix(&self) -> Option<&PostfixSequence> {
        self.postfix.as_ref()
    }

    /// The steps of the last execution, successful or not.
    #[must_use]
    pub const fn trace(&self) -> &Trace {
        &self.trace
    }

    /// The value of the last successful execution.
    #[must_use]
    pub const fn result(&self) -> Option<f64> {
        self.result
    }

    /// Converts the current tokens, scanning first if needed. Clears
    /// everything derived from an earlier conversion.
    fn convert(&mut self) -> Result<PostfixSequence, Error> {
        if self.tokens.is_none() {
            self.tokenize()?;
        }
        self.postfix = None;
        self.trace.clear();
        self.result = None;

        Ok(lex(self.tokens.as_deref().unwrap_or_default())?)
    }

    fn reset(&mut self) {
        self.tokens = None;
        self.postfix = None;
        self.trace.clear();
        self.result = None;
    }
}
