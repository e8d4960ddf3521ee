use std::collections::{HashMap, hash_map::Entry};

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, token::Token, value::Value},
};

/// Handle to one scope frame inside an [`Environment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

impl ScopeId {
    /// The global scope, which exists for the whole lifetime of the
    /// environment.
    pub const GLOBAL: Self = Self(0);
}

#[derive(Debug, Default)]
struct Frame {
    values:    HashMap<String, Value>,
    enclosing: Option<ScopeId>,
}

/// The variable store of the interpreter.
///
/// Scopes are kept in an arena of frames. Each frame refers to its lexical
/// parent through a [`ScopeId`] handle instead of owning it, and the frame of
/// a block is released when the block is left. Lookup and assignment walk
/// from the current frame outward and stop at the first frame that binds the
/// name.
///
/// # Example
/// ```
/// use treelox::interpreter::{environment::Environment,
///                            token::{Token, TokenKind},
///                            value::Value};
///
/// let x = Token::new(TokenKind::Identifier, "x", None, 1, 5);
/// let mut env = Environment::new();
/// env.define(&x, Value::Number(1.0)).unwrap();
///
/// env.push_scope();
/// env.define(&x, Value::Number(2.0)).unwrap();
/// assert_eq!(env.get(&x).unwrap(), Value::Number(2.0));
///
/// env.pop_scope();
/// assert_eq!(env.get(&x).unwrap(), Value::Number(1.0));
/// ```
#[derive(Debug)]
pub struct Environment {
    frames:  Vec<Frame>,
    current: ScopeId,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { frames:  vec![Frame::default()],
               current: ScopeId::GLOBAL, }
    }

    /// The innermost scope, where declarations currently land.
    #[must_use]
    pub const fn current(&self) -> ScopeId {
        self.current
    }

    /// Number of live scopes, the global one included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Opens a new scope nested in the current one and makes it current.
    pub fn push_scope(&mut self) -> ScopeId {
        let id = ScopeId(self.frames.len());
        self.frames.push(Frame { values:    HashMap::new(),
                                 enclosing: Some(self.current), });
        self.current = id;

        trace!(depth = self.frames.len(), "scope pushed");
        id
    }

    /// Closes the current scope and returns to its parent.
    ///
    /// The global scope is never closed.
    pub fn pop_scope(&mut self) {
        if self.current == ScopeId::GLOBAL {
            return;
        }
        if let Some(frame) = self.frames.pop() {
            self.current = frame.enclosing.unwrap_or(ScopeId::GLOBAL);
        }

        trace!(depth = self.frames.len(), "scope popped");
    }

    /// Binds `name` in the current scope.
    ///
    /// # Errors
    /// [`RuntimeError::AlreadyDefined`] when the current scope already binds
    /// the name. Bindings in enclosing scopes are shadowed, not an error.
    pub fn define(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        let frame = &mut self.frames[self.current.0];

        match frame.values.entry(name.lexeme.clone()) {
            Entry::Occupied(_) => Err(RuntimeError::AlreadyDefined { name: name.clone() }),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            },
        }
    }

    /// Reads the innermost binding of `name`.
    ///
    /// # Errors
    /// [`RuntimeError::UndefinedVariable`] when no scope binds the name.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.resolve(&name.lexeme)
            .and_then(|id| self.frames[id.0].values.get(&name.lexeme))
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedVariable { name: name.clone() })
    }

    /// Overwrites the innermost binding of `name`. Never creates a binding.
    ///
    /// # Errors
    /// [`RuntimeError::UndefinedVariable`] when no scope binds the name.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        let slot = match self.resolve(&name.lexeme) {
            Some(id) => self.frames[id.0].values.get_mut(&name.lexeme),
            None => None,
        };

        match slot {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(RuntimeError::UndefinedVariable { name: name.clone() }),
        }
    }

    /// Finds the innermost scope binding `name`, walking the parent chain
    /// from the current scope.
    fn resolve(&self, name: &str) -> Option<ScopeId> {
        let mut scope = Some(self.current);
        while let Some(id) = scope {
            let frame = self.frames.get(id.0)?;
            if frame.values.contains_key(name) {
                return Some(id);
            }
            scope = frame.enclosing;
        }
        None
    }
}
