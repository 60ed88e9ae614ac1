//! # Lispy Atom System
//!
//! Atoms are the built-in functions of Lispy. The language has no user-defined
//! functions, so every call resolves to one of the atoms registered here.
//!
//! ## Module Structure
//!
//! - **`helpers`**: Argument checks shared by all atoms
//! - **`collections`**: Q-expression operations (`list`, `head`, `tail`, `join`, `eval`)
//! - **`math`**: Arithmetic (`+`, `-`, `*`, `/`, `%`, `^`)
//!
//! ## Calling Convention
//!
//! Every atom takes its arguments by value and consumes them on every path,
//! returning either a result or a `Value::Error`.

use im::HashMap;
use log::debug;
use once_cell::sync::Lazy;

use crate::errors::LispError;
use crate::runtime::{EvalContext, Value};

pub mod collections;
pub mod helpers;
pub mod math;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Atom function type: owned, already-evaluated arguments in; one value out.
///
/// The context is only needed by atoms that re-enter the evaluator (`eval`).
pub type AtomFn = fn(args: Vec<Value>, context: &mut EvalContext) -> Value;

/// A registered atom with its user-facing description.
#[derive(Clone, Copy)]
pub struct Atom {
    pub name: &'static str,
    pub doc: &'static str,
    pub func: AtomFn,
}

/// Registry for all atoms, inspectable at runtime.
///
/// Lookup is by exact name.
#[derive(Clone, Default)]
pub struct BuiltinRegistry {
    atoms: HashMap<String, Atom>,
}

static STANDARD: Lazy<BuiltinRegistry> = Lazy::new(|| {
    let mut registry = BuiltinRegistry::new();
    register_all_atoms(&mut registry);
    registry
});

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding every standard atom.
    pub fn standard() -> &'static BuiltinRegistry {
        &STANDARD
    }

    pub fn register(&mut self, atom: Atom) {
        self.atoms.insert(atom.name.to_string(), atom);
    }

    pub fn get(&self, name: &str) -> Option<&Atom> {
        self.atoms.get(name)
    }

    /// All atoms, sorted by name.
    pub fn list(&self) -> Vec<Atom> {
        let mut atoms: Vec<Atom> = self.atoms.values().copied().collect();
        atoms.sort_by_key(|a| a.name);
        atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Applies the atom called `name` to `args`.
    ///
    /// An unknown name drops `args` and yields `UnknownFunction`.
    pub fn dispatch(&self, name: &str, args: Vec<Value>, context: &mut EvalContext) -> Value {
        match self.get(name) {
            Some(atom) => (atom.func)(args, context),
            None => {
                debug!("no atom named {:?}", name);
                Value::error(LispError::UnknownFunction {
                    name: name.to_string(),
                })
            }
        }
    }
}

/// Registers every standard atom into `registry`.
pub fn register_all_atoms(registry: &mut BuiltinRegistry) {
    collections::register_collection_atoms(registry);
    math::register_math_atoms(registry);
}
