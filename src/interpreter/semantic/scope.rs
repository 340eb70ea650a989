use std::{collections::HashMap, fmt};

use crate::interpreter::semantic::symbol::Symbol;

/// Index of a [`ScopedSymbolTable`] inside a [`ScopeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(usize);

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The symbols declared directly in one program or procedure block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedSymbolTable {
    /// Name of the program or procedure that opened the scope.
    pub scope_name:      String,
    /// Nesting depth; the program scope is level 1.
    pub scope_level:     usize,
    /// The scope this one is nested in, if any.
    pub enclosing_scope: Option<ScopeId>,
    variables:           HashMap<String, Symbol>,
    procedures:          HashMap<String, Symbol>,
}

impl ScopedSymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new(scope_name: impl Into<String>,
               scope_level: usize,
               enclosing_scope: Option<ScopeId>)
               -> Self {
        Self { scope_name: scope_name.into(),
               scope_level,
               enclosing_scope,
               variables: HashMap::new(),
               procedures: HashMap::new() }
    }

    /// Inserts `symbol` into the namespace matching its kind.
    ///
    /// Returns `false` and leaves the table unchanged if that namespace
    /// already holds the name.
    pub fn insert(&mut self, symbol: Symbol) -> bool {
        let namespace = match symbol {
            Symbol::Variable { .. } => &mut self.variables,
            Symbol::Procedure { .. } => &mut self.procedures,
        };

        if namespace.contains_key(symbol.name()) {
            return false;
        }
        tracing::trace!(scope = %self.scope_name, %symbol, "insert symbol");
        namespace.insert(symbol.name().to_string(), symbol);
        true
    }

    /// Looks up a variable declared directly in this scope.
    #[must_use]
    pub fn lookup_local(&self, name: &str) -> Option<&Symbol> {
        self.variables.get(name)
    }

    /// Looks up a procedure declared directly in this scope.
    #[must_use]
    pub fn lookup_procedure(&self, name: &str) -> Option<&Symbol> {
        self.procedures.get(name)
    }

    /// Looks up a variable in this scope and then in each enclosing scope,
    /// innermost first.
    ///
    /// # Example
    /// ```
    /// use pascalette::{
    ///     ast::TypeSpec,
    ///     interpreter::semantic::{ScopeArena, Symbol},
    /// };
    ///
    /// let mut scopes = ScopeArena::default();
    /// let global = scopes.push("global", None);
    /// scopes[global].insert(Symbol::Variable { name:      "x".to_string(),
    ///                                          type_spec: TypeSpec::Integer, });
    /// let inner = scopes.push("P1", Some(global));
    ///
    /// assert!(scopes[inner].lookup("x", &scopes).is_some());
    /// assert!(scopes[inner].lookup_local("x").is_none());
    /// ```
    #[must_use]
    pub fn lookup<'a>(&'a self, name: &str, scopes: &'a ScopeArena) -> Option<&'a Symbol> {
        if let Some(symbol) = self.lookup_local(name) {
            return Some(symbol);
        }

        let mut enclosing = self.enclosing_scope;
        while let Some(id) = enclosing {
            let scope = &scopes[id];
            if let Some(symbol) = scope.lookup_local(name) {
                return Some(symbol);
            }
            enclosing = scope.enclosing_scope;
        }

        None
    }
}

impl fmt::Display for ScopedSymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = "SCOPE (SCOPED SYMBOL TABLE)";
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "=".repeat(header.len()))?;
        writeln!(f, "{:<15}: {}", "Scope name", self.scope_name)?;
        writeln!(f, "{:<15}: {}", "Scope level", self.scope_level)?;
        match self.enclosing_scope {
            Some(id) => writeln!(f, "{:<15}: {id}", "Enclosing scope")?,
            None => writeln!(f, "{:<15}: None", "Enclosing scope")?,
        }

        let contents = "Scope (Scoped symbol table) contents";
        writeln!(f, "{contents}")?;
        writeln!(f, "{}", "-".repeat(contents.len()))?;

        let mut symbols: Vec<_> = self.procedures.values().chain(self.variables.values()).collect();
        symbols.sort_by(|a, b| a.name().cmp(b.name()));
        for symbol in symbols {
            writeln!(f, "{:>7}: {symbol}", symbol.name())?;
        }
        Ok(())
    }
}

/// Owns every live [`ScopedSymbolTable`]; scopes refer to one another by
/// [`ScopeId`].
///
/// Scopes are opened and closed in strict nesting order, so the arena behaves
/// as a stack: a scope is always closed before its enclosing scope, and the
/// ids of still-open scopes stay valid.
#[derive(Debug, Default)]
pub struct ScopeArena {
    scopes: Vec<ScopedSymbolTable>,
}

impl ScopeArena {
    /// Opens a new scope nested in `enclosing`, one level deeper than it
    /// (level 1 when there is no enclosing scope).
    pub fn push(&mut self, scope_name: impl Into<String>, enclosing: Option<ScopeId>) -> ScopeId {
        let scope_level = enclosing.map_or(1, |id| self[id].scope_level + 1);
        self.scopes
            .push(ScopedSymbolTable::new(scope_name, scope_level, enclosing));
        ScopeId(self.scopes.len() - 1)
    }

    /// Closes the innermost open scope and returns it.
    pub fn pop(&mut self) -> Option<ScopedSymbolTable> {
        self.scopes.pop()
    }

    /// Number of open scopes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    /// `true` when no scope is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl std::ops::Index<ScopeId> for ScopeArena {
    type Output = ScopedSymbolTable;

    fn index(&self, id: ScopeId) -> &Self::Output {
        &self.scopes[id.0]
    }
}

impl std::ops::IndexMut<ScopeId> for ScopeArena {
    fn index_mut(&mut self, id: ScopeId) -> &mut Self::Output {
        &mut self.scopes[id.0]
    }
}
