//! Context-free grammar model.

use crate::{
    types::{Map, Set},
    util::display_fn,
};
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerminalID(u16);
impl fmt::Debug for TerminalID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T#{:03}", self.0)
    }
}

/// A terminal symbol, matched against input tokens by exact spelling.
#[derive(Debug)]
pub struct TerminalData {
    pub name: String,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NonterminalID(u16);
impl fmt::Debug for NonterminalID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N#{:03}", self.0)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum SymbolID {
    T(TerminalID),
    N(NonterminalID),
}
impl fmt::Debug for SymbolID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::T(t) => write!(f, "{:?}", t),
            Self::N(n) => write!(f, "{:?}", n),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductionID(u16);
impl fmt::Debug for ProductionID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P#{:03}", self.0)
    }
}

/// A single rewrite rule, `left -> right[0] right[1] ...`.
///
/// Value equality over `(left, right)`; the empty right-hand side is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Production {
    pub left: NonterminalID,
    pub right: Vec<SymbolID>,
}

impl Production {
    pub fn display<'g>(&'g self, g: &'g Grammar) -> impl fmt::Display + 'g {
        display_fn(|f| {
            write!(f, "{} ->", g.nonterminals[&self.left])?;
            if self.right.is_empty() {
                f.write_str(" ε")?;
            }
            for r in &self.right {
                match r {
                    SymbolID::N(n) => write!(f, " {}", g.nonterminals[n])?,
                    SymbolID::T(t) => write!(f, " \"{}\"", g.terminals[t].name)?,
                }
            }
            Ok(())
        })
    }
}

/// An immutable grammar: symbol alphabet, production rules and start symbol.
#[derive(Debug)]
#[non_exhaustive]
pub struct Grammar {
    pub terminals: Map<TerminalID, TerminalData>,
    pub nonterminals: Map<NonterminalID, String>,
    pub productions: Map<ProductionID, Production>,
    pub start_symbol: NonterminalID,
}

impl Grammar {
    /// Define a grammar using the specified function.
    pub fn define<F>(f: F) -> Result<Self, GrammarDefError>
    where
        F: FnOnce(&mut GrammarDef) -> Result<(), GrammarDefError>,
    {
        let mut def = GrammarDef {
            terminals: Map::default(),
            nonterminals: Map::default(),
            productions: Map::default(),
            start: None,
            next_terminal: 0,
            next_nonterminal: 0,
            next_production: 0,
        };
        f(&mut def)?;
        def.end()
    }

    pub fn production(&self, id: ProductionID) -> &Production {
        &self.productions[&id]
    }

    /// All declared alternatives for the given nonterminal, in declaration
    /// order. Empty for a nonterminal without alternatives.
    pub fn productions_for(
        &self,
        left: NonterminalID,
    ) -> impl Iterator<Item = (ProductionID, &Production)> + '_ {
        self.productions
            .iter()
            .filter(move |(_, p)| p.left == left)
            .map(|(id, p)| (*id, p))
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#### terminals: ")?;
        for (i, t) in self.terminals.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "\"{}\"", t.name)?;
        }
        write!(f, "\n#### nonterminals: ")?;
        for (i, n) in self.nonterminals.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", n)?;
        }
        writeln!(f, "\n#### start: {}", self.nonterminals[&self.start_symbol])?;
        writeln!(f, "#### productions:")?;
        for p in self.productions.values() {
            writeln!(f, "- {}", p.display(self))?;
        }
        Ok(())
    }
}

/// The contextural values for building a `Grammar`.
#[derive(Debug)]
pub struct GrammarDef {
    terminals: Map<TerminalID, TerminalData>,
    nonterminals: Map<NonterminalID, String>,
    productions: Map<ProductionID, Production>,
    start: Option<NonterminalID>,
    next_terminal: u16,
    next_nonterminal: u16,
    next_production: u16,
}

impl GrammarDef {
    /// Declare a terminal symbol with the given spelling.
    pub fn terminal(&mut self, name: &str) -> Result<TerminalID, GrammarDefError> {
        if self.terminals.values().any(|t| t.name == name) {
            return Err(GrammarDefError::DuplicateTerminal(name.to_owned()));
        }
        let id = TerminalID(self.next_terminal);
        self.next_terminal += 1;
        self.terminals.insert(
            id,
            TerminalData {
                name: name.to_owned(),
            },
        );
        Ok(id)
    }

    /// Declare a nonterminal symbol used in this grammar.
    pub fn nonterminal(&mut self, name: &str) -> Result<NonterminalID, GrammarDefError> {
        if self.nonterminals.values().any(|n| n == name) {
            return Err(GrammarDefError::DuplicateNonterminal(name.to_owned()));
        }
        let id = NonterminalID(self.next_nonterminal);
        self.next_nonterminal += 1;
        self.nonterminals.insert(id, name.to_owned());
        Ok(id)
    }

    /// Add a production rule for `left`.
    pub fn production<I>(
        &mut self,
        left: NonterminalID,
        right: I,
    ) -> Result<ProductionID, GrammarDefError>
    where
        I: IntoIterator<Item = SymbolID>,
    {
        let right: Vec<_> = right.into_iter().collect();
        if self
            .productions
            .values()
            .any(|p| p.left == left && p.right == right)
        {
            return Err(GrammarDefError::DuplicateProduction(
                self.nonterminals[&left].clone(),
            ));
        }
        let id = ProductionID(self.next_production);
        self.next_production += 1;
        self.productions.insert(id, Production { left, right });
        Ok(id)
    }

    /// Specify the start symbol for this grammar.
    pub fn start_symbol(&mut self, start: NonterminalID) {
        self.start.replace(start);
    }

    fn end(mut self) -> Result<Grammar, GrammarDefError> {
        // Unless specified, the first declared nonterminal becomes the start
        // symbol.
        let start_symbol = match self.start.take() {
            Some(start) => start,
            None => self
                .nonterminals
                .keys()
                .next()
                .copied()
                .ok_or(GrammarDefError::EmptyGrammar)?,
        };

        // The start symbol and every nonterminal occurring in a right-hand
        // side must have at least one alternative. Left unchecked, such a
        // symbol would make the recognizer silently reject derivations that
        // pass through it.
        let mut referenced: Set<NonterminalID> = Set::default();
        referenced.insert(start_symbol);
        for p in self.productions.values() {
            for s in &p.right {
                if let SymbolID::N(n) = s {
                    referenced.insert(*n);
                }
            }
        }
        for n in &referenced {
            if self.productions.values().all(|p| p.left != *n) {
                return Err(GrammarDefError::MissingAlternatives(
                    self.nonterminals[n].clone(),
                ));
            }
        }

        Ok(Grammar {
            terminals: self.terminals,
            nonterminals: self.nonterminals,
            productions: self.productions,
            start_symbol,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GrammarDefError {
    #[error("the terminal `{0}' has already been declared")]
    DuplicateTerminal(String),

    #[error("the nonterminal `{0}' has already been declared")]
    DuplicateNonterminal(String),

    #[error("duplicate production rule for nonterminal `{0}'")]
    DuplicateProduction(String),

    #[error("the nonterminal `{0}' has no declared alternative")]
    MissingAlternatives(String),

    #[error("no nonterminal symbols are declared")]
    EmptyGrammar,
}

#[cfg(test)]
mod tests {
    use super::*;
    use SymbolID::*;

    #[test]
    fn alternatives_in_declaration_order() {
        let grammar = Grammar::define(|g| {
            let x = g.terminal("x")?;
            let y = g.terminal("y")?;
            let a = g.nonterminal("A")?;
            g.production(a, [T(x), T(y)])?;
            g.production(a, [T(x)])?;
            g.production(a, [])?;
            Ok(())
        })
        .unwrap();

        let alts: Vec<_> = grammar
            .productions_for(grammar.start_symbol)
            .map(|(_, p)| p.right.len())
            .collect();
        assert_eq!(alts, vec![2, 1, 0]);
    }

    #[test]
    fn default_start_symbol_is_first_nonterminal() {
        let grammar = Grammar::define(|g| {
            let x = g.terminal("x")?;
            let a = g.nonterminal("A")?;
            let b = g.nonterminal("B")?;
            g.production(a, [N(b)])?;
            g.production(b, [T(x)])?;
            Ok(())
        })
        .unwrap();
        assert_eq!(grammar.nonterminals[&grammar.start_symbol], "A");
    }

    #[test]
    fn duplicate_terminal_is_rejected() {
        let err = Grammar::define(|g| {
            g.terminal("x")?;
            g.terminal("x")?;
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, GrammarDefError::DuplicateTerminal(name) if name == "x"));
    }

    #[test]
    fn duplicate_production_is_rejected() {
        let err = Grammar::define(|g| {
            let x = g.terminal("x")?;
            let a = g.nonterminal("A")?;
            g.production(a, [T(x)])?;
            g.production(a, [T(x)])?;
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, GrammarDefError::DuplicateProduction(name) if name == "A"));
    }

    #[test]
    fn referenced_nonterminal_without_alternatives_is_rejected() {
        let err = Grammar::define(|g| {
            let a = g.nonterminal("A")?;
            let b = g.nonterminal("B")?;
            g.production(a, [N(b)])?;
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, GrammarDefError::MissingAlternatives(name) if name == "B"));
    }

    #[test]
    fn start_symbol_without_alternatives_is_rejected() {
        let err = Grammar::define(|g| {
            let x = g.terminal("x")?;
            let a = g.nonterminal("A")?;
            let b = g.nonterminal("B")?;
            g.start_symbol(b);
            g.production(a, [T(x)])?;
            Ok(())
        })
        .unwrap_err();
        assert!(matches!(err, GrammarDefError::MissingAlternatives(name) if name == "B"));
    }

    #[test]
    fn production_display_marks_empty_rhs() {
        let grammar = Grammar::define(|g| {
            let a = g.nonterminal("A")?;
            g.production(a, [])?;
            Ok(())
        })
        .unwrap();
        let (_, p) = grammar.productions_for(grammar.start_symbol).next().unwrap();
        assert_eq!(p.display(&grammar).to_string(), "A -> ε");
    }
}
