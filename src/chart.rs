//! Earley items and the recognition chart.

use crate::{
    grammar::{Grammar, ProductionID, SymbolID},
    types::Set,
    util::display_fn,
};
use std::fmt;

/// An Earley item: a production with a dot position into its right-hand side
/// and the chart column where the match began.
///
/// Items are value types; an item is never mutated in place, only superseded
/// by the one returned from [`advanced`](Self::advanced).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub production: ProductionID,
    pub dot: u16,
    pub origin: usize,
}

impl Item {
    /// The item predicting `production` at `origin`, with nothing matched yet.
    pub fn start(production: ProductionID, origin: usize) -> Self {
        Self {
            production,
            dot: 0,
            origin,
        }
    }

    pub fn is_complete(&self, g: &Grammar) -> bool {
        usize::from(self.dot) == g.production(self.production).right.len()
    }

    /// The symbol right after the dot, or `None` when the item is complete.
    pub fn next_symbol(&self, g: &Grammar) -> Option<SymbolID> {
        g.production(self.production)
            .right
            .get(usize::from(self.dot))
            .copied()
    }

    pub fn advanced(&self) -> Self {
        Self {
            dot: self.dot + 1,
            ..*self
        }
    }

    // `"[NP -> N . PP, from 2]"`
    pub fn display<'g>(&'g self, g: &'g Grammar) -> impl fmt::Display + 'g {
        display_fn(|f| {
            let production = g.production(self.production);
            write!(f, "[{} ->", g.nonterminals[&production.left])?;
            for (i, r) in production.right.iter().enumerate() {
                if i == usize::from(self.dot) {
                    f.write_str(" .")?;
                }
                match r {
                    SymbolID::N(n) => write!(f, " {}", g.nonterminals[n])?,
                    SymbolID::T(t) => write!(f, " \"{}\"", g.terminals[t].name)?,
                }
            }
            if usize::from(self.dot) == production.right.len() {
                f.write_str(" .")?;
            }
            write!(f, ", from {}]", self.origin)
        })
    }
}

/// The dynamic-programming table of the recognizer: one deduplicated item set
/// per input position, indexed `0..=n` for an input of `n` tokens.
///
/// Columns only ever grow; no item is removed once inserted.
#[derive(Debug)]
pub struct Chart {
    columns: Vec<Set<Item>>,
}

impl Chart {
    /// Create an empty chart for an input of `len` tokens.
    pub fn new(len: usize) -> Self {
        Self {
            columns: (0..=len).map(|_| Set::default()).collect(),
        }
    }

    /// The number of columns, always one more than the input length.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Insert `item` into the set at `column` unless already present.
    ///
    /// Returns `true` iff the column changed; the recognizer uses this as the
    /// dirty flag of its fixpoint loop.
    pub fn add(&mut self, column: usize, item: Item) -> bool {
        self.columns[column].insert(item)
    }

    pub fn column(&self, column: usize) -> &Set<Item> {
        &self.columns[column]
    }

    /// The item at `index` within `column`, in insertion order.
    pub fn item(&self, column: usize, index: usize) -> Item {
        self.columns[column][index]
    }

    pub fn display<'g>(&'g self, g: &'g Grammar) -> impl fmt::Display + 'g {
        display_fn(|f| {
            for (i, column) in self.columns.iter().enumerate() {
                write!(f, "Chart[{}]:", i)?;
                for (j, item) in column.iter().enumerate() {
                    if j > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {}", item.display(g))?;
                }
                writeln!(f)?;
            }
            Ok(())
        })
    }
}
