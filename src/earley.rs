//! The Earley recognition engine.
//!
//! A dynamic-programming closure over partially matched productions: each
//! chart column is saturated under the predictor/completer/scanner rules
//! before the next column is visited, with no backtracking. Ambiguity and
//! left recursion need no special handling.

use crate::{
    chart::{Chart, Item},
    grammar::{Grammar, SymbolID},
};

/// The outcome of a recognition run.
#[derive(Debug)]
pub struct Recognition {
    chart: Chart,
    accepting: usize,
}

impl Recognition {
    pub fn is_accepted(&self) -> bool {
        self.accepting > 0
    }

    /// The number of distinct accepting items in the final chart column.
    ///
    /// Zero exactly when the input is rejected. A value above one signals
    /// that several start alternatives completed over the whole input; it is
    /// an ambiguity indicator, not a derivation count, since equal items are
    /// deduplicated regardless of how many derivations produced them.
    pub fn accepting_items(&self) -> usize {
        self.accepting
    }

    /// The populated chart, for inspection and pretty-printing.
    pub fn chart(&self) -> &Chart {
        &self.chart
    }
}

/// Decide whether `tokens` is derivable from the start symbol of `g`.
///
/// Pure and deterministic; the chart is rebuilt on every call. Tokens that
/// match no terminal simply fail to scan, so unknown input is an ordinary
/// rejection rather than an error.
#[tracing::instrument(skip_all, fields(len = tokens.len()))]
pub fn recognize(g: &Grammar, tokens: &[&str]) -> Recognition {
    let n = tokens.len();
    let mut chart = Chart::new(n);

    for (id, _) in g.productions_for(g.start_symbol) {
        chart.add(0, Item::start(id, 0));
    }

    for i in 0..=n {
        // Saturate column i. A single pass is not enough: a completion can
        // enable further predictions and completions in the same column
        // (unit and nullable productions), so passes repeat until one adds
        // nothing. Items appended mid-pass are picked up by the next pass.
        let mut changed = true;
        while changed {
            changed = false;
            let snapshot = chart.column(i).len();
            for idx in 0..snapshot {
                let item = chart.item(i, idx);
                match item.next_symbol(g) {
                    // Completer: the match that began at `item.origin` is
                    // done, so every item parked there waiting on its
                    // left-hand side moves forward.
                    None => {
                        let left = g.production(item.production).left;
                        let parked = chart.column(item.origin).len();
                        for prev_idx in 0..parked {
                            let prev = chart.item(item.origin, prev_idx);
                            if prev.next_symbol(g) == Some(SymbolID::N(left)) {
                                changed |= chart.add(i, prev.advanced());
                            }
                        }
                    }

                    // Predictor: expand the expected nonterminal in place.
                    Some(SymbolID::N(next)) => {
                        for (id, _) in g.productions_for(next) {
                            changed |= chart.add(i, Item::start(id, i));
                        }
                    }

                    // Scanner: the only step that crosses columns. Past the
                    // last token this is a guarded no-op.
                    Some(SymbolID::T(next)) => {
                        if i < n && tokens[i] == g.terminals[&next].name {
                            changed |= chart.add(i + 1, item.advanced());
                        }
                    }
                }
            }
        }
        tracing::trace!("column {} closed with {} items", i, chart.column(i).len());
    }

    let accepting = chart
        .column(n)
        .iter()
        .filter(|item| {
            item.origin == 0
                && item.is_complete(g)
                && g.production(item.production).left == g.start_symbol
        })
        .count();
    tracing::debug!(accepting, "recognition finished");

    Recognition { chart, accepting }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::SymbolID::*;

    #[test]
    fn left_recursive_grammar_terminates() {
        // E -> E "+" "n" | "n"
        let grammar = Grammar::define(|g| {
            let plus = g.terminal("+")?;
            let num = g.terminal("n")?;
            let e = g.nonterminal("E")?;
            g.production(e, [N(e), T(plus), T(num)])?;
            g.production(e, [T(num)])?;
            Ok(())
        })
        .unwrap();

        assert!(recognize(&grammar, &["n", "+", "n", "+", "n"]).is_accepted());
        assert!(!recognize(&grammar, &["n", "+"]).is_accepted());
        assert!(!recognize(&grammar, &["+", "n"]).is_accepted());
    }

    #[test]
    fn nullable_production_completes_in_place() {
        // S -> A "x"; A -> ε. The completion of A happens in the same column
        // that predicted it.
        let grammar = Grammar::define(|g| {
            let x = g.terminal("x")?;
            let s = g.nonterminal("S")?;
            let a = g.nonterminal("A")?;
            g.production(s, [N(a), T(x)])?;
            g.production(a, [])?;
            Ok(())
        })
        .unwrap();

        assert!(recognize(&grammar, &["x"]).is_accepted());
        assert!(!recognize(&grammar, &[]).is_accepted());
    }

    #[test]
    fn single_token_grammar_fills_both_columns() {
        let grammar = Grammar::define(|g| {
            let x = g.terminal("x")?;
            let s = g.nonterminal("S")?;
            g.production(s, [T(x)])?;
            Ok(())
        })
        .unwrap();

        let result = recognize(&grammar, &["x"]);
        assert_eq!(result.chart().len(), 2);
        // Column 0 keeps its seed item, column 1 the completed one.
        assert_eq!(result.chart().column(0).len(), 1);
        assert_eq!(result.chart().column(1).len(), 1);
    }
}
