//! Ready-made grammars, usable with [`Grammar::define`].
//!
//! [`Grammar::define`]: crate::grammar::Grammar::define

use crate::grammar::{GrammarDef, GrammarDefError, SymbolID::*};

/// A miniature natural-language grammar over the vocabulary
/// {can, fish, they, rivers, in, December}.
///
/// Left-recursive (`VP -> VP PP`) and ambiguous: "they can fish" reads both
/// as "they are able to fish" and "they put fish into cans".
pub fn tiny_english(g: &mut GrammarDef) -> Result<(), GrammarDefError> {
    let can = g.terminal("can")?;
    let fish = g.terminal("fish")?;
    let they = g.terminal("they")?;
    let rivers = g.terminal("rivers")?;
    let december = g.terminal("December")?;
    let r#in = g.terminal("in")?;

    let s = g.nonterminal("S")?;
    let np = g.nonterminal("NP")?;
    let vp = g.nonterminal("VP")?;
    let pp = g.nonterminal("PP")?;
    let n = g.nonterminal("N")?;
    let v = g.nonterminal("V")?;
    let p = g.nonterminal("P")?;

    g.start_symbol(s);

    g.production(s, [N(np), N(vp)])?;

    g.production(np, [N(n), N(pp)])?;
    g.production(np, [N(n)])?;

    g.production(pp, [N(p), N(np)])?;

    g.production(vp, [N(vp), N(pp)])?;
    g.production(vp, [N(v), N(vp)])?;
    g.production(vp, [N(v), N(np)])?;
    g.production(vp, [N(v)])?;

    g.production(n, [T(can)])?;
    g.production(n, [T(fish)])?;
    g.production(n, [T(they)])?;
    g.production(n, [T(rivers)])?;
    g.production(n, [T(december)])?;

    g.production(p, [T(r#in)])?;

    g.production(v, [T(can)])?;
    g.production(v, [T(they)])?;

    Ok(())
}

/// A nullable start symbol with a unit chain: `A -> B C; B -> ε | "b"; C -> B`.
///
/// Accepts the empty input and exercises same-column predictor/completer
/// interaction.
pub fn nullable_chain(g: &mut GrammarDef) -> Result<(), GrammarDefError> {
    let b_tok = g.terminal("b")?;

    let a = g.nonterminal("A")?;
    let b = g.nonterminal("B")?;
    let c = g.nonterminal("C")?;

    g.start_symbol(a);

    g.production(a, [N(b), N(c)])?;
    g.production(b, [])?;
    g.production(b, [T(b_tok)])?;
    g.production(c, [N(b)])?;

    Ok(())
}
