use anyhow::Context as _;
use charter::{earley, grammar::Grammar, samples};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print the grammar before recognizing.
    #[arg(long)]
    grammar: bool,

    /// Dump the final chart of each sentence.
    #[arg(long)]
    chart: bool,

    /// Sentences to recognize, tokenized on whitespace.
    sentences: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!("parsed CLI args = {:?}", args);

    let grammar =
        Grammar::define(samples::tiny_english).context("failed to define the sample grammar")?;
    if args.grammar {
        println!("{}", grammar);
    }

    let sentences = if args.sentences.is_empty() {
        vec![
            "they can fish in rivers in December".to_owned(),
            "they can fish".to_owned(),
        ]
    } else {
        args.sentences
    };

    for sentence in &sentences {
        let tokens: Vec<&str> = sentence.split_whitespace().collect();
        let result = earley::recognize(&grammar, &tokens);
        if args.chart {
            print!("{}", result.chart().display(&grammar));
        }
        match result.accepting_items() {
            0 => println!("{:?} -> rejected", tokens),
            k => println!("{:?} -> accepted ({} accepting item(s))", tokens, k),
        }
    }

    Ok(())
}
