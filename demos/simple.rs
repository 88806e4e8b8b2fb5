use clap::{Parser, ValueEnum};
use nnf_rs::eval::Eval;
use nnf_rs::expr::Expr;
use nnf_rs::facts::FactSet;
use nnf_rs::normalize::Normalizer;

#[derive(Debug, Copy, Clone, ValueEnum)]
enum Fixture {
    /// NOT (1 OR 2 OR 3)
    DeMorganOr,
    /// NOT (1 AND 2 AND 3)
    DeMorganAnd,
    /// NOT NOT NOT 1
    TripleNot,
    /// NOT (1 AND (2 OR 3))
    Mixed,
}

impl Fixture {
    fn build(self) -> Expr {
        let leaves = || (1..=3).map(Expr::leaf);
        match self {
            Fixture::DeMorganOr => !Expr::or(leaves()),
            Fixture::DeMorganAnd => !Expr::and(leaves()),
            Fixture::TripleNot => !!!Expr::leaf(1),
            Fixture::Mixed => !(Expr::from(1) & (Expr::from(2) | Expr::from(3))),
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Normalize a sample expression and evaluate it")]
struct Cli {
    /// Expression to normalize.
    #[arg(value_enum, default_value = "mixed")]
    fixture: Fixture,

    /// Facts that are true, e.g. `--facts 1,3`.
    #[arg(long, value_delimiter = ',')]
    facts: Vec<i32>,

    /// Recursion limit for the normalizer.
    #[arg(long, default_value_t = Normalizer::default().max_depth)]
    max_depth: usize,

    /// Print the normalized tree in DOT format.
    #[arg(long)]
    dot: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let cli = Cli::parse();
    let facts: FactSet = cli.facts.iter().copied().collect();

    let expr = cli.fixture.build();
    println!("expr = {}", expr);

    let nnf = Normalizer::new(cli.max_depth).run(expr.clone())?;
    println!("nnf  = {}", nnf);
    print!("{}", nnf.debug_string());

    println!("facts = {}", facts);
    println!("eval(expr) = {}", expr.eval(&facts));
    println!("eval(nnf)  = {}", nnf.eval(&facts));

    if cli.dot {
        println!("{}", nnf.to_dot()?);
    }

    Ok(())
}
