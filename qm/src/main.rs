#![allow(missing_docs)]

use std::io::{BufRead, Write};

use clap::Parser;
use qmtk_expr::{Assignments, ParsedExpr};
use qmtk_qm::Minimizer;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Expression such as "F(A,B,C)=AB+^AC"; read from standard input when omitted.
    expr: Option<String>,

    /// Skip printing the truth table of the expanded function.
    #[clap(long)]
    no_truth_table: bool,

    /// Print the level-by-level grouping tables.
    #[clap(short, long)]
    groups: bool,

    /// Emit the result as a JSON object instead of tables.
    #[clap(long)]
    json: bool,
}

fn read_expression() -> color_eyre::Result<String> {
    print!("Quine-McCluskey\n[*] Enter a logical expression\nInput: ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn print_truth_table(parsed: &ParsedExpr, minimizer: &Minimizer) -> color_eyre::Result<()> {
    let width = minimizer.width();
    println!("\nTruth table: {}", minimizer.sop());
    println!("{} | f()", parsed.variables());
    println!("{}-|----", "-".repeat(width));
    for assignment in Assignments::new(width) {
        let value = minimizer.sop().evaluate(&assignment)?;
        println!("{assignment} |  {}", value as u8);
    }
    Ok(())
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;
    qmtk_logger::setup();

    let line = match args.expr {
        Some(expr) => expr,
        None => read_expression()?,
    };

    let parsed = qmtk_expr::parse_expression(&line)?;
    let function = parsed.to_function()?;
    log::info!(
        "minimizing {}({}) with {} terms",
        parsed.name(),
        parsed.variables(),
        function.len()
    );

    let mut minimizer = Minimizer::new(&function)?;

    if !args.no_truth_table && !args.json {
        print_truth_table(&parsed, &minimizer)?;
    }

    minimizer.compress();

    if args.groups && !args.json {
        println!();
        for (level, table) in minimizer.levels().iter().enumerate() {
            println!("level {level}:");
            print!("{table}");
        }
    }

    let primes = minimizer.prime_implicants();

    if args.json {
        println!(
            "{}",
            serde_json::to_string(&json!({
                "name": parsed.name(),
                "variables": parsed.variables(),
                "prime_implicants": Vec::from_iter(primes.iter().map(|term| term.to_string())),
            }))?
        );
        return Ok(());
    }

    println!("\nPrime implicants:");
    for term in &primes {
        let literal = term.literal_string(parsed.variables());
        if literal.is_empty() {
            println!("{term}  (always true)");
        } else {
            println!("{term}  {literal}");
        }
    }

    Ok(())
}
