use polyeq::Equation;
use std::io::{BufRead, BufReader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();

    for line in BufReader::new(stdin.lock()).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let equation: Equation = match line.parse() {
            Ok(equation) => equation,
            Err(e) => {
                eprintln!("Unable to parse \"{}\": {}", line, e);
                continue;
            },
        };

        println!("Solving {} ({})", equation, equation.degree());

        match equation.solve() {
            Ok(roots) => {
                for root in &roots {
                    println!("  x = {}", root);
                }
            },
            Err(e) => eprintln!("Unable to solve \"{}\": {}", equation, e),
        }
    }

    Ok(())
}
