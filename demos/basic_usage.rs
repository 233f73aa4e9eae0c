// ============================================================================
// Basic Usage Example
// ============================================================================

use roman_numerals::prelude::*;
use roman_numerals::utils::init_logging;

fn main() {
    init_logging();

    println!("=== Roman Numerals Example ===\n");

    println!("Integer -> numeral:");
    for n in [4, 9, 14, 40, 90, 400, 900, 1984, 3999] {
        match to_numeral(n) {
            Ok(numeral) => println!("  {:>5} -> {}", n, numeral),
            Err(e) => println!("  {:>5} -> error: {}", n, e),
        }
    }

    if let Err(e) = to_numeral(4000) {
        println!("  {:>5} -> error: {}\n", 4000, e);
    }

    println!("Validation and parsing:");
    for s in ["MCMLXXXIV", "IIIX", "IIII", "VV", "IC", ""] {
        let value = match parse(s) {
            Ok(v) => v.to_string(),
            Err(e) => e.to_string(),
        };
        println!("  {:<12} valid={:<5} {}", format!("{:?}", s), validate(s), value);
    }

    println!("\nBatch parsing (collect all):");
    let config = BatchConfig::collect_all("demo".to_string());
    let parser = match NumeralParser::with_config(["XII", "XLII", "IC", "MMXXIV"], config) {
        Ok(parser) => parser,
        Err(e) => {
            println!("  invalid config: {}", e);
            return;
        },
    };
    println!("  inputs: {}", parser);
    for result in parser {
        match result {
            Ok(v) => println!("  ok    {}", v),
            Err(e) => println!("  error {}", e),
        }
    }

    println!("\nBatch parsing (fail fast):");
    let parser = NumeralParser::new(["XII", "XLII", "IC", "MMXXIV"]);
    match parser.as_parsed_list() {
        Ok(values) => println!("  values: {:?}", values),
        Err(e) => println!("  stopped: {}", e),
    }
}
