//! Run the known-answer table and report every case.
//!
//! Reads a table from the file given as the only argument, or uses the
//! built-in reference table.

use std::{env, fs, process};

use rand_philox::kat::{parse, KAT_VECTORS};

fn main() {
    let table = match env::args().nth(1) {
        Some(path) => fs::read_to_string(&path).unwrap_or_else(|e| {
            eprintln!("cannot read {}: {}", path, e);
            process::exit(2);
        }),
        None => KAT_VECTORS.to_owned(),
    };

    let cases = parse(&table).unwrap_or_else(|e| {
        eprintln!("{}", e);
        process::exit(2);
    });

    let mut failed = 0;
    for case in &cases {
        let name = format!("{}-{}", case.kind, case.rounds.get());
        match case.check() {
            Ok(true) => println!("ok    {:<14} {:x?}", name, case.expected),
            Ok(false) => {
                failed += 1;
                println!("FAIL  {:<14} {:x?} != {:x?}", name, case.run(), case.expected);
            }
            Err(e) => {
                failed += 1;
                println!("ERROR {:<14} {}", name, e);
            }
        }
    }
    println!("{} cases, {} failed", cases.len(), failed);
    if failed > 0 {
        process::exit(1);
    }
}
