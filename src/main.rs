use std::env::args;
use std::fs::{read_to_string, File};
use std::io::{self, Result};

use minicc::ast::Dump;
use minicc::minic;

fn main() -> Result<()> {
    // minicc <input> [-o <output>]
    let mut args = args();
    args.next();
    let input = args.next().unwrap();

    let source = read_to_string(input)?;

    let ast = minic::CompUnitParser::new().parse(&source).unwrap();

    match args.next().as_deref() {
        Some("-o") => {
            let mut output = File::create(args.next().unwrap())?;
            ast.dump(0, &mut output)?;
        }
        _ => {
            let stdout = io::stdout();
            ast.dump(0, &mut stdout.lock())?;
        }
    }

    Ok(())
}
