use std::env;
use std::process;

use tinytac::evaluate_expression;

fn main() {
  env_logger::init();

  let args: Vec<String> = env::args().collect();
  if args.len() != 2 {
    let program = args.first().map(String::as_str).unwrap_or("tinytac");
    eprintln!("usage: {program} <expr>");
    process::exit(1);
  }

  match evaluate_expression(&args[1]) {
    Ok(result) => {
      print!("{}", result.ir);
      println!("{}", result.value);
    }
    Err(err) => {
      eprintln!("{err}");
      process::exit(1);
    }
  }
}
