use std::{
    env,
    io::{self, Read},
    process,
    time::Instant,
};

use natural_math::{
    display_error,
    handler::handler::{Request, RequestHandler},
    lexer::lexer::tokenize,
    parser::parser::parse,
    serializer::serializer::output,
};

const USAGE: &str = "usage: natural-math <sentence...> | natural-math --json < request.json";

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            process::exit(if args.is_empty() { 2 } else { 0 });
        }
        Some("--json") if args.len() == 1 => answer_request(),
        Some("--json") => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
        Some(_) => translate_sentence(&args.join(" ")),
    }
}

fn translate_sentence(sentence: &str) {
    let start = Instant::now();

    let tokens = match tokenize(sentence) {
        Ok(tokens) => tokens,
        Err(error) => {
            println!("{}", display_error(&error, sentence));
            process::exit(1);
        }
    };

    println!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let tree = match parse(tokens) {
        Ok(tree) => tree,
        Err(error) => {
            println!("{}", display_error(&error, sentence));
            process::exit(1);
        }
    };

    println!("Parsed in {:?}", parse_start.elapsed());

    let output_start = Instant::now();
    let translated = output(&tree);

    println!("Serialized in {:?}", output_start.elapsed());
    println!("Total time: {:?}", start.elapsed());
    println!("{}", translated);
}

fn answer_request() {
    let mut input = String::new();
    if let Err(error) = io::stdin().read_to_string(&mut input) {
        eprintln!("Failed to read request: {}", error);
        process::exit(1);
    }

    let request: Request = match serde_json::from_str(&input) {
        Ok(request) => request,
        Err(error) => {
            eprintln!("Invalid request: {}", error);
            process::exit(1);
        }
    };

    let responses = RequestHandler::new(request).answer();

    match serde_json::to_string(&responses) {
        Ok(json) => println!("{}", json),
        Err(error) => {
            eprintln!("Failed to encode response: {}", error);
            process::exit(1);
        }
    }
}
