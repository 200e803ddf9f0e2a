use std::env;
use std::fs;
use std::process;

use frets::{ChordFamily, ChordFlags, ChordType, Guitar, GuitarMode, TuningMode};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: frets <sheet.tab> [output.txt]
       frets --chord <family> [type] [--strings 6|7|8] [--tuning <name>]";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

/// Look up a single chord shape and print its text form and tab
fn show_chord(args: &[String]) {
    let mut positional = Vec::new();
    let mut strings = "7".to_string();
    let mut tuning: Option<String> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--strings" => match iter.next() {
                Some(value) => strings = value.clone(),
                None => fail(USAGE),
            },
            "--tuning" => match iter.next() {
                Some(value) => tuning = Some(value.clone()),
                None => fail(USAGE),
            },
            _ => positional.push(arg.as_str()),
        }
    }

    if positional.is_empty() || positional.len() > 2 {
        fail(USAGE);
    }

    let result = (|| {
        let family: ChordFamily = positional[0].parse()?;
        let chord_type: ChordType = match positional.get(1) {
            Some(name) => name.parse()?,
            None => ChordType::Major,
        };
        let mode: GuitarMode = strings.parse()?;
        let guitar = match &tuning {
            Some(name) => Guitar::with_tuning(mode, name.parse::<TuningMode>()?)?,
            None => Guitar::new(mode),
        };
        let chord = guitar.play_shape(ChordFlags::None, family, chord_type)?;
        let tab = guitar.print_chords(std::slice::from_ref(&chord), 1)?;
        Ok::<_, frets::FretsError>(format!("{}{} {}\n\n{}", family, chord_type.symbol(), chord, tab))
    })();

    match result {
        Ok(text) => print!("{}", text),
        Err(e) => fail(format!("Error: {}", e)),
    }
}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        fail(USAGE);
    }

    match args[1].as_str() {
        "-h" | "--help" => {
            println!("{}", USAGE);
            return;
        }
        "--chord" => {
            show_chord(&args[2..]);
            return;
        }
        _ => {}
    }

    let input_path = &args[1];
    let output_path = args.get(2);

    // Read input file
    let source = match fs::read_to_string(input_path) {
        Ok(content) => content,
        Err(e) => fail(format!("Error reading file '{}': {}", input_path, e)),
    };

    let tab = match frets::render_sheet(&source) {
        Ok(tab) => tab,
        Err(e) => fail(format!("Error in '{}': {}", input_path, e)),
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &tab) {
                fail(format!("Error writing to '{}': {}", path, e));
            }
            eprintln!("Wrote tablature to {}", path);
        }
        None => {
            print!("{}", tab);
        }
    }
}
