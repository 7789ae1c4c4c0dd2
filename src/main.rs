use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use message_translator::{
    BinaryReader, BinaryWriter, EnglishReader, EnglishWriter, MessageKind, MessageReader,
    MorseReader, MorseWriter, Result, Translator,
};

fn main() {
    env_logger::init();

    display_welcome();

    let mut current_stem: Option<String> = None;

    loop {
        display_options();

        let selection = match read_selection() {
            Some(selection) => selection,
            None => break, // stdin closed
        };

        let outcome = match selection {
            1 => open_file(&mut current_stem),
            2 => display_file(current_stem.as_deref()),
            3 => translate_current(current_stem.as_deref(), MessageKind::Morse),
            4 => translate_current(current_stem.as_deref(), MessageKind::Binary),
            5 => translate_current(current_stem.as_deref(), MessageKind::English),
            6 => break,
            _ => {
                println!("* Invalid Selection - Please Reenter *\n");
                continue;
            }
        };

        if let Err(e) = outcome {
            println!("\n* ERROR: {} *\n", e);
        }
    }

    println!("Leaving program ...");
}

fn display_welcome() {
    println!("Welcome to the Morse Code Translator Program\n");
    println!("This program translates messages between English,");
    println!("Morse Code and Binary Code.\n");
    println!("Messages can contain upper case letters only.");
    println!("(No punctuation marks are allowed.)\n");
}

fn display_options() {
    println!("Menu Options");
    println!("1 - Open File");
    println!("2 - Display File");
    println!("3 - Translate to Morse Code");
    println!("4 - Translate to Binary");
    println!("5 - Translate to English");
    println!("6 - Quit");
}

/// Prompts until a number is entered; `None` once stdin is closed.
fn read_selection() -> Option<i32> {
    loop {
        let line = prompt("\nEnter Selection: ")?;
        match line.trim().parse() {
            Ok(selection) => return Some(selection),
            Err(_) => println!("Please enter a digit"),
        }
    }
}

fn prompt(message: &str) -> Option<String> {
    print!("{}", message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line),
    }
}

// --- OPTION 1
fn open_file(current_stem: &mut Option<String>) -> Result<()> {
    let name = match prompt("Enter file name (without .txt): ") {
        Some(line) => line.trim().to_string(),
        None => return Ok(()),
    };

    // Open eagerly so a bad name is reported here, not at translation time.
    File::open(format!("{}.txt", name))?;

    println!("File {}.txt opened.\n", name);
    *current_stem = Some(name);
    Ok(())
}

// --- OPTION 2
fn display_file(current_stem: Option<&str>) -> Result<()> {
    let stem = match current_stem {
        Some(stem) => stem,
        None => {
            println!("* NO FILE CURRENTLY OPEN *\n");
            return Ok(());
        }
    };

    println!("\nContents of File {}.txt:\n", stem);

    let file = BufReader::new(File::open(format!("{}.txt", stem))?);
    for line in file.lines() {
        println!("{}", line?);
    }
    println!();
    Ok(())
}

// --- OPTIONS 3-5
fn translate_current(current_stem: Option<&str>, target: MessageKind) -> Result<()> {
    let stem = match current_stem {
        Some(stem) => stem,
        None => {
            println!("* NO FILE CURRENTLY OPEN TO TRANSLATE *\n");
            return Ok(());
        }
    };

    // The reader kind comes from the opened file's name suffix; the writer
    // kind is fixed by the menu selection.
    let source_kind = MessageKind::from_stem(stem)?;
    let source = BufReader::new(File::open(format!("{}.txt", stem))?);
    let reader: Box<dyn MessageReader> = match source_kind {
        MessageKind::English => Box::new(EnglishReader::new(source)),
        MessageKind::Morse => Box::new(MorseReader::new(source)?),
        MessageKind::Binary => Box::new(BinaryReader::new(source)?),
    };

    let output_name = target.output_file_name(stem);
    let sink = BufWriter::new(File::create(&output_name)?);

    match target {
        MessageKind::English => Translator::new(reader, EnglishWriter::new(sink)).translate()?,
        MessageKind::Morse => Translator::new(reader, MorseWriter::new(sink)?).translate()?,
        MessageKind::Binary => Translator::new(reader, BinaryWriter::new(sink)?).translate()?,
    }

    println!("Translated {}.txt to {}\n", stem, output_name);
    Ok(())
}
