//! Build script to generate embedded word lists
//!
//! Reads one solutions list and one valid-guess list per word length and
//! generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const LENGTHS: [usize; 4] = [4, 5, 6, 7];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("wordlists.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word lists").unwrap();
    writeln!(output).unwrap();

    for length in LENGTHS {
        generate_word_list(
            &mut output,
            &format!("data/solutions_{length}.txt"),
            &format!("SOLUTIONS_{length}"),
            &format!("Secret candidates with {length} letters"),
            length,
        );
        generate_word_list(
            &mut output,
            &format!("data/valid_{length}.txt"),
            &format!("VALID_{length}"),
            &format!("Accepted guesses with {length} letters"),
            length,
        );

        println!("cargo:rerun-if-changed=data/solutions_{length}.txt");
        println!("cargo:rerun-if-changed=data/valid_{length}.txt");
    }
}

fn generate_word_list(
    output: &mut fs::File,
    input_path: &str,
    const_name: &str,
    doc_comment: &str,
    length: usize,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    for word in &words {
        assert!(
            word.len() == length && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{input_path}: '{word}' is not a {length}-letter lowercase word"
        );
    }

    writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
