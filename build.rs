//! Build script to generate the embedded word-frequency corpus
//!
//! Reads `word count` lines and generates Rust source code with a const array.
//! A malformed line fails the build.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_corpus(
        "data/word_freq.txt",
        &Path::new(&out_dir).join("corpus.rs"),
        "DEFAULT_CORPUS",
        "Word frequency corpus (word, occurrence count)",
    );

    // Rebuild if the corpus changes
    println!("cargo:rerun-if-changed=data/word_freq.txt");
}

fn generate_corpus(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(String, u64)> = content
        .trim_end()
        .lines()
        .enumerate()
        .map(|(i, line)| {
            let fields: Vec<&str> = line.split_whitespace().collect();
            assert!(
                fields.len() == 2,
                "{input_path}:{}: expected `word count`, got {line:?}",
                i + 1
            );
            let count = fields[1]
                .parse::<u64>()
                .unwrap_or_else(|e| panic!("{input_path}:{}: bad count: {e}", i + 1));
            (fields[0].to_uppercase(), count)
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated corpus").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, u64)] = &[").unwrap();

    for (word, weight) in entries {
        writeln!(output, "    ({word:?}, {weight}),").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
