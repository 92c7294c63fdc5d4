//! The `mockdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create mockdrill.toml
    if std::path::Path::new("mockdrill.toml").exists() {
        println!("mockdrill.toml already exists, skipping.");
    } else {
        std::fs::write("mockdrill.toml", SAMPLE_CONFIG)?;
        println!("Created mockdrill.toml");
    }

    // Create example question bank
    std::fs::create_dir_all("question-banks")?;
    let example_path = std::path::Path::new("question-banks/example.toml");
    if example_path.exists() {
        println!("question-banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created question-banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Run: mockdrill validate --bank question-banks/example.toml");
    println!("  2. Run: mockdrill start");
    println!("  3. Answer with: mockdrill answer \"your answer text\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mockdrill configuration

# Questions sampled per session (clamped to the bank size)
question_count = 25

# Where session state and report history are kept
data_dir = "./mockdrill-data"

# Uncomment to drill a custom bank by default
# default_bank = "question-banks/example.toml"

# Show each answer's evaluation as soon as it is scored
show_eval = false
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
name = "Example Bank"
description = "A small starter bank covering all four topics"

[[questions]]
qid = 1
topic = "DSA"
prompt = "Explain the time and space complexity of binary search and when it works."
keywords = ["sorted", "log", "divide", "middle", "o(log n)"]

[[questions]]
qid = 2
topic = "CN"
prompt = "What is the TCP three-way handshake?"
keywords = ["syn", "ack", "sequence", "connection establishment"]

[[questions]]
qid = 3
topic = "OS"
prompt = "What is a process vs a thread?"
keywords = ["address space", "lightweight", "context switch", "shared memory"]

[[questions]]
qid = 4
topic = "Behavioral"
prompt = "Describe a challenging bug you fixed. How did you approach it?"
keywords = ["situation", "analysis", "action", "result"]
"#;
