//! Build script for generating the static topic table from content/topics.json
//!
//! The JSON file is checked here (ids present and unique, at least one model,
//! numbered models and an unnumbered synthesis entry)
//! and turned into `content_gen.rs` in OUT_DIR with `MODELS` and `SYNTHESIS`
//! constants that `contracts::content` includes.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=content/topics.json");

    let content_json = Path::new("content").join("topics.json");
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is not set");
    let output_rs = Path::new(&out_dir).join("content_gen.rs");

    if let Err(e) = generate_content(&content_json, &output_rs) {
        panic!("Failed to generate content from {}: {}", content_json.display(), e);
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct ContentJson {
    models: Vec<TopicJson>,
    synthesis: TopicJson,
}

#[derive(Debug, Deserialize)]
struct TopicJson {
    id: String,
    /// Present on models only; the synthesis entry carries the star badge.
    number: Option<u8>,
    title: String,
    subtitle: Option<String>,
    #[serde(default)]
    sections: Vec<SectionJson>,
}

#[derive(Debug, Deserialize)]
struct SectionJson {
    heading: String,
    #[serde(default)]
    content: Vec<String>,
    #[serde(default)]
    is_callout: bool,
}

// ============================================================================
// Validation
// ============================================================================

fn check_content(content: &ContentJson) -> Result<(), String> {
    if content.models.is_empty() {
        return Err("at least one model topic is required".to_string());
    }

    let mut seen = HashSet::new();
    for topic in content.models.iter().chain(std::iter::once(&content.synthesis)) {
        if topic.id.trim().is_empty() {
            return Err(format!("topic '{}' has an empty id", topic.title));
        }
        if !seen.insert(topic.id.as_str()) {
            return Err(format!("duplicate topic id '{}'", topic.id));
        }
    }

    for (index, model) in content.models.iter().enumerate() {
        if model.number.is_none() {
            return Err(format!("model #{} ('{}') has no number", index + 1, model.id));
        }
    }

    if content.synthesis.number.is_some() {
        return Err(format!(
            "synthesis topic '{}' must not have a number",
            content.synthesis.id
        ));
    }

    Ok(())
}

// ============================================================================
// Code Generation
// ============================================================================

fn generate_content(json_path: &Path, output_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let content: ContentJson = serde_json::from_str(&json_content)?;
    check_content(&content)?;

    fs::write(output_path, generate_rust_code(&content))?;
    Ok(())
}

fn generate_rust_code(content: &ContentJson) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM content/topics.json - DO NOT EDIT MANUALLY\n\
         // Generated: {}\n\
         // ============================================================================\n\n",
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    ));

    code.push_str("/// Assessment model topics in display order\npub static MODELS: &[Topic] = &[\n");
    for model in &content.models {
        code.push_str(&generate_topic(model, 1));
        code.push_str(",\n");
    }
    code.push_str("];\n\n");

    code.push_str("/// Synthesis topic, always appended after the models\npub static SYNTHESIS: Topic = ");
    code.push_str(&generate_topic(&content.synthesis, 0));
    code.push_str(";\n");

    code
}

fn generate_topic(topic: &TopicJson, indent: usize) -> String {
    let i = "    ".repeat(indent);
    let number = match topic.number {
        Some(n) => format!("TopicNumber::Ordinal({})", n),
        None => "TopicNumber::Synthesis".to_string(),
    };

    let mut sections = String::new();
    for section in &topic.sections {
        sections.push_str(&generate_section(section, indent + 2));
        sections.push_str(",\n");
    }

    format!(
        "{i}Topic {{\n\
         {i}    id: \"{}\",\n\
         {i}    number: {},\n\
         {i}    title: \"{}\",\n\
         {i}    subtitle: {},\n\
         {i}    sections: &[\n{}{i}    ],\n\
         {i}}}",
        escape_string(&topic.id),
        number,
        escape_string(&topic.title),
        option_str(&topic.subtitle),
        sections,
        i = i
    )
}

fn generate_section(section: &SectionJson, indent: usize) -> String {
    let i = "    ".repeat(indent);
    format!(
        "{i}Section {{\n\
         {i}    heading: \"{}\",\n\
         {i}    content: &[{}],\n\
         {i}    is_callout: {},\n\
         {i}}}",
        escape_string(&section.heading),
        string_array(&section.content),
        section.is_callout,
        i = i
    )
}

// ============================================================================
// Helper functions
// ============================================================================

fn option_str(opt: &Option<String>) -> String {
    match opt {
        Some(s) => format!("Some(\"{}\")", escape_string(s)),
        None => "None".to_string(),
    }
}

fn string_array(arr: &[String]) -> String {
    arr.iter()
        .map(|s| format!("\"{}\"", escape_string(s)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
