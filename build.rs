//! Compiles `data/catalog.ron` into the crate.
//!
//! The catalog is parsed with RON, validated, encoded with postcard and
//! written to `OUT_DIR` together with a phf map from lower-cased names to ids.
//! `src/catalog.rs` includes the generated source.

use schema::RecordTemplate;
use std::collections::HashSet;
use std::env;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

const CATALOG_SOURCE: &str = "data/catalog.ron";

fn main() {
    println!("cargo:rerun-if-changed={}", CATALOG_SOURCE);
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let source = fs::read_to_string(CATALOG_SOURCE)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", CATALOG_SOURCE, e));
    let templates: Vec<RecordTemplate> = ron::from_str(&source)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", CATALOG_SOURCE, e));

    if let Err(problem) = validate_catalog(&templates) {
        panic!("Invalid catalog in {}: {}", CATALOG_SOURCE, problem);
    }

    let bytes = schema::encode_catalog(&templates)
        .unwrap_or_else(|e| panic!("Failed to encode catalog: {}", e));
    fs::write(Path::new(&out_dir).join("catalog.postcard"), bytes)
        .unwrap_or_else(|e| panic!("Failed to write catalog.postcard: {}", e));

    write_generated_source(&out_dir, &templates)
        .unwrap_or_else(|e| panic!("Failed to write generated_catalog.rs: {}", e));
}

fn validate_catalog(templates: &[RecordTemplate]) -> Result<(), String> {
    if templates.is_empty() {
        return Err("catalog has no entries".to_string());
    }

    let mut seen_names = HashSet::new();
    for (position, template) in templates.iter().enumerate() {
        if usize::from(template.id) != position {
            return Err(format!(
                "entry {} has id {}; ids must be contiguous from 0",
                position, template.id
            ));
        }
        if template.hp == 0 || template.attack == 0 {
            return Err(format!("{} has a zero stat", template.name));
        }
        if !seen_names.insert(template.name.to_ascii_lowercase()) {
            return Err(format!("duplicate name {}", template.name));
        }
    }

    // Evolution inserts id + 1, so the final entry must be terminal.
    if let Some(last) = templates.last() {
        if last.can_evolve {
            return Err(format!("{} can evolve but has no successor", last.name));
        }
    }

    Ok(())
}

fn write_generated_source(out_dir: &str, templates: &[RecordTemplate]) -> std::io::Result<()> {
    let path = Path::new(out_dir).join("generated_catalog.rs");
    let mut file = BufWriter::new(File::create(path)?);

    let names: Vec<String> = templates
        .iter()
        .map(|template| template.name.to_ascii_lowercase())
        .collect();
    let ids: Vec<String> = templates
        .iter()
        .map(|template| format!("{}u16", template.id))
        .collect();

    let mut name_map = phf_codegen::Map::new();
    for (name, id) in names.iter().zip(&ids) {
        name_map.entry(name.as_str(), id);
    }

    writeln!(
        file,
        "static CATALOG_BYTES: &[u8] = include_bytes!(concat!(env!(\"OUT_DIR\"), \"/catalog.postcard\"));"
    )?;
    writeln!(file)?;
    writeln!(
        file,
        "static CATALOG_BY_NAME: phf::Map<&'static str, u16> = {};",
        name_map.build()
    )?;

    file.flush()
}
