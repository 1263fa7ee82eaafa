use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut types = Vec::new();

    // Job types
    types.push(clean_type(JobSource::export_to_string()?));
    types.push(clean_type(WorkModel::export_to_string()?));
    types.push(clean_type(JobCandidate::export_to_string()?));
    types.push(clean_type(CompanyContext::export_to_string()?));

    // Aggregation types
    types.push(clean_type(AggregationStrategy::export_to_string()?));
    types.push(clean_type(SourceCounts::export_to_string()?));
    types.push(clean_type(AggregationReport::export_to_string()?));
    types.push(clean_type(CompanyJobsResponse::export_to_string()?));

    let output_dir = Path::new("../bindings");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Everything lands in one file, so cross-type imports are dropped
    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
