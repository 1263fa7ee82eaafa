use csv::ReaderBuilder;
use job_aggregator::SourceBatches;
use serde_json::{Map, Value};
use shared_types::{AggregationError, CompanyContext, RawJobDescriptor};
use std::collections::HashMap;
use std::path::Path;

/// Columns whose cells hold `;`-separated lists.
const LIST_COLUMNS: &[&str] = &["core_duties", "must_haves", "benefits", "evidence_sources"];

/// One company plus everything its collectors produced.
#[derive(Debug)]
pub struct InputBundle {
    pub company: CompanyContext,
    pub sources: SourceBatches,
    /// Records that could not be read as a descriptor
    pub skipped: usize,
}

/// Descriptors read from one file.
#[derive(Debug, Default)]
pub struct LoadedDescriptors {
    pub descriptors: Vec<RawJobDescriptor>,
    /// Entries or rows that could not be read as a descriptor
    pub skipped: usize,
}

/// `{"company": {...}, "career": [...], "linkedin": [...], "intel": [...]}`.
///
/// The company object is required. A malformed entry in one of the lists is
/// skipped and counted, the rest of the bundle is still used.
pub fn load_bundle(path: &Path) -> Result<InputBundle, AggregationError> {
    let content = read(path)?;
    let parse_error = |e: serde_json::Error| {
        AggregationError::ParseError(format!("{}: {}", path.display(), e))
    };

    let mut object = match serde_json::from_slice::<Value>(&content).map_err(parse_error)? {
        Value::Object(object) => object,
        _ => {
            return Err(AggregationError::ParseError(format!(
                "{}: expected a JSON object",
                path.display()
            )))
        }
    };

    let company = object.remove("company").ok_or_else(|| {
        AggregationError::InvalidInput(format!("{}: missing \"company\"", path.display()))
    })?;
    let company: CompanyContext = serde_json::from_value(company).map_err(parse_error)?;

    let mut skipped = 0;
    let mut list = |key: &str| -> Result<Vec<RawJobDescriptor>, AggregationError> {
        let loaded = match object.remove(key) {
            None | Some(Value::Null) => LoadedDescriptors::default(),
            Some(Value::Array(entries)) => descriptors_from_values(entries, key),
            Some(_) => {
                return Err(AggregationError::ParseError(format!(
                    "{}: \"{}\" must be an array",
                    path.display(),
                    key
                )))
            }
        };
        skipped += loaded.skipped;
        Ok(loaded.descriptors)
    };

    let sources = SourceBatches {
        career: list("career")?,
        linkedin: list("linkedin")?,
        intel: list("intel")?,
    };

    Ok(InputBundle {
        company,
        sources,
        skipped,
    })
}

/// Raw descriptors from a JSON array or, for `.csv` files, a CSV table.
pub fn load_descriptors(path: &Path) -> Result<LoadedDescriptors, AggregationError> {
    let content = read(path)?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if is_csv {
        let (records, malformed) = CsvParser::new().parse_to_maps(&content)?;
        let total = records.len();
        let descriptors: Vec<RawJobDescriptor> =
            records.into_iter().filter_map(descriptor_from_record).collect();
        let skipped = malformed + total - descriptors.len();
        Ok(LoadedDescriptors {
            descriptors,
            skipped,
        })
    } else {
        let entries: Vec<Value> = serde_json::from_slice(&content)
            .map_err(|e| AggregationError::ParseError(format!("{}: {}", path.display(), e)))?;
        Ok(descriptors_from_values(entries, &path.display().to_string()))
    }
}

fn descriptors_from_values(entries: Vec<Value>, origin: &str) -> LoadedDescriptors {
    let mut loaded = LoadedDescriptors::default();

    for (index, entry) in entries.into_iter().enumerate() {
        match serde_json::from_value::<RawJobDescriptor>(entry) {
            Ok(descriptor) => loaded.descriptors.push(descriptor),
            Err(e) => {
                tracing::warn!("Skipping {} entry {}: {}", origin, index, e);
                loaded.skipped += 1;
            }
        }
    }

    loaded
}

fn read(path: &Path) -> Result<Vec<u8>, AggregationError> {
    std::fs::read(path)
        .map_err(|e| AggregationError::InvalidInput(format!("{}: {}", path.display(), e)))
}

pub struct CsvParser {
    delimiter: u8,
    has_headers: bool,
}

impl CsvParser {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }

    /// Rows keyed by header, plus the number of rows that failed to parse.
    pub fn parse_to_maps(
        &self,
        content: &[u8],
    ) -> Result<(Vec<HashMap<String, String>>, usize), AggregationError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(content);

        let headers = reader
            .headers()
            .map_err(|e| AggregationError::ParseError(e.to_string()))?
            .clone();

        let mut records = Vec::new();
        let mut malformed = 0;

        for (row, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let mut map = HashMap::new();
                    for (i, field) in record.iter().enumerate() {
                        if let Some(header) = headers.get(i) {
                            map.insert(header.to_string(), field.to_string());
                        }
                    }
                    records.push(map);
                }
                Err(e) => {
                    tracing::warn!("Failed to parse CSV row {}: {}", row + 1, e);
                    malformed += 1;
                }
            }
        }

        Ok((records, malformed))
    }
}

/// `Seniority Level`, `seniority-level` and `seniority_level` all name the
/// same field.
fn column_key(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn descriptor_from_record(record: HashMap<String, String>) -> Option<RawJobDescriptor> {
    let mut object = Map::new();

    for (header, cell) in record {
        let key = column_key(&header);
        let cell = cell.trim();
        if key.is_empty() || cell.is_empty() {
            continue;
        }

        let value = if LIST_COLUMNS.contains(&key.as_str()) {
            Value::Array(
                cell.split(';')
                    .map(|item| Value::String(item.trim().to_string()))
                    .collect(),
            )
        } else {
            Value::String(cell.to_string())
        };
        object.insert(key, value);
    }

    match serde_json::from_value(Value::Object(object)) {
        Ok(descriptor) => Some(descriptor),
        Err(e) => {
            tracing::warn!("Skipping CSV row: {}", e);
            None
        }
    }
}
