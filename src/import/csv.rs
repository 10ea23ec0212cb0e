use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use petgraph::stable_graph::{EdgeIndex, NodeIndex};
use crate::models::{RailwayGraph, Stations, TrackSegment, Tracks};

pub const COLUMN_LINE: &str = "Tube Line";
pub const COLUMN_FROM_STATION: &str = "From Station";
pub const COLUMN_TO_STATION: &str = "To Station";
pub const COLUMN_DISTANCE: &str = "Distance (km)";
pub const COLUMN_FROM_LONGITUDE: &str = "Longitude_From";
pub const COLUMN_FROM_LATITUDE: &str = "Latitude_From";
pub const COLUMN_TO_LONGITUDE: &str = "Longitude_To";
pub const COLUMN_TO_LATITUDE: &str = "Latitude_To";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },
    #[error("malformed row {row}: '{field}' value {value:?} {reason}")]
    MalformedRow {
        /// Zero-based data row, header excluded
        row: usize,
        field: &'static str,
        value: String,
        reason: &'static str,
    },
    #[error("row {row}: station '{station}' at {found:?} was first seen at {first:?}")]
    ConflictingCoordinates {
        row: usize,
        station: String,
        first: (f64, f64),
        found: (f64, f64),
    },
}

/// What to do when rows disagree about where a station is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatePolicy {
    /// Keep the first position seen and log a warning
    #[default]
    FirstSeen,
    /// Fail the load
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub coordinate_policy: CoordinatePolicy,
}

/// Positions of the required columns in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMapping {
    line: usize,
    from_station: usize,
    to_station: usize,
    distance: usize,
    from_longitude: usize,
    from_latitude: usize,
    to_longitude: usize,
    to_latitude: usize,
}

impl ColumnMapping {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or(LoadError::MissingColumn { column })
        };

        Ok(Self {
            line: find(COLUMN_LINE)?,
            from_station: find(COLUMN_FROM_STATION)?,
            to_station: find(COLUMN_TO_STATION)?,
            distance: find(COLUMN_DISTANCE)?,
            from_longitude: find(COLUMN_FROM_LONGITUDE)?,
            from_latitude: find(COLUMN_FROM_LATITUDE)?,
            to_longitude: find(COLUMN_TO_LONGITUDE)?,
            to_latitude: find(COLUMN_TO_LATITUDE)?,
        })
    }
}

/// One validated row
#[derive(Debug, Clone, PartialEq)]
struct EdgeRow<'r> {
    line: &'r str,
    from: &'r str,
    to: &'r str,
    distance: f64,
    from_position: (f64, f64),
    to_position: (f64, f64),
}

fn field<'r>(
    record: &'r csv::StringRecord,
    row: usize,
    index: usize,
    name: &'static str,
) -> Result<&'r str, LoadError> {
    record.get(index).ok_or_else(|| LoadError::MalformedRow {
        row,
        field: name,
        value: String::new(),
        reason: "is missing",
    })
}

fn parse_name<'r>(
    record: &'r csv::StringRecord,
    row: usize,
    index: usize,
    name: &'static str,
) -> Result<&'r str, LoadError> {
    let value = field(record, row, index, name)?;
    if value.is_empty() {
        return Err(LoadError::MalformedRow {
            row,
            field: name,
            value: value.to_string(),
            reason: "is empty",
        });
    }
    Ok(value)
}

fn parse_number(record: &csv::StringRecord, row: usize, index: usize, name: &'static str) -> Result<f64, LoadError> {
    let value = field(record, row, index, name)?;
    let malformed = |reason| LoadError::MalformedRow {
        row,
        field: name,
        value: value.to_string(),
        reason,
    };

    let number: f64 = value.parse().map_err(|_| malformed("is not a number"))?;
    if !number.is_finite() {
        return Err(malformed("is not finite"));
    }
    Ok(number)
}

fn parse_row<'r>(record: &'r csv::StringRecord, row: usize, columns: &ColumnMapping) -> Result<EdgeRow<'r>, LoadError> {
    let line = parse_name(record, row, columns.line, COLUMN_LINE)?;
    let from = parse_name(record, row, columns.from_station, COLUMN_FROM_STATION)?;
    let to = parse_name(record, row, columns.to_station, COLUMN_TO_STATION)?;
    if from == to {
        return Err(LoadError::MalformedRow {
            row,
            field: COLUMN_TO_STATION,
            value: to.to_string(),
            reason: "is the same as the from station",
        });
    }

    let distance = parse_number(record, row, columns.distance, COLUMN_DISTANCE)?;
    if distance < 0.0 {
        return Err(LoadError::MalformedRow {
            row,
            field: COLUMN_DISTANCE,
            value: field(record, row, columns.distance, COLUMN_DISTANCE)?.to_string(),
            reason: "is negative",
        });
    }
    // "-0" parses to negative zero, which would print as -0.00
    let distance = distance + 0.0;

    Ok(EdgeRow {
        line,
        from,
        to,
        distance,
        from_position: (
            parse_number(record, row, columns.from_longitude, COLUMN_FROM_LONGITUDE)?,
            parse_number(record, row, columns.from_latitude, COLUMN_FROM_LATITUDE)?,
        ),
        to_position: (
            parse_number(record, row, columns.to_longitude, COLUMN_TO_LONGITUDE)?,
            parse_number(record, row, columns.to_latitude, COLUMN_TO_LATITUDE)?,
        ),
    })
}

/// Accumulates validated rows into a graph
struct NetworkBuilder {
    graph: RailwayGraph,
    policy: CoordinatePolicy,
    /// (lower endpoint, higher endpoint, line) -> edge, so A-B and B-A collapse
    segments: HashMap<(NodeIndex, NodeIndex, String), EdgeIndex>,
    duplicate_rows: usize,
}

impl NetworkBuilder {
    fn new(policy: CoordinatePolicy) -> Self {
        Self {
            graph: RailwayGraph::new(),
            policy,
            segments: HashMap::new(),
            duplicate_rows: 0,
        }
    }

    fn station(&mut self, row: usize, name: &str, position: (f64, f64)) -> Result<NodeIndex, LoadError> {
        if let Some(index) = self.graph.station_index(name) {
            let first = self.graph.station(index).map_or(position, |station| station.position);
            if first != position {
                match self.policy {
                    CoordinatePolicy::Reject => {
                        return Err(LoadError::ConflictingCoordinates {
                            row,
                            station: name.to_string(),
                            first,
                            found: position,
                        });
                    }
                    CoordinatePolicy::FirstSeen => {
                        log::warn!(
                            "Row {row}: station '{name}' at {position:?} was first seen at {first:?}, keeping the first position"
                        );
                    }
                }
            }
            return Ok(index);
        }
        Ok(self.graph.add_or_get_station(name, position))
    }

    fn add_row(&mut self, row: usize, edge: &EdgeRow<'_>) -> Result<(), LoadError> {
        let from = self.station(row, edge.from, edge.from_position)?;
        let to = self.station(row, edge.to, edge.to_position)?;

        match self.segments.entry((from.min(to), from.max(to), edge.line.to_string())) {
            Entry::Occupied(existing) => {
                self.duplicate_rows += 1;
                let kept = self.graph.track(*existing.get()).map(|segment| segment.distance);
                if kept != Some(edge.distance) {
                    log::warn!(
                        "Row {row}: duplicate {} segment {} - {} with distance {} km, keeping {kept:?} km",
                        edge.line,
                        edge.from,
                        edge.to,
                        edge.distance
                    );
                }
            }
            Entry::Vacant(slot) => {
                let index = self.graph.add_track(from, to, TrackSegment::new(edge.line, edge.distance));
                slot.insert(index);
            }
        }
        Ok(())
    }

    fn finish(self) -> RailwayGraph {
        if self.duplicate_rows > 0 {
            log::info!("Collapsed {} duplicate rows", self.duplicate_rows);
        }
        self.graph
    }
}

/// Build the network from CSV data
///
/// Fails on the first invalid row; no partial graph is ever returned.
///
/// # Errors
///
/// Returns an error if a required column is missing, a row is malformed, the
/// CSV itself is invalid, or (under `CoordinatePolicy::Reject`) two rows
/// place a station differently.
pub fn load_network<R: Read>(reader: R, options: &LoadOptions) -> Result<RailwayGraph, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let columns = ColumnMapping::from_headers(reader.headers()?)?;
    let mut builder = NetworkBuilder::new(options.coordinate_policy);

    for (row, record) in reader.records().enumerate() {
        let record = record?;
        let edge = parse_row(&record, row, &columns)?;
        builder.add_row(row, &edge)?;
    }

    let graph = builder.finish();
    log::info!(
        "Loaded network: {} stations, {} segments, {} lines",
        graph.station_count(),
        graph.track_count(),
        graph.line_edges.len()
    );
    Ok(graph)
}

/// # Errors
///
/// See [`load_network`]
pub fn load_network_from_str(content: &str, options: &LoadOptions) -> Result<RailwayGraph, LoadError> {
    load_network(content.as_bytes(), options)
}

/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be opened, otherwise see [`load_network`]
pub fn load_network_from_path(path: &Path, options: &LoadOptions) -> Result<RailwayGraph, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Reading network from {}", path.display());
    load_network(std::io::BufReader::new(file), options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lines;

    const HEADER: &str =
        "Tube Line,From Station,To Station,Distance (km),Longitude_From,Latitude_From,Longitude_To,Latitude_To";

    fn with_rows(rows: &[&str]) -> String {
        let mut csv = HEADER.to_string();
        for row in rows {
            csv.push('\n');
            csv.push_str(row);
        }
        csv.push('\n');
        csv
    }

    #[test]
    fn test_load_sample_file() {
        let graph = load_network_from_path(Path::new("test-data/tube_sample.csv"), &LoadOptions::default())
            .expect("Sample should load");

        assert_eq!(graph.station_count(), 10);
        // One reversed duplicate row collapses into the existing segment
        assert_eq!(graph.track_count(), 10);
        assert_eq!(graph.all_lines(), vec!["Victoria", "Northern", "Central", "Overground"]);
        assert_eq!(graph.edges_for_line("Victoria").len(), 4);
        assert_eq!(graph.tracks_between("Euston", "King's Cross St. Pancras").len(), 2);
    }

    #[test]
    fn test_missing_file() {
        let result = load_network_from_path(Path::new("test-data/missing.csv"), &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_negative_distance_is_malformed() {
        let csv = with_rows(&[
            "Victoria,Euston,Warren Street,0.7,-0.1337,51.5282,-0.1388,51.5247",
            "Victoria,Warren Street,Oxford Circus,-3,-0.1388,51.5247,-0.1419,51.5152",
        ]);
        let result = load_network_from_str(&csv, &LoadOptions::default());

        match result {
            Err(LoadError::MalformedRow { row, field, value, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(field, COLUMN_DISTANCE);
                assert_eq!(value, "-3");
            }
            other => panic!("Expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_fields_are_malformed() {
        let cases = [
            ("Victoria,Euston,Warren Street,far,-0.1337,51.5282,-0.1388,51.5247", COLUMN_DISTANCE),
            ("Victoria,Euston,Warren Street,NaN,-0.1337,51.5282,-0.1388,51.5247", COLUMN_DISTANCE),
            ("Victoria,Euston,Warren Street,inf,-0.1337,51.5282,-0.1388,51.5247", COLUMN_DISTANCE),
            ("Victoria,Euston,Warren Street,0.7,west,51.5282,-0.1388,51.5247", COLUMN_FROM_LONGITUDE),
            ("Victoria,Euston,Warren Street,0.7,-0.1337,,-0.1388,51.5247", COLUMN_FROM_LATITUDE),
            ("Victoria,Euston,Warren Street,0.7,-0.1337,51.5282,-0.1388,north", COLUMN_TO_LATITUDE),
            (",Euston,Warren Street,0.7,-0.1337,51.5282,-0.1388,51.5247", COLUMN_LINE),
            ("Victoria,Euston,Euston,0.7,-0.1337,51.5282,-0.1337,51.5282", COLUMN_TO_STATION),
        ];

        for (row, expected_field) in cases {
            let result = load_network_from_str(&with_rows(&[row]), &LoadOptions::default());
            assert!(
                matches!(result, Err(LoadError::MalformedRow { row: 0, field, .. }) if field == expected_field),
                "Row {row:?} should fail on {expected_field}"
            );
        }
    }

    #[test]
    fn test_missing_column() {
        let csv = "Tube Line,From Station,To Station,Distance,Longitude_From,Latitude_From,Longitude_To,Latitude_To\n";
        let result = load_network_from_str(csv, &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::MissingColumn { column: COLUMN_DISTANCE })));
    }

    #[test]
    fn test_column_names_are_case_sensitive() {
        let csv = "tube line,From Station,To Station,Distance (km),Longitude_From,Latitude_From,Longitude_To,Latitude_To\n";
        let result = load_network_from_str(csv, &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::MissingColumn { column: COLUMN_LINE })));
    }

    #[test]
    fn test_padded_header_is_missing_column() {
        let csv = " Tube Line ,From Station,To Station,Distance (km),Longitude_From,Latitude_From,Longitude_To,Latitude_To\n\
                   Victoria,A,B,1.0,0,0,1,1\n";
        let result = load_network_from_str(csv, &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::MissingColumn { column: COLUMN_LINE })));
    }

    #[test]
    fn test_empty_input() {
        let result = load_network_from_str("", &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::MissingColumn { .. })));
    }

    #[test]
    fn test_header_only_gives_empty_graph() {
        let graph = load_network_from_str(&with_rows(&[]), &LoadOptions::default()).expect("Header alone is valid");
        assert!(graph.is_empty());
    }

    #[test]
    fn test_columns_in_any_order_with_extras() {
        let csv = "\
Distance (km),Notes,To Station,From Station,Tube Line,Latitude_To,Longitude_To,Latitude_From,Longitude_From
1.0,busy,Angel,King's Cross,Northern,51.5322,-0.1058,51.5308,-0.1238
";
        let graph = load_network_from_str(csv, &LoadOptions::default()).expect("Should load");

        let edge = graph.edges_for_line("Northern")[0];
        assert_eq!(graph.track_station_names(edge), Some(("King's Cross", "Angel")));
        assert_eq!(graph.station_position("Angel"), Some((-0.1058, 51.5322)));
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv = with_rows(&[" Northern , King's Cross , Angel , 1.0 , -0.1238 , 51.5308 , -0.1058 , 51.5322 "]);
        let graph = load_network_from_str(&csv, &LoadOptions::default()).expect("Should load");

        assert!(graph.has_line("Northern"));
        assert!(graph.station_index("King's Cross").is_some());
    }

    #[test]
    fn test_negative_zero_distance_is_zero() {
        let csv = with_rows(&["Victoria,Euston,Warren Street,-0,-0.1337,51.5282,-0.1388,51.5247"]);
        let graph = load_network_from_str(&csv, &LoadOptions::default()).expect("Zero distance is valid");

        let edge = graph.edges_for_line("Victoria")[0];
        let distance = graph.track(edge).expect("Edge exists").distance;
        assert_eq!(distance, 0.0);
        assert!(distance.is_sign_positive());
    }

    #[test]
    fn test_reversed_duplicate_collapses() {
        let csv = with_rows(&[
            "Victoria,Euston,Warren Street,0.7,-0.1337,51.5282,-0.1388,51.5247",
            "Victoria,Warren Street,Euston,0.7,-0.1388,51.5247,-0.1337,51.5282",
            "Northern,Warren Street,Euston,0.7,-0.1388,51.5247,-0.1337,51.5282",
        ]);
        let graph = load_network_from_str(&csv, &LoadOptions::default()).expect("Should load");

        assert_eq!(graph.track_count(), 2);
        assert_eq!(graph.edges_for_line("Victoria").len(), 1);
        assert_eq!(graph.edges_for_line("Northern").len(), 1);
    }

    #[test]
    fn test_conflicting_coordinates_first_seen() {
        let csv = with_rows(&[
            "Victoria,Euston,Warren Street,0.7,-0.1337,51.5282,-0.1388,51.5247",
            "Northern,Euston,King's Cross,0.8,-0.2000,51.6000,-0.1238,51.5308",
        ]);
        let graph = load_network_from_str(&csv, &LoadOptions::default()).expect("Should load");
        assert_eq!(graph.station_position("Euston"), Some((-0.1337, 51.5282)));
    }

    #[test]
    fn test_conflicting_coordinates_rejected() {
        let csv = with_rows(&[
            "Victoria,Euston,Warren Street,0.7,-0.1337,51.5282,-0.1388,51.5247",
            "Northern,Euston,King's Cross,0.8,-0.2000,51.6000,-0.1238,51.5308",
        ]);
        let options = LoadOptions {
            coordinate_policy: CoordinatePolicy::Reject,
        };
        let result = load_network_from_str(&csv, &options);

        match result {
            Err(LoadError::ConflictingCoordinates { row, station, first, found }) => {
                assert_eq!(row, 1);
                assert_eq!(station, "Euston");
                assert_eq!(first, (-0.1337, 51.5282));
                assert_eq!(found, (-0.2, 51.6));
            }
            other => panic!("Expected ConflictingCoordinates, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let csv = format!("{HEADER}\nVictoria,Euston,Warren Street,0.7\n");
        let result = load_network_from_str(&csv, &LoadOptions::default());
        assert!(matches!(result, Err(LoadError::Csv(_))));
    }

    #[test]
    fn test_error_message_names_row_and_field() {
        let csv = with_rows(&["Victoria,Euston,Warren Street,-3,-0.1337,51.5282,-0.1388,51.5247"]);
        let error = load_network_from_str(&csv, &LoadOptions::default()).expect_err("Should fail");
        assert_eq!(error.to_string(), "malformed row 0: 'Distance (km)' value \"-3\" is negative");
    }
}
