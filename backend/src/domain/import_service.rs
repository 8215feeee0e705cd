use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use shared::{
    glyph_for_type, ImportTripRequest, ImportTripResponse, ItineraryItem, Location, TravelDay,
    Trip, TripStatus,
};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::trip_store::TripStore;

/// Service for importing itineraries from external file content.
///
/// Parsing is an explicit chain of tagged variants tried in a fixed order,
/// first success wins: native trip JSON, generic places JSON, CSV, free
/// text. When none recognizes the content the import fails whole; there is
/// no partial import.
#[derive(Clone)]
pub struct ImportService {
    store: Arc<TripStore>,
}

impl ImportService {
    pub fn new(store: Arc<TripStore>) -> Self {
        Self { store }
    }

    /// Parse the content, store the resulting trip and select it as current
    pub async fn import_trip(&self, request: ImportTripRequest) -> DomainResult<ImportTripResponse> {
        info!(
            "Importing itinerary ({} bytes, hint: {:?})",
            request.content.len(),
            request.format_hint
        );

        let trip = parse_trip(&request.content, request.format_hint.as_deref())
            .ok_or(DomainError::ImportFormat)?;

        let stored = trip.clone();
        self.store
            .mutate(move |trips| {
                trips.push(stored);
                Ok(())
            })
            .await?;
        self.store.set_current_trip(&trip.id).await?;

        info!("Imported trip: {} with ID: {}", trip.name, trip.id);
        let success_message = format!("Itinerario \"{}\" importato con successo!", trip.name);
        Ok(ImportTripResponse { trip, success_message })
    }
}

/// Run the parser chain. A format hint from the file name narrows the chain
/// to the matching parsers; without one every parser gets a try, in order.
pub fn parse_trip(content: &str, format_hint: Option<&str>) -> Option<Trip> {
    match format_hint {
        Some("json") => try_parse_native_json(content).or_else(|| try_parse_places_json(content)),
        Some("csv") => try_parse_csv(content, false),
        Some("txt") | Some("text") => try_parse_free_text(content),
        _ => try_parse_native_json(content)
            .or_else(|| try_parse_places_json(content))
            .or_else(|| try_parse_csv(content, true))
            .or_else(|| try_parse_free_text(content)),
    }
}

/// A trip already in the native (exported) shape
fn try_parse_native_json(content: &str) -> Option<Trip> {
    serde_json::from_str(content).ok()
}

/// A generic JSON object carrying an `itinerary`/`places`/`destinations`
/// array; every missing field falls back to a default.
fn try_parse_places_json(content: &str) -> Option<Trip> {
    let data: Value = serde_json::from_str(content).ok()?;

    let places = ["itinerary", "places", "destinations"]
        .iter()
        .find_map(|key| data.get(*key).and_then(Value::as_array))?;

    let items: Vec<ItineraryItem> = places
        .iter()
        .enumerate()
        .map(|(index, place)| ItineraryItem {
            id: format!("imported-{}", index),
            name: str_field(place, &["name", "title", "destination"])
                .unwrap_or_else(|| "Luogo sconosciuto".to_string()),
            time: str_field(place, &["time"]).unwrap_or_else(|| format!("{}:00", 9 + index)),
            duration: str_field(place, &["duration"]).unwrap_or_else(|| "2 ore".to_string()),
            item_type: str_field(place, &["type", "category"])
                .unwrap_or_else(|| "Attrazione".to_string()),
            rating: num_field(place, &["rating"]).unwrap_or(4.0),
            image: str_field(place, &["emoji", "icon"]).unwrap_or_else(|| "📍".to_string()),
            description: None,
            location: Location {
                lat: num_field(place, &["lat", "latitude"]).unwrap_or(0.0),
                lng: num_field(place, &["lng", "longitude"]).unwrap_or(0.0),
                address: str_field(place, &["address", "location"])
                    .unwrap_or_else(|| "Indirizzo non specificato".to_string()),
            },
            estimated_cost: Some(
                str_field(place, &["cost", "price"]).unwrap_or_else(|| "€0".to_string()),
            ),
            notes: None,
        })
        .collect();

    let start_date = str_field(&data, &["startDate"]).unwrap_or_else(today);
    Some(Trip {
        id: Trip::generate_id(),
        name: str_field(&data, &["name", "title"])
            .unwrap_or_else(|| "Itinerario Importato".to_string()),
        start_date: start_date.clone(),
        end_date: str_field(&data, &["endDate"]).unwrap_or_else(today),
        participants: num_field(&data, &["participants"]).map(|p| p as u32).unwrap_or(1),
        status: TripStatus::Planning,
        days: vec![TravelDay {
            id: TravelDay::generate_id(),
            date: start_date,
            items,
        }],
    })
}

/// CSV with a header row; columns are matched case-insensitively against
/// {name,time,duration,type,rating,emoji,lat,lng,address,cost} and missing
/// ones take the standard defaults. Item ids are "csv-{rowIndex}".
///
/// In the hint-less chain (`strict`) the header must name at least one known
/// column, so arbitrary comma-bearing text falls through to the free-text
/// parser instead.
fn try_parse_csv(content: &str, strict: bool) -> Option<Trip> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let known = [
        "name", "time", "duration", "type", "rating", "emoji", "lat", "lng", "address", "cost",
    ];
    let headers: Vec<String> = reader
        .headers()
        .ok()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    if strict && !headers.iter().any(|h| known.contains(&h.as_str())) {
        return None;
    }

    let column = |name: &str| headers.iter().position(|h| h == name);
    let name_col = column("name");
    let time_col = column("time");
    let duration_col = column("duration");
    let type_col = column("type");
    let rating_col = column("rating");
    let emoji_col = column("emoji");
    let lat_col = column("lat");
    let lng_col = column("lng");
    let address_col = column("address");
    let cost_col = column("cost");

    let mut items = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.ok()?;
        let field = |col: Option<usize>| -> Option<String> {
            col.and_then(|c| record.get(c))
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let row = index + 1;
        items.push(ItineraryItem {
            id: format!("csv-{}", row),
            name: field(name_col)
                .or_else(|| field(Some(0)))
                .unwrap_or_else(|| format!("Luogo {}", row)),
            time: field(time_col).unwrap_or_else(|| format!("{}:00", 9 + index)),
            duration: field(duration_col).unwrap_or_else(|| "2 ore".to_string()),
            item_type: field(type_col).unwrap_or_else(|| "Attrazione".to_string()),
            rating: field(rating_col).and_then(|v| v.parse().ok()).unwrap_or(4.0),
            image: field(emoji_col).unwrap_or_else(|| "📍".to_string()),
            description: None,
            location: Location {
                lat: field(lat_col).and_then(|v| v.parse().ok()).unwrap_or(0.0),
                lng: field(lng_col).and_then(|v| v.parse().ok()).unwrap_or(0.0),
                address: field(address_col)
                    .unwrap_or_else(|| "Indirizzo non specificato".to_string()),
            },
            estimated_cost: Some(field(cost_col).unwrap_or_else(|| "€0".to_string())),
            notes: None,
        });
    }

    if items.is_empty() {
        return None;
    }

    Some(single_day_trip("Itinerario CSV Importato", items))
}

/// Plain text: one item per non-empty line. A leading "HH:MM" token becomes
/// the time and is stripped from the name; lines mentioning "itinerario"
/// are presumed headers and skipped.
fn try_parse_free_text(content: &str) -> Option<Trip> {
    let mut items = Vec::new();

    let lines = content.lines().map(str::trim).filter(|l| !l.is_empty());
    for (index, line) in lines.enumerate() {
        if line.to_lowercase().contains("itinerario") {
            continue;
        }

        let time = find_time_token(line).unwrap_or_else(|| format!("{}:00", 9 + index));
        let name = strip_leading_time(line);
        let name = if name.is_empty() {
            format!("Tappa {}", index + 1)
        } else {
            name
        };

        items.push(ItineraryItem {
            id: format!("text-{}", index),
            name,
            time,
            duration: "2 ore".to_string(),
            item_type: "Attrazione".to_string(),
            rating: 4.0,
            image: "📍".to_string(),
            description: None,
            location: Location {
                lat: 0.0,
                lng: 0.0,
                address: "Da specificare".to_string(),
            },
            estimated_cost: Some("€0".to_string()),
            notes: None,
        });
    }

    if items.is_empty() {
        return None;
    }

    Some(single_day_trip("Itinerario di Testo Importato", items))
}

fn single_day_trip(name: &str, items: Vec<ItineraryItem>) -> Trip {
    let date = today();
    Trip {
        id: Trip::generate_id(),
        name: name.to_string(),
        start_date: date.clone(),
        end_date: date.clone(),
        participants: 1,
        status: TripStatus::Planning,
        days: vec![TravelDay {
            id: TravelDay::generate_id(),
            date,
            items,
        }],
    }
}

fn str_field(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        value
            .get(*key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    })
}

fn num_field(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter().find_map(|key| value.get(*key).and_then(Value::as_f64))
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// First "H:MM"/"HH:MM" token anywhere in the line
fn find_time_token(line: &str) -> Option<String> {
    let bytes = line.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if *byte != b':' {
            continue;
        }
        // up to two digits before the colon, exactly two after
        let mut start = i;
        while start > 0 && i - start < 2 && bytes[start - 1].is_ascii_digit() {
            start -= 1;
        }
        if start == i {
            continue;
        }
        if bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
            && bytes.get(i + 2).is_some_and(u8::is_ascii_digit)
        {
            return Some(line[start..i + 3].to_string());
        }
    }
    None
}

/// Strip a leading "HH:MM" token (plus separators) from the line
fn strip_leading_time(line: &str) -> String {
    let rest = match find_time_token(line) {
        Some(token) if line.starts_with(&token) => &line[token.len()..],
        _ => line,
    };
    let rest = rest.trim_start();
    let rest = rest.strip_prefix('-').unwrap_or(rest);
    rest.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::{JsonConnection, TripRepository};
    use crate::storage::traits::Connection;
    use tempfile::TempDir;

    #[test]
    fn test_native_json_parses_exported_shape() {
        let content = r#"{
            "id": "trip::1",
            "name": "Tour della Toscana",
            "startDate": "2024-07-15",
            "endDate": "2024-07-22",
            "participants": 2,
            "status": "active",
            "days": [{"id": "day::1", "date": "2024-07-15", "items": []}]
        }"#;

        let trip = parse_trip(content, Some("json")).unwrap();
        assert_eq!(trip.id, "trip::1");
        assert_eq!(trip.name, "Tour della Toscana");
        assert_eq!(trip.days.len(), 1);
    }

    #[test]
    fn test_places_json_maps_with_defaults() {
        let content = r#"{
            "name": "Roma in un giorno",
            "places": [
                {"name": "Colosseo", "rating": 4.9, "cost": "€18"},
                {"title": "Fori Imperiali"}
            ]
        }"#;

        let trip = parse_trip(content, Some("json")).unwrap();
        assert_eq!(trip.name, "Roma in un giorno");
        assert_eq!(trip.participants, 1);
        assert_eq!(trip.status, TripStatus::Planning);

        let items = &trip.days[0].items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "imported-0");
        assert_eq!(items[0].name, "Colosseo");
        assert_eq!(items[0].rating, 4.9);
        assert_eq!(items[0].estimated_cost.as_deref(), Some("€18"));
        assert_eq!(items[0].time, "9:00");

        assert_eq!(items[1].name, "Fori Imperiali");
        assert_eq!(items[1].rating, 4.0);
        assert_eq!(items[1].time, "10:00");
        assert_eq!(items[1].duration, "2 ore");
        assert_eq!(items[1].item_type, "Attrazione");
        assert_eq!(items[1].location.address, "Indirizzo non specificato");
    }

    #[test]
    fn test_csv_with_missing_columns_takes_defaults() {
        let content = "name,address\nColosseo,Roma\n";

        let trip = parse_trip(content, Some("csv")).unwrap();
        assert_eq!(trip.name, "Itinerario CSV Importato");

        let items = &trip.days[0].items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "csv-1");
        assert_eq!(items[0].name, "Colosseo");
        assert_eq!(items[0].location.address, "Roma");
        assert_eq!(items[0].time, "9:00");
        assert_eq!(items[0].duration, "2 ore");
        assert_eq!(items[0].estimated_cost.as_deref(), Some("€0"));
    }

    #[test]
    fn test_csv_headers_match_case_insensitively() {
        let content = "Name,Time,Rating,Lat,Lng\nDuomo,09:30,4.8,43.77,11.25\n";

        let trip = parse_trip(content, Some("csv")).unwrap();
        let item = &trip.days[0].items[0];
        assert_eq!(item.name, "Duomo");
        assert_eq!(item.time, "09:30");
        assert_eq!(item.rating, 4.8);
        assert_eq!(item.location.lat, 43.77);
        assert_eq!(item.location.lng, 11.25);
    }

    #[test]
    fn test_csv_without_rows_is_rejected() {
        assert!(parse_trip("name,address\n", Some("csv")).is_none());
    }

    #[test]
    fn test_free_text_extracts_leading_times() {
        let content = "Itinerario di Roma\n09:00 - Colosseo\n11:30 Fontana di Trevi\nPantheon\n";

        let trip = parse_trip(content, Some("txt")).unwrap();
        assert_eq!(trip.name, "Itinerario di Testo Importato");

        let items = &trip.days[0].items;
        // The "Itinerario" header line is skipped
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].name, "Colosseo");
        assert_eq!(items[0].time, "09:00");
        assert_eq!(items[1].name, "Fontana di Trevi");
        assert_eq!(items[1].time, "11:30");
        assert_eq!(items[2].name, "Pantheon");
        // No time token: defaulted from the line index
        assert_eq!(items[2].time, "12:00");
    }

    #[test]
    fn test_unhinted_chain_tries_every_parser_in_order() {
        // Native JSON wins over the places parser
        let native = r#"{"id": "t", "name": "N", "startDate": "2024-01-01",
            "endDate": "2024-01-01", "participants": 1, "status": "planning", "days": []}"#;
        assert_eq!(parse_trip(native, None).unwrap().id, "t");

        // CSV is recognized by its known header
        let csv = "name,cost\nColosseo,€18\n";
        assert_eq!(parse_trip(csv, None).unwrap().days[0].items[0].id, "csv-1");

        // Comma-less prose falls through to free text
        let text = "09:00 - Colosseo\n";
        assert_eq!(parse_trip(text, None).unwrap().days[0].items[0].id, "text-0");
    }

    #[test]
    fn test_unrecognized_content_parses_as_nothing() {
        assert!(parse_trip("", None).is_none());
        assert!(parse_trip("   \n  \n", None).is_none());
        assert!(parse_trip("{\"unrelated\": true}", Some("json")).is_none());
    }

    #[tokio::test]
    async fn test_import_stores_trip_and_selects_it() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repository: Arc<TripRepository> = Arc::new(connection.create_trip_repository());
        let store = Arc::new(TripStore::load(repository).await);
        let service = ImportService::new(store.clone());

        let response = service
            .import_trip(ImportTripRequest {
                content: "name,address\nColosseo,Roma\n".to_string(),
                format_hint: Some("csv".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(store.snapshot().await.len(), 1);
        assert_eq!(store.current_trip().await.unwrap().id, response.trip.id);
    }

    #[tokio::test]
    async fn test_unrecognized_import_is_all_or_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();
        let repository: Arc<TripRepository> = Arc::new(connection.create_trip_repository());
        let store = Arc::new(TripStore::load(repository).await);
        let service = ImportService::new(store.clone());

        let result = service
            .import_trip(ImportTripRequest {
                content: String::new(),
                format_hint: None,
            })
            .await;

        assert!(matches!(result, Err(DomainError::ImportFormat)));
        assert!(store.snapshot().await.is_empty());
    }
}
