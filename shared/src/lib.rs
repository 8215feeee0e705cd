use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A complete planned journey spanning one or more calendar days.
///
/// Serialized field names match the persisted representation stored under
/// the `"travel-trips"` key (`startDate`, `endDate`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    pub name: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub start_date: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub end_date: String,
    pub participants: u32,
    pub status: TripStatus,
    /// Ordered: insertion order is the chronological presentation order.
    pub days: Vec<TravelDay>,
}

/// Trip lifecycle status. Set at creation; the system never transitions it
/// on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Planning,
    Active,
    Completed,
}

/// One calendar day within a trip, holding an ordered list of stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelDay {
    pub id: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    /// Order is significant: it is the visit order within the day and is
    /// directly manipulated by drag-reorder.
    pub items: Vec<ItineraryItem>,
}

/// One stop/activity/place within a travel day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItem {
    pub id: String,
    pub name: String,
    /// "HH:MM" string, advisory only; sort order is purely positional.
    pub time: String,
    /// Free text, e.g. "2 ore" or "Mezza giornata". Aggregation parses a
    /// leading integer and counts anything unparsable as one hour.
    pub duration: String,
    /// Category label, e.g. "Attrazione", "Museo", "Ristorante".
    #[serde(rename = "type")]
    pub item_type: String,
    pub rating: f64,
    /// Glyph derived from `item_type`; see [`glyph_for_type`].
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub location: Location,
    /// Free-text currency string, e.g. "€15" or "Gratis". Aggregation treats
    /// "Gratis" as zero and parses a leading integer after stripping "€".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Geographic position plus display address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            lat: 0.0,
            lng: 0.0,
            address: "Indirizzo non specificato".to_string(),
        }
    }
}

impl Trip {
    /// Generate a fresh trip ID: "trip::<uuid-v4>"
    pub fn generate_id() -> String {
        format!("trip::{}", Uuid::new_v4())
    }
}

impl TravelDay {
    /// Generate a fresh day ID: "day::<uuid-v4>"
    pub fn generate_id() -> String {
        format!("day::{}", Uuid::new_v4())
    }
}

impl ItineraryItem {
    /// Generate a fresh item ID: "item::<uuid-v4>"
    pub fn generate_id() -> String {
        format!("item::{}", Uuid::new_v4())
    }
}

/// Map an item category label to its display glyph. Unknown labels fall back
/// to the generic pin.
pub fn glyph_for_type(item_type: &str) -> &'static str {
    match item_type {
        "Attrazione" => "🎯",
        "Ristorante" => "🍽️",
        "Hotel" => "🏨",
        "Museo" => "🎨",
        "Monumento" => "🏛️",
        "Natura" => "🌿",
        "Shopping" => "🛍️",
        "Trasporto" => "🚗",
        "Altro" => "📍",
        _ => "📍",
    }
}

/// Request for creating a new trip. The manager assigns the id and the
/// initial day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripRequest {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub participants: u32,
    #[serde(default)]
    pub status: Option<TripStatus>,
}

/// Response after creating or updating a trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TripResponse {
    pub trip: Trip,
    pub success_message: String,
}

/// Response containing all known trips in storage order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripListResponse {
    pub trips: Vec<Trip>,
}

/// Request for partially updating an existing trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripRequest {
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub participants: Option<u32>,
    pub status: Option<TripStatus>,
}

/// Request for selecting the current trip
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetCurrentTripRequest {
    pub trip_id: String,
}

/// Response containing the current trip selection, if any
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentTripResponse {
    pub current_trip: Option<Trip>,
}

/// Request for adding an item to a day. Omitted fields take the standard
/// defaults (time slotted after the existing items, duration "2 ore", type
/// "Attrazione", rating 4.0, glyph from type).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddItineraryItemRequest {
    pub name: String,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, rename = "type")]
    pub item_type: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub estimated_cost: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Response after adding or updating an item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryItemResponse {
    pub item: ItineraryItem,
    pub success_message: String,
}

/// Request for patching an item in place. Only present fields change; a
/// `day_id` naming a different day moves the item to that day's end.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItineraryItemRequest {
    pub name: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    #[serde(rename = "type")]
    pub item_type: Option<String>,
    pub rating: Option<f64>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub location: Option<Location>,
    pub estimated_cost: Option<String>,
    pub notes: Option<String>,
    /// Target day for a move-to-another-day operation
    pub day_id: Option<String>,
}

/// A drag gesture over a day's items: move `source_id` to `target_id`'s
/// position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItemsRequest {
    pub source_id: String,
    pub target_id: String,
}

/// Request for adding an item to the day with a given date, creating the
/// day if the trip has none for that date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddItemForDateRequest {
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
    pub item: AddItineraryItemRequest,
}

/// Aggregated advisory totals for one day's items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySummaryResponse {
    pub day_id: String,
    pub item_count: usize,
    /// Sum of leading integers of each item's duration; unparsable counts as 1
    pub total_hours: u32,
    /// Sum of leading integers of each cost after stripping "€"; "Gratis"
    /// and unparsable count as 0
    pub total_cost: u32,
}

/// Request for importing an itinerary from external file content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportTripRequest {
    pub content: String,
    /// Optional hint from the file name: "json", "csv" or "txt"
    #[serde(default)]
    pub format_hint: Option<String>,
}

/// Response after a successful import
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImportTripResponse {
    pub trip: Trip,
    pub success_message: String,
}

/// Response containing an exported trip as a downloadable JSON document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExportTripResponse {
    pub file_name: String,
    pub content: String,
}

/// One turn of an assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantMessage {
    pub role: AssistantRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantRole {
    User,
    Assistant,
}

/// Request forwarded to the assistant proxy
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantChatRequest {
    pub message: String,
    #[serde(default)]
    pub conversation: Vec<AssistantMessage>,
}

/// Reply from the assistant proxy. `success: false` is a soft failure: the
/// supplied `response` text is a fallback message and is still displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantChatResponse {
    pub response: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// One recorded travel expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    /// ISO 8601 date (YYYY-MM-DD)
    pub date: String,
}

/// Expense category for grouping and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Transport,
    Food,
    Accommodation,
    Activities,
    Shopping,
    Other,
}

impl ExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Transport => "Trasporti",
            ExpenseCategory::Food => "Cibo",
            ExpenseCategory::Accommodation => "Alloggio",
            ExpenseCategory::Activities => "Attività",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Other => "Altro",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ExpenseCategory::Transport => "🚗",
            ExpenseCategory::Food => "🍽️",
            ExpenseCategory::Accommodation => "🏨",
            ExpenseCategory::Activities => "🎯",
            ExpenseCategory::Shopping => "🛍️",
            ExpenseCategory::Other => "💰",
        }
    }
}

impl Expense {
    /// Generate a fresh expense ID: "expense::<uuid-v4>"
    pub fn generate_id() -> String {
        format!("expense::{}", Uuid::new_v4())
    }
}

/// Request for recording a new expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    /// Optional date override (YYYY-MM-DD); defaults to today
    #[serde(default)]
    pub date: Option<String>,
}

/// Response after recording an expense
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseResponse {
    pub expense: Expense,
    pub success_message: String,
}

/// Response containing all recorded expenses, newest first
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseListResponse {
    pub expenses: Vec<Expense>,
}

/// Aggregate view of spending against the trip budget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummaryResponse {
    pub total: f64,
    pub budget: f64,
    pub budget_used_percent: f64,
}
