use std::sync::Arc;

use tracing::{info, warn};

use shared::{
    glyph_for_type, AddItemForDateRequest, AddItineraryItemRequest, DaySummaryResponse,
    ItineraryItem, ItineraryItemResponse, ReorderItemsRequest, TravelDay,
    UpdateItineraryItemRequest,
};

use crate::domain::day_stats;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reorder;
use crate::domain::trip_store::TripStore;

/// Service for item-level operations within travel days: add, remove,
/// update (including move-to-another-day), reorder and the advisory day
/// summary.
#[derive(Clone)]
pub struct ItineraryService {
    store: Arc<TripStore>,
}

impl ItineraryService {
    pub fn new(store: Arc<TripStore>) -> Self {
        Self { store }
    }

    /// Append a new item to the end of a day's items
    pub async fn add_item(
        &self,
        day_id: &str,
        request: AddItineraryItemRequest,
    ) -> DomainResult<ItineraryItemResponse> {
        info!("Adding item to day {}: name={}", day_id, request.name);
        validate_item_name(&request.name)?;

        let day_id = day_id.to_string();
        let item = self
            .store
            .mutate(move |trips| {
                let day = find_day_mut(trips, &day_id)
                    .ok_or_else(|| DomainError::NotFound(format!("Day not found: {}", day_id)))?;

                let item = build_item(request, day.items.len());
                day.items.push(item.clone());
                Ok(item)
            })
            .await?;

        Ok(ItineraryItemResponse {
            item,
            success_message: "Tappa aggiunta all'itinerario!".to_string(),
        })
    }

    /// Add an item to the trip's day with the given date, lazily creating
    /// the day when none exists for that date yet.
    pub async fn add_item_for_date(
        &self,
        trip_id: &str,
        request: AddItemForDateRequest,
    ) -> DomainResult<ItineraryItemResponse> {
        info!("Adding item to trip {} for date {}", trip_id, request.date);
        validate_item_name(&request.item.name)?;

        let trip_id = trip_id.to_string();
        let item = self
            .store
            .mutate(move |trips| {
                let trip = trips
                    .iter_mut()
                    .find(|t| t.id == trip_id)
                    .ok_or_else(|| DomainError::NotFound(format!("Trip not found: {}", trip_id)))?;

                match trip.days.iter_mut().find(|d| d.date == request.date) {
                    Some(day) => {
                        let item = build_item(request.item, day.items.len());
                        day.items.push(item.clone());
                        Ok(item)
                    }
                    None => {
                        let item = build_item(request.item, 0);
                        trip.days.push(TravelDay {
                            id: TravelDay::generate_id(),
                            date: request.date,
                            items: vec![item.clone()],
                        });
                        Ok(item)
                    }
                }
            })
            .await?;

        Ok(ItineraryItemResponse {
            item,
            success_message: "Tappa aggiunta all'itinerario!".to_string(),
        })
    }

    /// Remove the first item matching `item_id`, scanning all trips and days
    /// in order. Absence is success: the delete is idempotent by design.
    pub async fn remove_item(&self, item_id: &str) -> DomainResult<bool> {
        let item_id = item_id.to_string();
        let removed = self
            .store
            .mutate(move |trips| {
                for trip in trips.iter_mut() {
                    for day in trip.days.iter_mut() {
                        if let Some(index) = day.items.iter().position(|i| i.id == item_id) {
                            day.items.remove(index);
                            return Ok(true);
                        }
                    }
                }
                warn!("remove_item: no item with id {}, treating as already removed", item_id);
                Ok(false)
            })
            .await?;

        Ok(removed)
    }

    /// Merge a patch onto the item found within `day_id`. Fields absent from
    /// the patch are unchanged. A patch naming a different `day_id` moves
    /// the item to that day's end; the move is a single atomic step.
    pub async fn update_item(
        &self,
        day_id: &str,
        item_id: &str,
        request: UpdateItineraryItemRequest,
    ) -> DomainResult<ItineraryItemResponse> {
        info!("Updating item {} in day {}", item_id, day_id);
        if let Some(ref name) = request.name {
            validate_item_name(name)?;
        }

        let day_id = day_id.to_string();
        let item_id = item_id.to_string();
        let item = self
            .store
            .mutate(move |trips| {
                let move_target = request.day_id.clone().filter(|target| *target != day_id);

                // Resolve every coordinate before mutating so a failure
                // cannot leave partial state behind
                let (src_trip, src_day) = find_day_position(trips, &day_id)
                    .ok_or_else(|| DomainError::NotFound(format!("Day not found: {}", day_id)))?;
                let index = trips[src_trip].days[src_day]
                    .items
                    .iter()
                    .position(|i| i.id == item_id)
                    .ok_or_else(|| DomainError::NotFound(format!("Item not found: {}", item_id)))?;
                let target_position = match move_target {
                    Some(ref target) => Some(find_day_position(trips, target).ok_or_else(|| {
                        DomainError::NotFound(format!("Day not found: {}", target))
                    })?),
                    None => None,
                };

                apply_patch(&mut trips[src_trip].days[src_day].items[index], request);
                let item = trips[src_trip].days[src_day].items[index].clone();

                if let Some((target_trip, target_day)) = target_position {
                    trips[src_trip].days[src_day].items.remove(index);
                    trips[target_trip].days[target_day].items.push(item.clone());
                }

                Ok(item)
            })
            .await?;

        Ok(ItineraryItemResponse {
            item,
            success_message: "Tappa aggiornata".to_string(),
        })
    }

    /// Replace a day's items with `new_order` verbatim. Callers are
    /// responsible for supplying a permutation of the current items.
    pub async fn reorder_items(
        &self,
        day_id: &str,
        new_order: Vec<ItineraryItem>,
    ) -> DomainResult<()> {
        let day_id = day_id.to_string();
        self.store
            .mutate(move |trips| {
                let day = find_day_mut(trips, &day_id)
                    .ok_or_else(|| DomainError::NotFound(format!("Day not found: {}", day_id)))?;
                day.items = new_order;
                Ok(())
            })
            .await
    }

    /// Apply a drag gesture to a day. Returns whether an order change was
    /// committed; a no-op gesture (same item, or unknown target) never
    /// reaches `reorder_items`.
    pub async fn reorder_by_gesture(
        &self,
        day_id: &str,
        request: ReorderItemsRequest,
    ) -> DomainResult<bool> {
        let items = self
            .store
            .with_trips(|trips| find_day(trips, day_id).map(|d| d.items.clone()))
            .await
            .ok_or_else(|| DomainError::NotFound(format!("Day not found: {}", day_id)))?;

        match reorder::reorder_by_target(&items, &request.source_id, &request.target_id) {
            Some(new_order) => {
                self.reorder_items(day_id, new_order).await?;
                info!("Reordered day {}: {} -> {}", day_id, request.source_id, request.target_id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Advisory totals over one day's items
    pub async fn day_summary(&self, day_id: &str) -> DomainResult<DaySummaryResponse> {
        self.store
            .with_trips(|trips| {
                let day = find_day(trips, day_id)
                    .ok_or_else(|| DomainError::NotFound(format!("Day not found: {}", day_id)))?;
                Ok(DaySummaryResponse {
                    day_id: day.id.clone(),
                    item_count: day.items.len(),
                    total_hours: day_stats::total_hours(&day.items),
                    total_cost: day_stats::total_cost(&day.items),
                })
            })
            .await
    }
}

fn find_day<'a>(trips: &'a [shared::Trip], day_id: &str) -> Option<&'a TravelDay> {
    trips.iter().flat_map(|t| t.days.iter()).find(|d| d.id == day_id)
}

fn find_day_mut<'a>(trips: &'a mut [shared::Trip], day_id: &str) -> Option<&'a mut TravelDay> {
    trips
        .iter_mut()
        .flat_map(|t| t.days.iter_mut())
        .find(|d| d.id == day_id)
}

fn find_day_position(trips: &[shared::Trip], day_id: &str) -> Option<(usize, usize)> {
    trips.iter().enumerate().find_map(|(trip_index, trip)| {
        trip.days
            .iter()
            .position(|d| d.id == day_id)
            .map(|day_index| (trip_index, day_index))
    })
}

/// Materialize a draft into a stored item, filling the standard defaults.
/// `position` is the index the item will take, used for the default time
/// slot ("{9+position}:00").
fn build_item(draft: AddItineraryItemRequest, position: usize) -> ItineraryItem {
    let item_type = draft
        .item_type
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "Attrazione".to_string());

    ItineraryItem {
        id: ItineraryItem::generate_id(),
        name: draft.name.trim().to_string(),
        time: draft
            .time
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| format!("{}:00", 9 + position)),
        duration: draft.duration.unwrap_or_else(|| "2 ore".to_string()),
        rating: draft.rating.unwrap_or(4.0),
        image: glyph_for_type(&item_type).to_string(),
        item_type,
        description: None,
        location: draft.location.unwrap_or_default(),
        estimated_cost: draft.estimated_cost.or_else(|| Some("€0".to_string())),
        notes: draft.notes,
    }
}

fn apply_patch(item: &mut ItineraryItem, patch: UpdateItineraryItemRequest) {
    if let Some(name) = patch.name {
        item.name = name.trim().to_string();
    }
    if let Some(time) = patch.time {
        item.time = time;
    }
    if let Some(duration) = patch.duration {
        item.duration = duration;
    }
    if let Some(item_type) = patch.item_type {
        // The glyph is derived from the type unless explicitly overridden
        if patch.image.is_none() {
            item.image = glyph_for_type(&item_type).to_string();
        }
        item.item_type = item_type;
    }
    if let Some(rating) = patch.rating {
        item.rating = rating;
    }
    if let Some(image) = patch.image {
        item.image = image;
    }
    if let Some(description) = patch.description {
        item.description = Some(description);
    }
    if let Some(location) = patch.location {
        item.location = location;
    }
    if let Some(estimated_cost) = patch.estimated_cost {
        item.estimated_cost = Some(estimated_cost);
    }
    if let Some(notes) = patch.notes {
        item.notes = Some(notes);
    }
}

fn validate_item_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::Validation("Item name cannot be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trip_service::TripService;
    use crate::storage::json::{JsonConnection, TripRepository};
    use crate::storage::traits::Connection;
    use shared::{CreateTripRequest, Location, Trip};
    use tempfile::TempDir;

    struct Fixture {
        trips: TripService,
        itinerary: ItineraryService,
        _temp_dir: TempDir,
    }

    async fn setup_test() -> Fixture {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let connection = JsonConnection::new(temp_dir.path()).expect("Failed to create connection");
        let repository: Arc<TripRepository> = Arc::new(connection.create_trip_repository());
        let store = Arc::new(TripStore::load(repository).await);
        Fixture {
            trips: TripService::new(store.clone()),
            itinerary: ItineraryService::new(store),
            _temp_dir: temp_dir,
        }
    }

    async fn create_trip(fixture: &Fixture) -> Trip {
        fixture
            .trips
            .create_trip(CreateTripRequest {
                name: "Tour della Toscana".to_string(),
                start_date: "2024-01-01".to_string(),
                end_date: "2024-01-03".to_string(),
                participants: 2,
                status: None,
            })
            .await
            .expect("Failed to create trip")
            .trip
    }

    fn draft(name: &str) -> AddItineraryItemRequest {
        AddItineraryItemRequest {
            name: name.to_string(),
            time: None,
            duration: None,
            item_type: None,
            rating: None,
            location: None,
            estimated_cost: None,
            notes: None,
        }
    }

    async fn day_items(fixture: &Fixture, day_id: &str) -> Vec<ItineraryItem> {
        let trips = fixture.trips.list_trips().await.trips;
        trips
            .iter()
            .flat_map(|t| t.days.iter())
            .find(|d| d.id == day_id)
            .expect("day should exist")
            .items
            .clone()
    }

    #[tokio::test]
    async fn test_add_then_find() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let response = fixture
            .itinerary
            .add_item(&day_id, draft("Museo"))
            .await
            .expect("Failed to add item");

        assert!(!response.item.id.is_empty());

        let items = day_items(&fixture, &day_id).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Museo");
        assert_eq!(items[0].id, response.item.id);
    }

    #[tokio::test]
    async fn test_added_items_get_distinct_ids() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let first = fixture.itinerary.add_item(&day_id, draft("Duomo")).await.unwrap();
        let second = fixture.itinerary.add_item(&day_id, draft("Uffizi")).await.unwrap();
        assert_ne!(first.item.id, second.item.id);
    }

    #[tokio::test]
    async fn test_add_fills_defaults() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let first = fixture.itinerary.add_item(&day_id, draft("Duomo")).await.unwrap().item;
        assert_eq!(first.time, "9:00");
        assert_eq!(first.duration, "2 ore");
        assert_eq!(first.item_type, "Attrazione");
        assert_eq!(first.rating, 4.0);
        assert_eq!(first.image, "🎯");
        assert_eq!(first.estimated_cost.as_deref(), Some("€0"));
        assert_eq!(first.location, Location::default());

        // The default time slot advances with the day's item count
        let second = fixture.itinerary.add_item(&day_id, draft("Uffizi")).await.unwrap().item;
        assert_eq!(second.time, "10:00");
    }

    #[tokio::test]
    async fn test_add_derives_glyph_from_type() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let mut request = draft("Trattoria da Mario");
        request.item_type = Some("Ristorante".to_string());
        let item = fixture.itinerary.add_item(&day_id, request).await.unwrap().item;
        assert_eq!(item.image, "🍽️");
    }

    #[tokio::test]
    async fn test_add_to_unknown_day_is_not_found() {
        let fixture = setup_test().await;
        create_trip(&fixture).await;

        let result = fixture.itinerary.add_item("day::missing", draft("Museo")).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_add_rejects_empty_name() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let result = fixture.itinerary.add_item(&day_id, draft("  ")).await;
        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(day_items(&fixture, &day_id).await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let item = fixture.itinerary.add_item(&day_id, draft("Museo")).await.unwrap().item;

        assert!(fixture.itinerary.remove_item(&item.id).await.unwrap());
        // Removing again succeeds without error and changes nothing
        assert!(!fixture.itinerary.remove_item(&item.id).await.unwrap());
        assert!(day_items(&fixture, &day_id).await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_unknown_item_succeeds_silently() {
        let fixture = setup_test().await;
        create_trip(&fixture).await;

        assert!(!fixture.itinerary.remove_item("item::missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_preserves_untouched_fields() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let mut request = draft("Museo");
        request.time = Some("14:00".to_string());
        request.duration = Some("3 ore".to_string());
        request.estimated_cost = Some("€25".to_string());
        let original = fixture.itinerary.add_item(&day_id, request).await.unwrap().item;

        let updated = fixture
            .itinerary
            .update_item(
                &day_id,
                &original.id,
                UpdateItineraryItemRequest {
                    name: Some("New Name".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .item;

        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.time, original.time);
        assert_eq!(updated.duration, original.duration);
        assert_eq!(updated.location, original.location);
        assert_eq!(updated.estimated_cost, original.estimated_cost);
        assert_eq!(updated.rating, original.rating);
    }

    #[tokio::test]
    async fn test_update_unknown_day_or_item_is_not_found() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();
        let item = fixture.itinerary.add_item(&day_id, draft("Museo")).await.unwrap().item;

        let result = fixture
            .itinerary
            .update_item("day::missing", &item.id, UpdateItineraryItemRequest::default())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));

        let result = fixture
            .itinerary
            .update_item(&day_id, "item::missing", UpdateItineraryItemRequest::default())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_moves_item_to_another_day() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        // Create a second day by adding an item for a new date
        let second = fixture
            .itinerary
            .add_item_for_date(
                &trip.id,
                AddItemForDateRequest {
                    date: "2024-01-02".to_string(),
                    item: draft("Cena"),
                },
            )
            .await
            .unwrap();
        let trips = fixture.trips.list_trips().await.trips;
        let second_day_id = trips[0]
            .days
            .iter()
            .find(|d| d.date == "2024-01-02")
            .unwrap()
            .id
            .clone();

        let moved = fixture.itinerary.add_item(&day_id, draft("Museo")).await.unwrap().item;
        fixture
            .itinerary
            .update_item(
                &day_id,
                &moved.id,
                UpdateItineraryItemRequest {
                    day_id: Some(second_day_id.clone()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(day_items(&fixture, &day_id).await.is_empty());
        let target_items = day_items(&fixture, &second_day_id).await;
        // Appended at the end, after the existing item
        assert_eq!(target_items.len(), 2);
        assert_eq!(target_items[0].id, second.item.id);
        assert_eq!(target_items[1].id, moved.id);
    }

    #[tokio::test]
    async fn test_move_to_unknown_day_changes_nothing() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();
        let item = fixture.itinerary.add_item(&day_id, draft("Museo")).await.unwrap().item;

        let result = fixture
            .itinerary
            .update_item(
                &day_id,
                &item.id,
                UpdateItineraryItemRequest {
                    name: Some("Renamed".to_string()),
                    day_id: Some("day::missing".to_string()),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));

        // No partial state observable: the rename did not happen either
        let items = day_items(&fixture, &day_id).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Museo");
    }

    #[tokio::test]
    async fn test_reorder_moves_first_item_after_last() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let a = fixture.itinerary.add_item(&day_id, draft("a")).await.unwrap().item;
        let b = fixture.itinerary.add_item(&day_id, draft("b")).await.unwrap().item;
        let c = fixture.itinerary.add_item(&day_id, draft("c")).await.unwrap().item;

        let changed = fixture
            .itinerary
            .reorder_by_gesture(
                &day_id,
                ReorderItemsRequest {
                    source_id: a.id.clone(),
                    target_id: c.id.clone(),
                },
            )
            .await
            .unwrap();
        assert!(changed);

        let items = day_items(&fixture, &day_id).await;
        let order: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec![b.id.as_str(), c.id.as_str(), a.id.as_str()]);
    }

    #[tokio::test]
    async fn test_noop_gesture_leaves_order_unchanged() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let a = fixture.itinerary.add_item(&day_id, draft("a")).await.unwrap().item;
        let b = fixture.itinerary.add_item(&day_id, draft("b")).await.unwrap().item;

        // Dropping an item on itself
        let changed = fixture
            .itinerary
            .reorder_by_gesture(
                &day_id,
                ReorderItemsRequest {
                    source_id: a.id.clone(),
                    target_id: a.id.clone(),
                },
            )
            .await
            .unwrap();
        assert!(!changed);

        // Target id not present
        let changed = fixture
            .itinerary
            .reorder_by_gesture(
                &day_id,
                ReorderItemsRequest {
                    source_id: a.id.clone(),
                    target_id: "item::missing".to_string(),
                },
            )
            .await
            .unwrap();
        assert!(!changed);

        let items = day_items(&fixture, &day_id).await;
        let order: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(order, vec![a.id.as_str(), b.id.as_str()]);
    }

    #[tokio::test]
    async fn test_reorder_unknown_day_is_not_found() {
        let fixture = setup_test().await;
        create_trip(&fixture).await;

        let result = fixture.itinerary.reorder_items("day::missing", vec![]).await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_day_auto_creation_on_add_for_new_date() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let first_day_id = trip.days[0].id.clone();
        fixture.itinerary.add_item(&first_day_id, draft("Duomo")).await.unwrap();

        fixture
            .itinerary
            .add_item_for_date(
                &trip.id,
                AddItemForDateRequest {
                    date: "2024-01-02".to_string(),
                    item: draft("Uffizi"),
                },
            )
            .await
            .unwrap();

        let trips = fixture.trips.list_trips().await.trips;
        assert_eq!(trips[0].days.len(), 2);

        let new_day = trips[0].days.iter().find(|d| d.date == "2024-01-02").unwrap();
        assert_eq!(new_day.items.len(), 1);
        assert_eq!(new_day.items[0].name, "Uffizi");

        // The original day is unmodified
        let first_day = trips[0].days.iter().find(|d| d.date == "2024-01-01").unwrap();
        assert_eq!(first_day.id, first_day_id);
        assert_eq!(first_day.items.len(), 1);
        assert_eq!(first_day.items[0].name, "Duomo");
    }

    #[tokio::test]
    async fn test_add_for_existing_date_reuses_day() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;

        fixture
            .itinerary
            .add_item_for_date(
                &trip.id,
                AddItemForDateRequest {
                    date: "2024-01-01".to_string(),
                    item: draft("Duomo"),
                },
            )
            .await
            .unwrap();

        let trips = fixture.trips.list_trips().await.trips;
        assert_eq!(trips[0].days.len(), 1);
        assert_eq!(trips[0].days[0].items.len(), 1);
    }

    #[tokio::test]
    async fn test_add_for_date_on_unknown_trip_is_not_found() {
        let fixture = setup_test().await;
        create_trip(&fixture).await;

        let result = fixture
            .itinerary
            .add_item_for_date(
                "trip::missing",
                AddItemForDateRequest {
                    date: "2024-01-02".to_string(),
                    item: draft("Uffizi"),
                },
            )
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_day_summary_totals() {
        let fixture = setup_test().await;
        let trip = create_trip(&fixture).await;
        let day_id = trip.days[0].id.clone();

        let mut duomo = draft("Duomo");
        duomo.duration = Some("2 ore".to_string());
        duomo.estimated_cost = Some("€15".to_string());
        fixture.itinerary.add_item(&day_id, duomo).await.unwrap();

        let mut ponte = draft("Ponte Vecchio");
        ponte.duration = Some("Mezza giornata".to_string());
        ponte.estimated_cost = Some("Gratis".to_string());
        fixture.itinerary.add_item(&day_id, ponte).await.unwrap();

        let summary = fixture.itinerary.day_summary(&day_id).await.unwrap();
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_hours, 3);
        assert_eq!(summary.total_cost, 15);
    }
}
