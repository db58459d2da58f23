//! Typed payloads carried inside sub-requests and results.
//!
//! Only the messages the session sends or reads are modelled. Response
//! types default every field so that a partial payload (the server omits
//! empty fields) still decodes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Request messages
// ---------------------------------------------------------------------------

/// Body of `DOWNLOAD_SETTINGS`: the settings version the client has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadSettingsMessage {
    pub hash: String,
}

/// Body of `GET_MAP_OBJECTS`.
///
/// `since_timestamp_ms[i]` is the last time the client saw `cell_id[i]`;
/// zero asks for the full cell contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetMapObjectsMessage {
    pub cell_id: Vec<u64>,
    pub since_timestamp_ms: Vec<i64>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Body of `GET_INVENTORY`: only items changed after this time are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetInventoryMessage {
    pub last_timestamp_ms: i64,
}

// ---------------------------------------------------------------------------
// GET_PLAYER
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPlayerResponse {
    pub success: bool,
    pub player_data: Option<PlayerData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerData {
    pub creation_timestamp_ms: i64,
    pub username: String,
    pub team: i32,
    pub max_pokemon_storage: i32,
    pub max_item_storage: i32,
    pub currencies: Vec<PlayerCurrency>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerCurrency {
    pub name: String,
    pub amount: i32,
}

// ---------------------------------------------------------------------------
// GET_INVENTORY
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetInventoryResponse {
    pub success: bool,
    pub inventory_delta: Option<InventoryDelta>,
}

/// Items changed between two server timestamps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryDelta {
    pub original_timestamp_ms: i64,
    pub new_timestamp_ms: i64,
    pub inventory_items: Vec<InventoryItem>,
}

/// One inventory entry. The item itself stays encoded; its schema is
/// large and the session never inspects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItem {
    pub modified_timestamp_ms: i64,
    pub deleted_item_key: i64,
    pub inventory_item_data: Vec<u8>,
}

// ---------------------------------------------------------------------------
// GET_MAP_OBJECTS
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapObjectsStatus {
    #[default]
    UnsetStatus,
    Success,
    LocationUnset,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetMapObjectsResponse {
    pub status: MapObjectsStatus,
    pub map_cells: Vec<MapCell>,
}

/// Everything the server reports for one S2 cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapCell {
    pub s2_cell_id: u64,
    pub current_timestamp_ms: i64,
    pub forts: Vec<Fort>,
    pub wild_pokemons: Vec<WildPokemon>,
    pub nearby_pokemons: Vec<NearbyPokemon>,
}

/// A gym or pokéstop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fort {
    pub id: String,
    pub last_modified_timestamp_ms: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WildPokemon {
    pub encounter_id: u64,
    pub spawn_point_id: String,
    pub pokemon_id: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub time_till_hidden_ms: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NearbyPokemon {
    pub pokemon_id: i32,
    pub distance_in_meters: f32,
    pub encounter_id: u64,
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn test_get_player_response_decodes_partial_payload() {
        let json = r#"{"success": true, "player_data": {"username": "ash"}}"#;
        let resp: GetPlayerResponse = serde_json::from_str(json).unwrap();

        assert!(resp.success);
        let player = resp.player_data.unwrap();
        assert_eq!(player.username, "ash");
        assert_eq!(player.team, 0);
        assert!(player.currencies.is_empty());
    }

    #[test]
    fn test_get_map_objects_response_empty_object_is_default() {
        let resp: GetMapObjectsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.status, MapObjectsStatus::UnsetStatus);
        assert!(resp.map_cells.is_empty());
    }

    #[test]
    fn test_map_objects_status_json_format() {
        let json = serde_json::to_string(&MapObjectsStatus::LocationUnset).unwrap();
        assert_eq!(json, "\"LOCATION_UNSET\"");
    }

    #[test]
    fn test_get_map_objects_message_keeps_parallel_arrays() {
        let msg = GetMapObjectsMessage {
            cell_id: vec![1, 2, 3],
            since_timestamp_ms: vec![0; 3],
            latitude: 1.0,
            longitude: 2.0,
        };
        let json: serde_json::Value = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["cell_id"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["since_timestamp_ms"], serde_json::json!([0, 0, 0]));
    }

    #[test]
    fn test_inventory_delta_round_trip() {
        let resp = GetInventoryResponse {
            success: true,
            inventory_delta: Some(InventoryDelta {
                original_timestamp_ms: 10,
                new_timestamp_ms: 20,
                inventory_items: vec![InventoryItem {
                    modified_timestamp_ms: 15,
                    deleted_item_key: 0,
                    inventory_item_data: vec![8, 1],
                }],
            }),
        };
        let bytes = serde_json::to_vec(&resp).unwrap();
        let decoded: GetInventoryResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(resp, decoded);
    }
}
