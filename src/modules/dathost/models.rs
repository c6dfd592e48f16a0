use serde::Deserialize;

/// Snapshot of one Dathost game server, fetched fresh for every command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawServer")]
pub struct ServerRecord {
    pub id: String,
    pub name: String,
    pub running: bool,
    pub players_current: u32,
    pub players_max: u32,
    pub map: Option<String>,
    pub custom_domain: Option<String>,
    pub game_port: Option<u16>,
    pub location: Option<String>,
}

#[derive(Deserialize)]
struct RawServer {
    id: String,
    name: String,
    #[serde(default)]
    on: Option<bool>,
    #[serde(default)]
    players_current: Option<u32>,
    #[serde(default)]
    players_max: Option<u32>,
    #[serde(default)]
    map: Option<String>,
    #[serde(default)]
    custom_domain: Option<String>,
    #[serde(default)]
    ports: Option<RawPorts>,
    #[serde(default)]
    location: Option<String>,
}

#[derive(Deserialize)]
struct RawPorts {
    #[serde(default)]
    game: Option<u16>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawServer> for ServerRecord {
    fn from(raw: RawServer) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            running: raw.on.unwrap_or(false),
            players_current: raw.players_current.unwrap_or(0),
            players_max: raw.players_max.unwrap_or(0),
            map: present(raw.map),
            custom_domain: present(raw.custom_domain),
            game_port: raw.ports.and_then(|p| p.game),
            location: present(raw.location),
        }
    }
}

#[cfg(test)]
pub(crate) fn server(name: &str) -> ServerRecord {
    ServerRecord {
        id: format!("id-{}", name.to_lowercase()),
        name: name.to_string(),
        running: false,
        players_current: 0,
        players_max: 10,
        map: None,
        custom_domain: None,
        game_port: None,
        location: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_provider_payload_and_ignores_unknown_fields() {
        let record: ServerRecord = serde_json::from_value(json!({
            "id": "67dc83cf3e825ed3401c192f",
            "name": "Retake #1",
            "on": true,
            "players_current": 4,
            "players_max": 10,
            "map": "de_mirage",
            "custom_domain": "retake.example.com",
            "ports": { "game": 27015, "gotv": 27020 },
            "location": "helsinki",
            "game": "cs2",
            "booting": false
        }))
        .unwrap();

        assert_eq!(record.id, "67dc83cf3e825ed3401c192f");
        assert!(record.running);
        assert_eq!((record.players_current, record.players_max), (4, 10));
        assert_eq!(record.map.as_deref(), Some("de_mirage"));
        assert_eq!(record.custom_domain.as_deref(), Some("retake.example.com"));
        assert_eq!(record.game_port, Some(27015));
        assert_eq!(record.location.as_deref(), Some("helsinki"));
    }

    #[test]
    fn missing_and_null_fields_fall_back() {
        let record: ServerRecord = serde_json::from_value(json!({
            "id": "abc",
            "name": "Scrim",
            "players_current": null,
            "custom_domain": "",
            "ports": { "game": null },
            "location": null
        }))
        .unwrap();

        assert!(!record.running);
        assert_eq!((record.players_current, record.players_max), (0, 0));
        assert_eq!(record.custom_domain, None);
        assert_eq!(record.game_port, None);
        assert_eq!(record.location, None);
        assert_eq!(record.map, None);
    }

    #[test]
    fn listing_is_an_array_of_records() {
        let records: Vec<ServerRecord> = serde_json::from_value(json!([
            { "id": "1", "name": "Alpha" },
            { "id": "2", "name": "Alpha-2", "on": true }
        ]))
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "Alpha-2");
        assert!(records[1].running);
    }
}
