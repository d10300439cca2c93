use serde::{Deserialize, Serialize};

/// A single non-fungible token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_preview_url: Option<String>,
}

impl Collectible {
    pub fn new(id: impl Into<String>, image_preview_url: Option<&str>) -> Self {
        Self {
            id: id.into(),
            image_preview_url: image_preview_url.map(str::to_string),
        }
    }

    /// Thumbnail URL, treating an empty string as absent.
    pub fn thumbnail(&self) -> Option<&str> {
        self.image_preview_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// One display row of a family.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollectibleRow(pub Vec<Collectible>);

impl CollectibleRow {
    pub fn tokens(&self) -> &[Collectible] {
        &self.0
    }
}

/// Same-collection holdings, already grouped into ordered rows upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectibleFamily {
    pub name: String,
    pub rows: Vec<CollectibleRow>,
}

impl CollectibleFamily {
    pub fn new(name: impl Into<String>, rows: Vec<CollectibleRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_thumbnail_is_absent() {
        assert_eq!(Collectible::new("a", Some("")).thumbnail(), None);
        assert_eq!(Collectible::new("a", None).thumbnail(), None);
        assert_eq!(
            Collectible::new("a", Some("https://img/a.png")).thumbnail(),
            Some("https://img/a.png")
        );
    }

    #[test]
    fn test_row_deserializes_from_plain_array() {
        let json = r#"{"name":"Punks","rows":[[{"id":"1"},{"id":"2","image_preview_url":"u"}]]}"#;
        let family: CollectibleFamily = serde_json::from_str(json).unwrap();
        assert_eq!(family.row_count(), 1);
        assert_eq!(family.rows[0].tokens().len(), 2);
    }
}
