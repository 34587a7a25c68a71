use serde::{Deserialize, Serialize};

use crate::domain::Artwork;

// Row count per page, fixed by the remote source; it is not negotiable
// from the client side.
pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtworksResponse {
    pub data: Vec<Artwork>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkPage {
    pub items: Vec<Artwork>,
    pub total: u64,
}

impl From<ArtworksResponse> for ArtworkPage {
    fn from(response: ArtworksResponse) -> Self {
        Self {
            items: response.data,
            total: response.pagination.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArtworkId;

    #[test]
    fn decodes_catalog_body_with_sparse_fields() {
        // Trimmed body in the shape the catalog endpoint actually returns;
        // fields the client never reads must not break decoding.
        let body = r#"{
            "pagination": {
                "total": 127744,
                "limit": 12,
                "offset": 0,
                "total_pages": 10646,
                "current_page": 1
            },
            "data": [
                {
                    "id": 14556,
                    "title": "Auvers, Panoramic View",
                    "place_of_origin": "France",
                    "artist_display": "Paul Cezanne",
                    "inscriptions": null,
                    "date_start": 1873,
                    "date_end": 1875,
                    "api_model": "artworks"
                },
                {
                    "id": 14574,
                    "title": "The Bay of Marseille",
                    "date_start": 1884
                }
            ]
        }"#;

        let decoded: ArtworksResponse = serde_json::from_str(body).unwrap();
        let page = ArtworkPage::from(decoded);

        assert_eq!(page.total, 127744);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, ArtworkId(14556));
        assert_eq!(page.items[0].inscriptions, None);
        assert_eq!(page.items[1].place_of_origin, None);
        assert_eq!(page.items[1].date_end, None);
    }
}
