//! Hash Routes
//!
//! `#/` is the list page, `#/items/{id}` the detail page.

use crate::models::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Item(ItemId),
    /// `#/items/...` with an id that is not a number
    BadItemId,
}

impl Route {
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match (segments.next(), segments.next(), segments.next()) {
            (Some("items"), Some(id), None) => {
                id.parse().map(Route::Item).unwrap_or(Route::BadItemId)
            }
            (Some("items"), _, _) => Route::BadItemId,
            _ => Route::List,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::List | Route::BadItemId => "#/".to_string(),
            Route::Item(id) => format!("#/items/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::from_hash(""), Route::List);
        assert_eq!(Route::from_hash("#/"), Route::List);
        assert_eq!(Route::from_hash("#/items/12"), Route::Item(12));
        assert_eq!(Route::from_hash("#/items/12/"), Route::Item(12));
        assert_eq!(Route::from_hash("#/items/abc"), Route::BadItemId);
        assert_eq!(Route::from_hash("#/items"), Route::BadItemId);
        assert_eq!(Route::from_hash("#/elsewhere"), Route::List);
    }

    #[test]
    fn test_href_round_trips() {
        for route in [Route::List, Route::Item(3)] {
            assert_eq!(Route::from_hash(&route.href()), route);
        }
    }
}
