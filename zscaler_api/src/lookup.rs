//! Exact-name lookups on top of the paginated `search` filter.
//!
//! The server's `search` parameter is a substring match, so every lookup
//! re-checks names locally after aggregation.

use serde::de::DeserializeOwned;

use crate::{pagination::get_all_pages, types::ApiResponse, Error, Service};

/// A resource with a display name.
pub trait Named {
    fn name(&self) -> &str;
}

/// Returns the first item (in list order) whose name equals `name`,
/// ignoring case.
pub fn find_by_name<T: Named>(items: Vec<T>, name: &str, resource: &'static str) -> Result<T, Error> {
    items
        .into_iter()
        .find(|item| names_match(item.name(), name))
        .ok_or_else(|| Error::NotFoundByName {
            resource,
            name: name.to_string(),
        })
}

/// Case-insensitive equality, lowercasing one character at a time with no
/// context rules. Final sigma `ς` folds to `σ`. Multi-character folds such
/// as `ß` -> `ss` are not applied.
pub fn names_match(a: &str, b: &str) -> bool {
    fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| if c == 'ς' { 'σ' } else { c })
    }
    fold(a).eq(fold(b))
}

/// Searches `url` for `name` with the service's scope, walks every page,
/// then picks the exact (case-insensitive) match.
pub async fn get_by_name<T>(
    service: &Service,
    url: &str,
    name: &str,
    resource: &'static str,
) -> Result<(T, ApiResponse), Error>
where
    T: DeserializeOwned + Named,
{
    let (items, resp) = get_all_pages::<T>(service, url, &service.filter(name)).await?;
    tracing::debug!("Search for {} '{}' returned {} candidates", resource, name, items.len());
    let found = find_by_name(items, name, resource)?;
    Ok((found, resp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Thing {
        id: u32,
        name: String,
    }

    impl Named for Thing {
        fn name(&self) -> &str {
            &self.name
        }
    }

    fn things() -> Vec<Thing> {
        vec![
            Thing {
                id: 1,
                name: "Foo".to_string(),
            },
            Thing {
                id: 2,
                name: "foo".to_string(),
            },
            Thing {
                id: 3,
                name: "Foobar".to_string(),
            },
        ]
    }

    #[test]
    fn first_case_insensitive_match_wins() {
        let found = find_by_name(things(), "FOO", "thing").unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn substring_is_not_a_match() {
        let found = find_by_name(things(), "foobar", "thing").unwrap();
        assert_eq!(found.id, 3);
        assert!(find_by_name(things(), "oba", "thing").is_err());
    }

    #[test]
    fn missing_name_is_descriptive() {
        let err = find_by_name(things(), "Bar", "thing").unwrap_err();
        assert!(matches!(err, Error::NotFoundByName { .. }));
        assert_eq!(err.to_string(), "no thing named 'Bar' was found");
    }

    #[test]
    fn greek_sigma_forms_match() {
        assert!(names_match("ΟΔΟΣ", "οδοσ"));
        assert!(names_match("ΟΔΟΣ", "οδος"));
        assert!(!names_match("Straße", "STRASSE"));
        assert!(!names_match("ΟΔΟΣ", "οδο"));
    }

    #[test]
    fn lookup_uses_folded_names() {
        let items = vec![Thing {
            id: 7,
            name: "ΟΔΟΣ".to_string(),
        }];
        assert_eq!(find_by_name(items, "οδοσ", "thing").unwrap().id, 7);
    }
}
