//! Extras operations for MockNetBoxClient
//!
//! Handles tags

use super::{MockNetBoxClient, lock};
use crate::error::NetBoxError;
use crate::models::*;

pub async fn query_tags(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Tag>, NetBoxError> {
    client.record("query_tags")?;
    let tags = lock(&client.tags);
    let mut results: Vec<Tag> = tags
        .values()
        .filter(|t| {
            filters.iter().all(|(k, v)| match *k {
                "name" => t.name == *v,
                "slug" => t.slug == *v,
                _ => true,
            })
        })
        .cloned()
        .collect();
    results.sort_by_key(|t| t.id);

    let limit = filters
        .iter()
        .find(|(k, _)| *k == "limit")
        .and_then(|(_, v)| v.parse::<usize>().ok());
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    Ok(results)
}
