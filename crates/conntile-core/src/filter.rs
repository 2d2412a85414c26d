use crate::connection::Connection;

/// Lower-cased search terms of `query`, split on runs of whitespace.
pub fn search_terms(query: &str) -> Vec<String> {
    query.to_lowercase().split_whitespace().map(str::to_string).collect()
}

/// Keeps the connections whose name contains every search term, ignoring
/// case. Relative order of `all` is preserved; a blank query keeps
/// everything.
pub fn filter_connections(all: &[Connection], query: &str) -> Vec<Connection> {
    let terms = search_terms(query);
    all.iter()
        .filter(|conn| {
            let name = conn.name.to_lowercase();
            terms.iter().all(|term| name.contains(term.as_str()))
        })
        .cloned()
        .collect()
}
