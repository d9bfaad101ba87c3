//! Built-in region catalog: curated world cities with fixed UTC offsets.
//!
//! Offsets are standard time; DST is not modeled.

use zonecast_core::types::{Region, RegionSet};

struct CatalogEntry {
    id: &'static str,
    name: &'static str,
    country: &'static str,
    offset: f64,
}

const CATALOG: [CatalogEntry; 44] = [
    CatalogEntry { id: "pago-pago", name: "Pago Pago", country: "AS", offset: -11.0 },
    CatalogEntry { id: "honolulu", name: "Honolulu", country: "US", offset: -10.0 },
    CatalogEntry { id: "anchorage", name: "Anchorage", country: "US", offset: -9.0 },
    CatalogEntry { id: "los-angeles", name: "Los Angeles", country: "US", offset: -8.0 },
    CatalogEntry { id: "vancouver", name: "Vancouver", country: "CA", offset: -8.0 },
    CatalogEntry { id: "denver", name: "Denver", country: "US", offset: -7.0 },
    CatalogEntry { id: "mexico-city", name: "Mexico City", country: "MX", offset: -6.0 },
    CatalogEntry { id: "chicago", name: "Chicago", country: "US", offset: -6.0 },
    CatalogEntry { id: "new-york", name: "New York", country: "US", offset: -5.0 },
    CatalogEntry { id: "toronto", name: "Toronto", country: "CA", offset: -5.0 },
    CatalogEntry { id: "lima", name: "Lima", country: "PE", offset: -5.0 },
    CatalogEntry { id: "caracas", name: "Caracas", country: "VE", offset: -4.0 },
    CatalogEntry { id: "santiago", name: "Santiago", country: "CL", offset: -4.0 },
    CatalogEntry { id: "st-johns", name: "St. John's", country: "CA", offset: -3.5 },
    CatalogEntry { id: "sao-paulo", name: "São Paulo", country: "BR", offset: -3.0 },
    CatalogEntry { id: "buenos-aires", name: "Buenos Aires", country: "AR", offset: -3.0 },
    CatalogEntry { id: "praia", name: "Praia", country: "CV", offset: -1.0 },
    CatalogEntry { id: "london", name: "London", country: "GB", offset: 0.0 },
    CatalogEntry { id: "lisbon", name: "Lisbon", country: "PT", offset: 0.0 },
    CatalogEntry { id: "accra", name: "Accra", country: "GH", offset: 0.0 },
    CatalogEntry { id: "paris", name: "Paris", country: "FR", offset: 1.0 },
    CatalogEntry { id: "berlin", name: "Berlin", country: "DE", offset: 1.0 },
    CatalogEntry { id: "lagos", name: "Lagos", country: "NG", offset: 1.0 },
    CatalogEntry { id: "cairo", name: "Cairo", country: "EG", offset: 2.0 },
    CatalogEntry { id: "johannesburg", name: "Johannesburg", country: "ZA", offset: 2.0 },
    CatalogEntry { id: "athens", name: "Athens", country: "GR", offset: 2.0 },
    CatalogEntry { id: "moscow", name: "Moscow", country: "RU", offset: 3.0 },
    CatalogEntry { id: "istanbul", name: "Istanbul", country: "TR", offset: 3.0 },
    CatalogEntry { id: "nairobi", name: "Nairobi", country: "KE", offset: 3.0 },
    CatalogEntry { id: "tehran", name: "Tehran", country: "IR", offset: 3.5 },
    CatalogEntry { id: "dubai", name: "Dubai", country: "AE", offset: 4.0 },
    CatalogEntry { id: "kabul", name: "Kabul", country: "AF", offset: 4.5 },
    CatalogEntry { id: "karachi", name: "Karachi", country: "PK", offset: 5.0 },
    CatalogEntry { id: "mumbai", name: "Mumbai", country: "IN", offset: 5.5 },
    CatalogEntry { id: "dhaka", name: "Dhaka", country: "BD", offset: 6.0 },
    CatalogEntry { id: "yangon", name: "Yangon", country: "MM", offset: 6.5 },
    CatalogEntry { id: "bangkok", name: "Bangkok", country: "TH", offset: 7.0 },
    CatalogEntry { id: "singapore", name: "Singapore", country: "SG", offset: 8.0 },
    CatalogEntry { id: "shanghai", name: "Shanghai", country: "CN", offset: 8.0 },
    CatalogEntry { id: "tokyo", name: "Tokyo", country: "JP", offset: 9.0 },
    CatalogEntry { id: "seoul", name: "Seoul", country: "KR", offset: 9.0 },
    CatalogEntry { id: "adelaide", name: "Adelaide", country: "AU", offset: 9.5 },
    CatalogEntry { id: "sydney", name: "Sydney", country: "AU", offset: 10.0 },
    CatalogEntry { id: "auckland", name: "Auckland", country: "NZ", offset: 12.0 },
];

/// Ids seeding a fresh dashboard, most commonly tracked first.
const POPULAR_IDS: [&str; 8] = [
    "new-york",
    "london",
    "tokyo",
    "sydney",
    "los-angeles",
    "paris",
    "singapore",
    "dubai",
];

/// How many popular regions a fresh dashboard starts with.
pub const DEFAULT_SELECTION_COUNT: usize = 6;

fn to_region(entry: &CatalogEntry) -> Option<Region> {
    Region::new(
        entry.id,
        entry.name,
        format!("({}) {}", gmt_label(entry.offset), entry.name),
        entry.country,
        entry.offset,
    )
    .ok()
}

fn gmt_label(offset: f64) -> String {
    let sign = if offset < 0.0 { '-' } else { '+' };
    let abs = offset.abs();
    let hours = abs.trunc() as u32;
    let minutes = ((abs - abs.trunc()) * 60.0).round() as u32;
    format!("GMT{sign}{hours:02}:{minutes:02}")
}

/// Every catalog region, ordered by offset.
pub fn all_regions() -> Vec<Region> {
    CATALOG.iter().filter_map(to_region).collect()
}

/// The popular subset, in popularity order.
pub fn popular_regions() -> Vec<Region> {
    POPULAR_IDS.iter().filter_map(|id| find(id)).collect()
}

/// Look up one catalog region by id.
pub fn find(id: &str) -> Option<Region> {
    CATALOG.iter().find(|e| e.id == id).and_then(to_region)
}

/// Starting selection for a fresh dashboard: the first
/// [`DEFAULT_SELECTION_COUNT`] popular regions.
pub fn default_selection() -> RegionSet {
    let mut set = RegionSet::new();
    for region in popular_regions().into_iter().take(DEFAULT_SELECTION_COUNT) {
        // Catalog ids are unique, so add cannot fail here.
        let _ = set.add(region);
    }
    set
}

/// Case-insensitive catalog search over name, formatted name, and country
/// code. Regions already in `selected` are excluded and at most `limit`
/// results are returned.
pub fn search(query: &str, selected: &RegionSet, limit: usize) -> Vec<Region> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();
    all_regions()
        .into_iter()
        .filter(|r| !selected.contains(&r.id))
        .filter(|r| {
            r.display_name.to_lowercase().contains(&needle)
                || r.formatted_name.to_lowercase().contains(&needle)
                || r.country_code.to_lowercase().contains(&needle)
        })
        .take(limit)
        .collect()
}
