use super::model::{is_wildcard, Route};

// ---------------------------------------------------------------------------
// In-memory route filtering
// ---------------------------------------------------------------------------

/// Keep routes departing from `origin` and arriving at `destination`.
///
/// Matching is case-insensitive on both endpoints; `destination` may be the
/// wildcard token to accept any arrival airport. Input order is preserved,
/// and filtering an already-filtered list with the same predicates changes
/// nothing.
pub fn filter_routes(routes: &[Route], origin: &str, destination: &str) -> Vec<Route> {
    let wanted_origin = origin.to_lowercase();
    let any_destination = is_wildcard(destination);
    let wanted_destination = destination.to_lowercase();

    routes
        .iter()
        .filter(|route| {
            route.origin.to_lowercase() == wanted_origin
                && (any_destination || route.destination.to_lowercase() == wanted_destination)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(origin: &str, destination: &str) -> Route {
        Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
            price: "50".to_string(),
            duration_minutes: "90".to_string(),
            carrier: "Iberia".to_string(),
        }
    }

    #[test]
    fn wildcard_destination_accepts_any_arrival() {
        let routes = [route("AGP", "MAD")];
        assert_eq!(filter_routes(&routes, "AGP", "cualquiera").len(), 1);
    }

    #[test]
    fn exact_destination_must_match() {
        let routes = [route("AGP", "MAD")];
        assert_eq!(filter_routes(&routes, "AGP", "MAD").len(), 1);
        assert!(filter_routes(&routes, "AGP", "JFK").is_empty());
    }

    #[test]
    fn origin_must_match() {
        let routes = [route("AGP", "MAD")];
        assert!(filter_routes(&routes, "MAD", "cualquiera").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let routes = [route("AGP", "MAD")];
        assert_eq!(filter_routes(&routes, "agp", "mad").len(), 1);
    }

    #[test]
    fn preserves_input_order() {
        let routes = [route("AGP", "MAD"), route("MAD", "AGP"), route("AGP", "BCN")];
        let filtered = filter_routes(&routes, "AGP", "cualquiera");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].destination, "MAD");
        assert_eq!(filtered[1].destination, "BCN");
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let routes = [route("AGP", "MAD"), route("MAD", "AGP"), route("AGP", "BCN")];
        let once = filter_routes(&routes, "AGP", "cualquiera");
        let twice = filter_routes(&once, "AGP", "cualquiera");
        assert_eq!(once, twice);
    }
}
