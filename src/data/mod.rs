/// Data layer: record types, loading, and filtering.
///
/// Architecture:
/// ```text
///  airports.txt        routes.txt
///        │                  │
///        ▼                  ▼
///   ┌──────────┐      ┌──────────┐
///   │  loader  │─────▶│  loader  │  parse records → Airport / Route
///   └──────────┘ codes└──────────┘
///                           │
///                           ▼
///                      Vec<Route>
///                           │
///                           ▼
///                     ┌──────────┐
///                     │  filter  │  origin/destination predicates
///                     └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
