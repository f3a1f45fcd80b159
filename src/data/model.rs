use csv::StringRecord;

// ---------------------------------------------------------------------------
// Wildcard sentinel
// ---------------------------------------------------------------------------

/// Filter values meaning "match everything", in either supported spelling.
const WILDCARD_TOKENS: [&str; 2] = ["cualquiera", "any"];

/// Whether a filter value is the wildcard sentinel.
pub fn is_wildcard(filter: &str) -> bool {
    WILDCARD_TOKENS
        .iter()
        .any(|token| filter.eq_ignore_ascii_case(token))
}

// ---------------------------------------------------------------------------
// Airport – one record of the airport source file
// ---------------------------------------------------------------------------

/// A single airport record: `code,country,latitude,longitude`.
///
/// Coordinates stay as text; nothing downstream does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub code: String,
    pub country: String,
    pub latitude: String,
    pub longitude: String,
}

impl Airport {
    /// Build an airport from a parsed record. A record with fewer than four
    /// fields is not an airport; fields beyond the fourth are ignored.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        if record.len() < 4 {
            return None;
        }
        Some(Airport {
            code: record[0].trim().to_string(),
            country: record[1].trim().to_string(),
            latitude: record[2].trim().to_string(),
            longitude: record[3].trim().to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Route – one record of the route source file
// ---------------------------------------------------------------------------

/// A single route record: `origin,destination,price,durationMinutes,carrier`.
///
/// Price and duration are unvalidated passthrough text, rendered as-is in the
/// report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub origin: String,
    pub destination: String,
    pub price: String,
    pub duration_minutes: String,
    pub carrier: String,
}

impl Route {
    /// Build a route from a parsed record. A record with fewer than five
    /// fields is not a route; fields beyond the fifth are ignored.
    pub fn from_record(record: &StringRecord) -> Option<Self> {
        if record.len() < 5 {
            return None;
        }
        Some(Route {
            origin: record[0].trim().to_string(),
            destination: record[1].trim().to_string(),
            price: record[2].trim().to_string(),
            duration_minutes: record[3].trim().to_string(),
            carrier: record[4].trim().to_string(),
        })
    }
}
