//! Registry construction and the lookup operations.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::db::ENTRIES;
use crate::prefix::OuiPrefix;

static OUI_DB: OnceLock<HashMap<OuiPrefix, &'static [&'static str]>> = OnceLock::new();

/// Retrieves or initializes the registry map.
///
/// The literal data set is checked while the map is built: a malformed,
/// non-canonical or duplicated key, or a row with no manufacturers, is a
/// data-entry mistake and panics here with the offending row.
fn get_oui_db() -> &'static HashMap<OuiPrefix, &'static [&'static str]> {
    OUI_DB.get_or_init(|| {
        let mut db = HashMap::with_capacity(ENTRIES.len());
        for &(key, manufacturers) in ENTRIES {
            let prefix: OuiPrefix = key
                .parse()
                .unwrap_or_else(|_| panic!("malformed OUI key in data set: {key:?}"));
            assert_eq!(
                prefix.to_string(),
                key,
                "OUI key is not canonical lowercase: {key:?}"
            );
            assert!(
                !manufacturers.is_empty(),
                "OUI {key} has no manufacturers registered"
            );
            if db.insert(prefix, manufacturers).is_some() {
                panic!("duplicate OUI key in data set: {key}");
            }
        }
        debug!("OUI registry initialized with {} prefixes", db.len());
        db
    })
}

/// Returns every manufacturer registered for the address's OUI.
///
/// The address is any colon-delimited string; only the first three
/// segments matter and case is ignored. An unknown prefix is a normal
/// outcome and yields an empty slice, as does input no prefix can be read
/// from at all (fewer than three segments, non-hex groups).
pub fn lookup_manufacturers(address: &str) -> &'static [&'static str] {
    match OuiPrefix::from_address(address) {
        Ok(prefix) => manufacturers_for(prefix),
        Err(_) => {
            trace!("no OUI prefix in {address:?}");
            &[]
        }
    }
}

/// Looks up an already-parsed prefix.
pub fn manufacturers_for(prefix: OuiPrefix) -> &'static [&'static str] {
    match get_oui_db().get(&prefix) {
        Some(manufacturers) => {
            trace!("OUI {prefix} registered to {manufacturers:?}");
            manufacturers
        }
        None => {
            trace!("OUI {prefix} not in registry");
            &[]
        }
    }
}

/// Iterates over the registered table, in unspecified order.
pub fn entries() -> impl Iterator<Item = (OuiPrefix, &'static [&'static str])> {
    get_oui_db()
        .iter()
        .map(|(&prefix, &manufacturers)| (prefix, manufacturers))
}
