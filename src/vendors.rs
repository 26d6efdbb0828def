use crate::registry;

/// Defines the contract for resolving device manufacturers from hardware
/// addresses.
pub trait VendorRepository {
    /// Retrieves the manufacturers registered for an address's OUI.
    ///
    /// # Arguments
    /// * `address` - The hardware address to look up.
    ///
    /// # Returns
    /// Every name registered for the prefix, oldest association first, or
    /// an empty slice when the OUI is unknown.
    fn manufacturers(&self, address: &str) -> &'static [&'static str];
}

/// Repository backed by the static table compiled into this crate.
pub struct OuiRegistry;

impl VendorRepository for OuiRegistry {
    fn manufacturers(&self, address: &str) -> &'static [&'static str] {
        registry::lookup_manufacturers(address)
    }
}
