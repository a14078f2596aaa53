//! # Shared Utility Functions
//!
//! Display helpers used by the wallet terminal and any other consumer of the
//! wallet DTOs.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - keep the first N and last M characters with an ellipsis
//! - [`truncate_address`] - header-sized form of an `0x` address
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(truncate_address(address), "0x5290...9EE7");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
/// Lengths count characters, so non-ASCII input never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 4, 4), "0x52...9EE7");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();
    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Header-sized address: the `0x` marker plus four characters on each side.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
