//! # Challenge Rating Conversion
//!
//! Maps a monster's Challenge Rating to an XP value and to a numeric
//! rating for comparisons.
//!
//! The two lookups are deliberately asymmetric: [`cr_to_xp`] is keyed by
//! the *raw string* form of the rating exactly as stored in the bestiary,
//! while [`parse_cr`] produces a parsed float. This mirrors the stored
//! data format and must not be unified without migrating that data (a
//! rating written `"1.0"` instead of `"1"` would diverge between the two).

/// XP awarded for a single monster of each Challenge Rating, keyed by the
/// rating's string form as it appears in the bestiary.
const CR_XP_TABLE: [(&str, f64); 29] = [
    ("0", 10.0),
    ("1/8", 25.0),
    ("1/4", 50.0),
    ("1/2", 100.0),
    ("1", 200.0),
    ("2", 450.0),
    ("3", 700.0),
    ("4", 1100.0),
    ("5", 1800.0),
    ("6", 2300.0),
    ("7", 2900.0),
    ("8", 3900.0),
    ("9", 5000.0),
    ("10", 5900.0),
    ("11", 7200.0),
    ("12", 8400.0),
    ("13", 10000.0),
    ("14", 11500.0),
    ("15", 13000.0),
    ("16", 15000.0),
    ("17", 18000.0),
    ("18", 20000.0),
    ("19", 22000.0),
    ("20", 25000.0),
    ("21", 33000.0),
    ("22", 41000.0),
    ("23", 50000.0),
    ("24", 62000.0),
    ("30", 155000.0),
];

/// XP assigned to ratings missing from the table.
pub const DEFAULT_XP: f64 = 10.0;

/// Parses a Challenge Rating string into a float.
///
/// Accepts an integer or decimal string, or a fraction such as `"1/4"`.
/// Empty or unparseable input yields `0.0` rather than an error.
///
/// # Examples
///
/// ```
/// use menagerie::generation::challenge::parse_cr;
///
/// assert_eq!(parse_cr("1/4"), 0.25);
/// assert_eq!(parse_cr("5"), 5.0);
/// assert_eq!(parse_cr(""), 0.0);
/// ```
pub fn parse_cr(cr: &str) -> f64 {
    let cr = cr.trim();
    if cr.is_empty() {
        return 0.0;
    }
    if let Some((numerator, denominator)) = cr.split_once('/') {
        let numerator: f64 = numerator.trim().parse().unwrap_or(0.0);
        let denominator: f64 = denominator.trim().parse().unwrap_or(0.0);
        if denominator == 0.0 {
            return 0.0;
        }
        return numerator / denominator;
    }
    cr.parse().unwrap_or(0.0)
}

/// Looks up the XP value for a Challenge Rating string.
///
/// Unknown ratings fall back to [`DEFAULT_XP`] (10 XP), so a bestiary
/// entry with an odd rating still contributes a token amount.
pub fn cr_to_xp(cr: &str) -> f64 {
    CR_XP_TABLE
        .iter()
        .find(|(key, _)| *key == cr)
        .map_or(DEFAULT_XP, |(_, xp)| *xp)
}
