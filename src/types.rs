/// Row identifier assigned by the store (`INTEGER PRIMARY KEY AUTOINCREMENT`).
pub type Id = i32;

/// Monetary amount. Stored as a REAL column; the system works in plain
/// floating point throughout, there is no fixed-point money type here.
pub type Money = f64;
