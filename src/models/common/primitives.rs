/// Represents a location as an index into the travel matrix.
pub type Location = usize;

/// Represents a time duration or a timestamp.
pub type Duration = i64;

/// Represents a travel cost. Non-negative in valid matrices; 64 bits leave
/// headroom for sums over fleet-sized route collections.
pub type Cost = i64;

/// Represents a signed cost change obtained by a solution modification.
/// Positive values are improvements.
pub type Gain = i64;
