/// Alias to a scalar floating type.
///
/// NOTE: weights are accumulated over many small updates, so `f64` is used to keep the precision
/// of late iterations where the learning rate is tiny.
pub type Float = f64;
