//! Small helpers on sequences that live next to the turn-taking queue.

/// Returns `length` values starting with `number` followed by its multiples,
/// so `multiples_of(7.0, 5)` is `[7.0, 14.0, 21.0, 28.0, 35.0]`.
#[must_use]
pub fn multiples_of(number: f64, length: usize) -> Vec<f64> {
    (1..=length)
        .map(|factor| {
            #[expect(clippy::cast_precision_loss, reason = "lengths stay far below 2^52")]
            let factor = factor as f64;
            number * factor
        })
        .collect()
}

/// Rotates `data` to the right by `amount` in place: the element at index `i`
/// ends up at `(i + amount) % data.len()`.
pub fn rotate_list_right<T>(data: &mut [T], amount: usize) {
    if data.is_empty() {
        return;
    }
    let amount = amount % data.len();
    data.rotate_right(amount);
}
