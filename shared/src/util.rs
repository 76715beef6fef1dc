use rand::Rng;

/// Length of generated order ids
pub const SHORT_ID_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a short lowercase base-36 id (e.g. `"k3j9x0a2q"`).
///
/// 9 characters give 36^9 (~10^14) values, enough for a single venue's
/// order history. Callers that keep a collection check for collisions.
pub fn short_id() -> String {
    let mut rng = rand::thread_rng();
    (0..SHORT_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_id_is_lowercase_base36() {
        for _ in 0..100 {
            let id = short_id();
            assert_eq!(id.len(), SHORT_ID_LEN);
            assert!(
                id.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
            );
        }
    }
}
