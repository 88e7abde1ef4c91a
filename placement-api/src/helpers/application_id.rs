use rand::Rng;

const SUFFIX_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 5;

/// `JNF` + epoch milliseconds + five random uppercase alphanumerics.
/// Unique in practice, not unguessable.
pub fn generate_application_id() -> String {
    generate_with(chrono::Utc::now().timestamp_millis(), &mut rand::thread_rng())
}

fn generate_with<R: Rng>(millis: i64, rng: &mut R) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARS[rng.gen_range(0..SUFFIX_CHARS.len())] as char)
        .collect();
    format!("JNF{millis}{suffix}")
}
