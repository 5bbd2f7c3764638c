use rand::distributions::Alphanumeric;
use rand::Rng;

pub const SESSION_ID_LEN: usize = 32;

pub fn random_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}
