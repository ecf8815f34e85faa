//! Session key derivation for one-to-one conversations.
//!
//! A session key has the form `chat_<a>_<b>`. The key itself is order-sensitive while
//! the conversation it names is not, so new rows are always written under the
//! canonical ordering (smaller id first) and readers probe both orderings to keep rows
//! written under the sender-first scheme visible.

/// Builds the session key for `a` and `b`, preserving the supplied order.
pub fn session_key(a: i32, b: i32) -> String {
    format!("chat_{}_{}", a, b)
}

/// Builds the order-independent session key for the pair `{a, b}`.
pub fn canonical_session_key(a: i32, b: i32) -> String {
    if a <= b {
        session_key(a, b)
    } else {
        session_key(b, a)
    }
}

/// Both possible session keys for the pair, `a`-first ordering first.
pub fn session_key_candidates(a: i32, b: i32) -> [String; 2] {
    [session_key(a, b), session_key(b, a)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_supplied_order() {
        assert_eq!(session_key(1, 2), "chat_1_2");
        assert_eq!(session_key(2, 1), "chat_2_1");
    }

    #[test]
    fn canonical_key_is_symmetric() {
        assert_eq!(canonical_session_key(1, 2), "chat_1_2");
        assert_eq!(canonical_session_key(2, 1), "chat_1_2");
        assert_eq!(canonical_session_key(10, 9), "chat_9_10");
    }

    #[test]
    fn candidates_cover_both_orderings() {
        let candidates = session_key_candidates(7, 3);
        assert_eq!(candidates, ["chat_7_3".to_string(), "chat_3_7".to_string()]);
        assert!(candidates.contains(&canonical_session_key(7, 3)));
    }
}
