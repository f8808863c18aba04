use chrono::Utc;
use invitelinks::link_extraction::{ExtractedLink, LinkKind};
use invitelinks::link_store::LinkStore;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

#[cfg(test)]
mod tests {
    use super::*;

    fn public_link(url: &str) -> ExtractedLink {
        ExtractedLink {
            url: url.to_string(),
            kind: LinkKind::Public,
        }
    }

    fn private_link(url: &str) -> ExtractedLink {
        ExtractedLink {
            url: url.to_string(),
            kind: LinkKind::Private,
        }
    }

    #[test]
    fn test_insert_and_contains() {
        let mut store = LinkStore::new();

        assert!(store.insert(public_link("t.me/chat_one")));
        assert!(store.contains("t.me/chat_one"));
        assert!(!store.contains("t.me/chat_two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut store = LinkStore::new();

        assert!(store.insert(public_link("t.me/SomeChat")));
        // Same link, different spelling: one entry survives
        assert!(!store.insert(public_link("T.ME/somechat")));
        assert!(!store.insert(public_link("t.me/SomeChat")));

        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].url, "t.me/SomeChat");
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut store = LinkStore::new();

        store.insert(public_link("t.me/chat_one"));
        store.insert(private_link("t.me/+AbC12"));
        store.insert(public_link("t.me/chat_two"));

        let urls: Vec<&str> = store.entries().iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["t.me/chat_one", "t.me/+AbC12", "t.me/chat_two"]);
    }

    #[test]
    fn test_accepted_at_is_stamped() {
        let mut store = LinkStore::new();

        store.insert(public_link("t.me/chat_one"));

        assert!(store.entries()[0].accepted_at <= Utc::now());
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut store = LinkStore::new();

        store.insert(public_link("t.me/chat_one"));
        store.insert(private_link("t.me/+AbC12"));
        store.clear();

        assert!(store.is_empty());
        assert!(!store.contains("t.me/chat_one"));
        // Cleared keys can be accepted again
        assert!(store.insert(public_link("t.me/chat_one")));
    }

    #[test]
    fn test_render_export_format() {
        let mut store = LinkStore::new();

        store.insert(public_link("t.me/chat_one"));
        store.insert(private_link("t.me/+AbC12"));

        let export = store.render_export();
        assert_eq!(export, "[PUBLIC] t.me/chat_one\n[PRIVATE] t.me/+AbC12\n");
    }

    #[test]
    fn test_render_export_empty_store() {
        let store = LinkStore::new();
        assert_eq!(store.render_export(), "");
    }

    #[test]
    fn test_export_round_trips_through_a_file() {
        let mut store = LinkStore::new();
        store.insert(public_link("t.me/chat_one"));
        store.insert(private_link("t.me/joinchat/Zz-9"));

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(store.render_export().as_bytes())
            .unwrap();

        let written = fs::read_to_string(temp_file.path()).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "[PUBLIC] t.me/chat_one");
        assert_eq!(lines[1], "[PRIVATE] t.me/joinchat/Zz-9");
    }
}
