use serde::{Deserialize, Deserializer};

/// One blog entry as returned by the upstream feed.
///
/// The known display fields are typed; any other keys the feed sends are kept
/// in `extra` so nothing upstream provides is dropped on the floor.
#[derive(Clone, Debug, Deserialize)]
pub struct Post {
    #[serde(deserialize_with = "numeric_id")]
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Post {
    /// Linear scan over the post list. First id match wins; ids are expected
    /// to be unique upstream but that is not enforced anywhere.
    pub fn find(posts: &[Post], id: i64) -> Option<&Post> {
        posts.iter().find(|post| post.id == id)
    }
}

/// The feed encodes ids either as JSON integers or as strings of digits.
/// Anything else is a decode error, which is fatal at startup.
fn numeric_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("post id is not an integer: {text:?}"))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Vec<Post> {
        serde_json::from_value(json!([
            {
                "id": 1,
                "title": "The Life of Cactus",
                "subtitle": "Who knew that cacti lived such interesting lives.",
                "body": "Cacti are interesting.",
                "author": "Angela Yu",
                "date": "October 20, 2020",
                "image_url": "https://example.com/cactus.jpg"
            },
            {
                "id": 2,
                "title": "Top 15 Things to do When You are Bored",
                "subtitle": "Are you bored?",
                "body": "Boredom strikes us all.",
                "author": "Angela Yu",
                "date": "October 28, 2020",
                "image_url": "https://example.com/bored.jpg"
            }
        ]))
        .unwrap()
    }

    #[test]
    fn find_returns_matching_record_for_every_id() {
        let posts = fixture();
        for expected in &posts {
            let found = Post::find(&posts, expected.id).unwrap();
            assert_eq!(found.id, expected.id);
            assert_eq!(found.title, expected.title);
        }
    }

    #[test]
    fn find_returns_none_for_unknown_id() {
        let posts = fixture();
        assert!(Post::find(&posts, 99).is_none());
    }

    #[test]
    fn find_first_match_wins_on_duplicate_ids() {
        let posts: Vec<Post> = serde_json::from_value(json!([
            {"id": 7, "title": "first"},
            {"id": 7, "title": "second"}
        ]))
        .unwrap();

        assert_eq!(Post::find(&posts, 7).unwrap().title, "first");
    }

    #[test]
    fn id_decodes_from_json_number_and_numeric_string() {
        let posts: Vec<Post> =
            serde_json::from_value(json!([{"id": 3, "title": "a"}, {"id": "4", "title": "b"}]))
                .unwrap();

        assert_eq!(posts[0].id, 3);
        assert_eq!(posts[1].id, 4);
    }

    #[test]
    fn non_integer_id_is_a_decode_error() {
        assert!(serde_json::from_value::<Vec<Post>>(json!([{"id": 1.5}])).is_err());
        assert!(serde_json::from_value::<Vec<Post>>(json!([{"id": "abc"}])).is_err());
    }

    #[test]
    fn missing_display_fields_default_to_empty() {
        let posts: Vec<Post> = serde_json::from_value(json!([{"id": 1}])).unwrap();
        assert_eq!(posts[0].title, "");
        assert_eq!(posts[0].image_url, "");
    }

    #[test]
    fn unknown_feed_keys_are_retained() {
        let posts: Vec<Post> =
            serde_json::from_value(json!([{"id": 1, "category": "plants"}])).unwrap();

        assert_eq!(posts[0].extra["category"], "plants");
    }
}
