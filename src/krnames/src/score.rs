//! Korean name selection from an embedded page payload.
//!
//! Every string leaf of the payload that contains a Hangul syllable becomes a
//! [`Candidate`]. Candidates are scored from their access path and value, and
//! the highest score wins, longer strings first on ties.
//!
//! The weights are empirically tuned against RagnaPlace pages. Keep them as
//! they are unless a labelled regression set says otherwise.

use serde_json::Value;

const LAST_SEGMENT_NAME: i32 = 10;
const PATH_NAME: i32 = 4;
const PATH_KOREAN: i32 = 8;
const PATH_TITLE: i32 = 2;
const VERY_LONG_PENALTY: i32 = -6;
const LONG_PENALTY: i32 = -3;
const SPACES_PENALTY: i32 = -2;

const VERY_LONG_CHARS: usize = 60;
const LONG_CHARS: usize = 30;
const MAX_SPACES: usize = 2;

const KOREAN_TOKENS: &[&str] = &["korean", "korea", "ko", "kor"];

/// A Korean-bearing string leaf and its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Keys and stringified indices from the payload root
    pub path: Vec<String>,
    /// Trimmed value
    pub value: String,
    pub score: i32,
}

impl Candidate {
    fn char_len(&self) -> usize {
        self.value.chars().count()
    }
}

/// True if `c` is a precomposed Hangul syllable (가..힣)
pub fn is_hangul(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

pub fn contains_hangul(s: &str) -> bool {
    s.chars().any(is_hangul)
}

/// Depth-first walk calling `visit` with the path and value of every string leaf
pub fn walk_strings<'a, F>(node: &'a Value, path: &mut Vec<String>, visit: &mut F)
where
    F: FnMut(&[String], &'a str),
{
    match node {
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.clone());
                walk_strings(child, path, visit);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                path.push(i.to_string());
                walk_strings(child, path, visit);
                path.pop();
            }
        }
        Value::String(s) => visit(path, s),
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
}

/// Heuristic score of a string found at `path`
pub fn score_candidate(path: &[String], value: &str) -> i32 {
    let dotted = path.join(".").to_lowercase();
    let last = path.last().map(|s| s.to_lowercase()).unwrap_or_default();
    let mut score = 0;

    if last.contains("name") {
        score += LAST_SEGMENT_NAME;
    }
    if dotted.contains("name") {
        score += PATH_NAME;
    }
    if KOREAN_TOKENS.iter().any(|token| dotted.contains(token)) {
        score += PATH_KOREAN;
    }
    if dotted.contains("title") {
        score += PATH_TITLE;
    }

    let len = value.chars().count();
    if len > VERY_LONG_CHARS {
        score += VERY_LONG_PENALTY;
    } else if len > LONG_CHARS {
        score += LONG_PENALTY;
    }

    if value.chars().filter(|&c| c == ' ').count() > MAX_SPACES {
        score += SPACES_PENALTY;
    }

    score
}

/// All Korean-bearing, non-blank string leaves of `payload`, in traversal order
pub fn collect_candidates(payload: &Value) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    walk_strings(payload, &mut Vec::new(), &mut |path, raw| {
        if !contains_hangul(raw) {
            return;
        }
        let value = raw.trim();
        if value.is_empty() {
            return;
        }
        candidates.push(Candidate {
            path: path.to_vec(),
            value: value.to_string(),
            score: score_candidate(path, value),
        });
    });
    candidates
}

/// Highest-scoring candidate; on equal scores the longer value, then the earlier one
pub fn select_best(candidates: Vec<Candidate>) -> Option<Candidate> {
    candidates.into_iter().fold(None, |best, c| match best {
        Some(b) if (b.score, b.char_len()) >= (c.score, c.char_len()) => Some(b),
        _ => Some(c),
    })
}

/// Best Korean display name in `payload`, or `None` if it has no Korean text
pub fn pick_korean_name(payload: &Value) -> Option<String> {
    let candidates = collect_candidates(payload);
    tracing::trace!("{} korean candidates", candidates.len());
    select_best(candidates).map(|c| c.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    fn korean(len: usize) -> String {
        "가".repeat(len)
    }

    #[test]
    fn test_hangul_detection() {
        assert!(contains_hangul("포링"));
        assert!(contains_hangul("Poring 포링"));
        assert!(!contains_hangul("Poring"));
        assert!(!contains_hangul("ポリン"));
        // Compatibility jamo are outside the syllable block
        assert!(!contains_hangul("ㅋㅋㅋ"));
        assert!(contains_hangul("힣"));
    }

    #[test]
    fn test_walk_strings_paths() {
        let payload = json!({
            "props": {"list": ["a", {"name": "b"}], "n": 3, "ok": true, "none": null}
        });
        let mut seen = Vec::new();
        walk_strings(&payload, &mut Vec::new(), &mut |p, v| {
            seen.push((p.join("."), v.to_string()));
        });
        assert_eq!(
            seen,
            vec![
                ("props.list.0".to_string(), "a".to_string()),
                ("props.list.1.name".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_score_name_rules_stack() {
        assert_eq!(score_candidate(&path(&["mob", "name"]), "포링"), 14);
        assert_eq!(score_candidate(&path(&["name", "value"]), "포링"), 4);
        assert_eq!(score_candidate(&path(&["mob", "displayName"]), "포링"), 14);
    }

    #[test]
    fn test_score_korean_tokens() {
        assert_eq!(score_candidate(&path(&["names", "ko"]), "포링"), 4 + 8);
        assert_eq!(score_candidate(&path(&["korean"]), "포링"), 8);
        assert_eq!(score_candidate(&path(&["Korea", "label"]), "포링"), 8);
        // Tokens match anywhere in the path, even inside unrelated words
        assert_eq!(score_candidate(&path(&["kobold"]), "포링"), 8);
        assert_eq!(score_candidate(&path(&["token"]), "포링"), 0);
        assert_eq!(score_candidate(&path(&["en", "label"]), "포링"), 0);
    }

    #[test]
    fn test_score_title() {
        assert_eq!(score_candidate(&path(&["page", "title"]), "포링"), 2);
        let title_name = path(&["seo", "titleName"]);
        assert_eq!(score_candidate(&title_name, "포링"), 10 + 4 + 2);
    }

    #[test]
    fn test_score_length_penalties() {
        assert_eq!(score_candidate(&[], &korean(30)), 0);
        assert_eq!(score_candidate(&[], &korean(31)), -3);
        assert_eq!(score_candidate(&[], &korean(60)), -3);
        assert_eq!(score_candidate(&[], &korean(61)), -6);
    }

    #[test]
    fn test_score_space_penalty() {
        assert_eq!(score_candidate(&[], "가 나 다"), 0);
        assert_eq!(score_candidate(&[], "가 나 다 라"), -2);
    }

    #[test]
    fn test_candidates_require_hangul() {
        let payload = json!({
            "name": "Poring",
            "title": "ポリン",
            "id": 1002,
            "kr": "포링"
        });
        let candidates = collect_candidates(&payload);
        assert_eq!(candidates.len(), 1);
        assert!(candidates.iter().all(|c| contains_hangul(&c.value)));
        assert_eq!(pick_korean_name(&payload).as_deref(), Some("포링"));
    }

    #[test]
    fn test_candidate_value_is_trimmed() {
        let payload = json!({"name": "  포링 \n"});
        let best = select_best(collect_candidates(&payload)).unwrap();
        assert_eq!(best.value, "포링");
        assert_eq!(best.path, path(&["name"]));
        assert_eq!(best.score, 14);
    }

    #[test]
    fn test_name_key_beats_long_korean_description() {
        let long = "설명".repeat(40);
        assert_eq!(long.chars().count(), 80);
        let payload = json!({
            "description_korean_long_text": long,
            "name": "몬스터",
        });
        assert_eq!(pick_korean_name(&payload).as_deref(), Some("몬스터"));
    }

    #[test]
    fn test_equal_scores_prefer_longer() {
        let payload = json!({"a": "가나", "b": "가나다라", "c": "가나다"});
        assert_eq!(pick_korean_name(&payload).as_deref(), Some("가나다라"));

        let payload = json!(["가나다라", "가나"]);
        assert_eq!(pick_korean_name(&payload).as_deref(), Some("가나다라"));
    }

    #[test]
    fn test_exact_tie_keeps_first() {
        let payload = json!({"x": "포링", "y": "드롭"});
        assert_eq!(pick_korean_name(&payload).as_deref(), Some("포링"));
    }

    #[test]
    fn test_all_negative_scores_still_pick() {
        let payload = json!({"a": korean(70), "b": korean(40)});
        let best = select_best(collect_candidates(&payload)).unwrap();
        assert_eq!(best.score, -3);
        assert_eq!(best.value, korean(40));
    }

    #[test]
    fn test_no_strings_yields_none() {
        let no_strings = json!({"id": 1, "list": [true, null, 2.5]});
        assert_eq!(pick_korean_name(&no_strings), None);
        assert_eq!(pick_korean_name(&json!({"name": "Poring"})), None);
        assert_eq!(pick_korean_name(&json!({})), None);
    }

    #[test]
    fn test_root_string_payload() {
        assert_eq!(pick_korean_name(&json!("포링")).as_deref(), Some("포링"));
    }

    #[test]
    fn test_realistic_page_props() {
        let payload = json!({
            "props": {
                "pageProps": {
                    "mob": {
                        "id": 1002,
                        "name": "Poring",
                        "kroName": "포링",
                        "description": "동글동글한 분홍색 젤리 같은 몬스터. 아주 약하다.",
                        "drops": [{"item": "젤로피", "rate": 70.0}]
                    }
                },
                "locale": "ko"
            },
            "page": "/[lang]/[server]/mob/[id]"
        });
        assert_eq!(pick_korean_name(&payload).as_deref(), Some("포링"));
    }
}
