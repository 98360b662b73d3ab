//! Response parser — splits the model's free-text reply into a structured
//! payload per category.
//!
//! The provider guarantees nothing about reply shape, so every branch that
//! indexes into the reply validates first and falls back to a soft format
//! error. Recognized-category text is HTML-escaped before it reaches a
//! browser; the Random branch instead *decodes* HTML entities the model may
//! have emitted (kept as-is from the original contract — see DESIGN.md).

use serde::Serialize;

/// Soft error returned when the reply does not match the expected shape
/// for the requested category.
pub const FORMAT_ERROR: &str = "The response format from the AI is incorrect. Please try again.";

/// Static explanation attached to every Thirukkural quote.
pub const KURAL_EXPLANATION: &str = "This quote emphasizes the importance of supporting one \
    another and the interconnectedness of individuals.";

/// Recognized quote sources. Anything unrecognized falls into the open
/// `Random` bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Quran,
    Bible,
    BhagavadGita,
    Thirukkural,
    Random,
}

impl Category {
    /// Case-insensitive match on the exact lowercased string. No trimming:
    /// `"quran "` is not `"quran"` and lands in `Random`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "quran" => Category::Quran,
            "bible" => Category::Bible,
            "bhagavad gita" => Category::BhagavadGita,
            "thirukkural" => Category::Thirukkural,
            _ => Category::Random,
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Category::Quran => "Quran",
            Category::Bible => "Bible",
            Category::BhagavadGita => "Bhagavad Gita",
            Category::Thirukkural => "Thirukkural",
            Category::Random => "Random",
        }
    }
}

/// Category-specific quote payload. Serialized untagged so each variant
/// produces exactly its own field set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuoteBody {
    Ayah {
        #[serde(rename = "Arabic")]
        arabic: String,
        #[serde(rename = "English")]
        english: String,
    },
    Kural {
        #[serde(rename = "Original")]
        original: String,
        #[serde(rename = "Explanation")]
        explanation: &'static str,
    },
    Verse {
        #[serde(rename = "Original")]
        original: String,
    },
}

/// Full response payload for `POST /generate-quote`. Always delivered with
/// HTTP 200 — shape failures and provider failures are soft errors.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuoteResponse {
    Quote {
        category: &'static str,
        quote: QuoteBody,
    },
    Random {
        #[serde(rename = "Random quote")]
        quote: String,
    },
    Error {
        error: String,
    },
}

impl QuoteResponse {
    pub fn format_error() -> Self {
        QuoteResponse::Error {
            error: FORMAT_ERROR.to_string(),
        }
    }

    pub fn provider_error(message: String) -> Self {
        QuoteResponse::Error { error: message }
    }
}

fn escape(text: &str) -> String {
    html_escape::encode_safe(text).into_owned()
}

/// Parses a raw model reply according to the requested category.
pub fn parse_reply(category: Category, reply: &str) -> QuoteResponse {
    match category {
        Category::Quran => parse_quran(reply),
        Category::Thirukkural => parse_thirukkural(reply),
        Category::BhagavadGita | Category::Bible => parse_first_paragraph(category, reply),
        Category::Random => QuoteResponse::Random {
            quote: html_escape::decode_html_entities(reply.trim()).into_owned(),
        },
    }
}

/// Expected shape: `*English:* …` on line 0, `*Arabic:* …` on line 1, and
/// at least one further line (the model terminates ayah replies with a
/// trailing newline, so well-formed replies split into three or more parts).
fn parse_quran(reply: &str) -> QuoteResponse {
    let parts: Vec<&str> = reply.split('\n').collect();
    if parts.len() < 3 {
        return QuoteResponse::format_error();
    }

    let english = escape(parts[0].replace("*English:*", "").trim());
    let arabic = escape(parts[1].replace("*Arabic:*", "").trim());

    QuoteResponse::Quote {
        category: Category::Quran.display_name(),
        quote: QuoteBody::Ayah { arabic, english },
    }
}

/// A Kural is a two-line couplet: the first two lines are joined back with
/// a newline and returned as the original text.
fn parse_thirukkural(reply: &str) -> QuoteResponse {
    let parts: Vec<&str> = reply.split('\n').collect();
    if parts.len() < 2 {
        return QuoteResponse::format_error();
    }

    let original = escape(&format!("{}\n{}", parts[0].trim(), parts[1].trim()));

    QuoteResponse::Quote {
        category: Category::Thirukkural.display_name(),
        quote: QuoteBody::Kural {
            original,
            explanation: KURAL_EXPLANATION,
        },
    }
}

/// Bhagavad Gita and Bible replies keep only the first paragraph
/// (blank-line delimited). An effectively empty reply is a format error.
fn parse_first_paragraph(category: Category, reply: &str) -> QuoteResponse {
    let first = reply.split("\n\n").next().unwrap_or("").trim();
    if first.is_empty() {
        return QuoteResponse::format_error();
    }

    QuoteResponse::Quote {
        category: category.display_name(),
        quote: QuoteBody::Verse {
            original: escape(first),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Category matching ───────────────────────────────────────────────

    #[test]
    fn test_category_matching_is_case_insensitive() {
        assert_eq!(Category::parse("Quran"), Category::Quran);
        assert_eq!(Category::parse("QURAN"), Category::Quran);
        assert_eq!(Category::parse("bible"), Category::Bible);
        assert_eq!(Category::parse("Bhagavad Gita"), Category::BhagavadGita);
        assert_eq!(Category::parse("THIRUKKURAL"), Category::Thirukkural);
    }

    #[test]
    fn test_unrecognized_categories_fall_back_to_random() {
        assert_eq!(Category::parse("Random"), Category::Random);
        assert_eq!(Category::parse("Haiku"), Category::Random);
        assert_eq!(Category::parse(""), Category::Random);
        // Exact-equality matching: stray whitespace is not forgiven.
        assert_eq!(Category::parse("quran "), Category::Random);
        assert_eq!(Category::parse("bhagavad  gita"), Category::Random);
    }

    // ── Quran ───────────────────────────────────────────────────────────

    #[test]
    fn test_quran_well_formed_reply_strips_labels_and_escapes() {
        let reply = "*English:* Indeed, with <hardship> comes ease.\n\
                     *Arabic:* إِنَّ مَعَ الْعُسْرِ يُسْرًا\n";
        let parsed = parse_reply(Category::Quran, reply);

        let QuoteResponse::Quote { category, quote } = &parsed else {
            panic!("expected a quote, got {parsed:?}");
        };
        assert_eq!(*category, "Quran");
        let QuoteBody::Ayah { arabic, english } = quote else {
            panic!("expected an ayah body");
        };
        assert!(!arabic.is_empty());
        assert!(!english.is_empty());
        assert!(!english.contains("*English:*"));
        assert!(!arabic.contains("*Arabic:*"));
        assert_eq!(english, "Indeed, with &lt;hardship&gt; comes ease.");
        assert_eq!(arabic, "إِنَّ مَعَ الْعُسْرِ يُسْرًا");
    }

    #[test]
    fn test_quran_two_line_reply_is_exact_format_error() {
        let reply = "*English:* some ayah\n*Arabic:* نص";
        let parsed = parse_reply(Category::Quran, reply);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({"error": "The response format from the AI is incorrect. Please try again."})
        );
    }

    #[test]
    fn test_quran_single_line_reply_is_format_error() {
        let parsed = parse_reply(Category::Quran, "just one line");
        assert_eq!(parsed, QuoteResponse::format_error());
    }

    // ── Thirukkural ─────────────────────────────────────────────────────

    #[test]
    fn test_thirukkural_joins_first_two_lines_with_newline() {
        let reply = "அகர முதல எழுத்தெல்லாம் ஆதி\nபகவன் முதற்றே உலகு.\nEnglish rendering here";
        let parsed = parse_reply(Category::Thirukkural, reply);

        let QuoteResponse::Quote { category, quote } = &parsed else {
            panic!("expected a quote");
        };
        assert_eq!(*category, "Thirukkural");
        let QuoteBody::Kural {
            original,
            explanation,
        } = quote
        else {
            panic!("expected a kural body");
        };
        assert_eq!(
            original,
            "அகர முதல எழுத்தெல்லாம் ஆதி\nபகவன் முதற்றே உலகு."
        );
        assert_eq!(*explanation, KURAL_EXPLANATION);
    }

    #[test]
    fn test_thirukkural_escapes_html_in_couplet() {
        let reply = "line <one>\nline & two";
        let parsed = parse_reply(Category::Thirukkural, reply);
        let QuoteResponse::Quote {
            quote: QuoteBody::Kural { original, .. },
            ..
        } = parsed
        else {
            panic!("expected a kural body");
        };
        assert_eq!(original, "line &lt;one&gt;\nline &amp; two");
    }

    #[test]
    fn test_thirukkural_one_line_reply_is_format_error() {
        let parsed = parse_reply(Category::Thirukkural, "only one line");
        assert_eq!(parsed, QuoteResponse::format_error());
    }

    // ── Bhagavad Gita / Bible ───────────────────────────────────────────

    #[test]
    fn test_gita_keeps_only_first_paragraph() {
        let reply = "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन\n\nYou have a right to perform your duty.";
        let parsed = parse_reply(Category::BhagavadGita, reply);
        let QuoteResponse::Quote { category, quote } = &parsed else {
            panic!("expected a quote");
        };
        assert_eq!(*category, "Bhagavad Gita");
        let QuoteBody::Verse { original } = quote else {
            panic!("expected a verse body");
        };
        assert_eq!(original, "कर्मण्येवाधिकारस्ते मा फलेषु कदाचन");
    }

    #[test]
    fn test_bible_first_paragraph_is_escaped() {
        let reply = "\"Love one another\" <John 13:34>\n\nSecond paragraph.";
        let parsed = parse_reply(Category::Bible, reply);
        let QuoteResponse::Quote {
            category,
            quote: QuoteBody::Verse { original },
        } = parsed
        else {
            panic!("expected a verse body");
        };
        assert_eq!(category, "Bible");
        assert!(original.contains("&lt;John 13:34&gt;"));
        assert!(!original.contains('<'));
    }

    #[test]
    fn test_gita_empty_reply_is_format_error_not_panic() {
        assert_eq!(
            parse_reply(Category::BhagavadGita, ""),
            QuoteResponse::format_error()
        );
        assert_eq!(
            parse_reply(Category::Bible, "   \n\n   "),
            QuoteResponse::format_error()
        );
    }

    // ── Random ──────────────────────────────────────────────────────────

    #[test]
    fn test_random_decodes_entities_and_trims() {
        let reply = "  Work hard &amp; stay &lt;humble&gt;.  ";
        let parsed = parse_reply(Category::Random, reply);
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({"Random quote": "Work hard & stay <humble>."})
        );
    }

    #[test]
    fn test_random_accepts_any_reply_shape() {
        let parsed = parse_reply(Category::Random, "");
        assert_eq!(
            serde_json::to_value(&parsed).unwrap(),
            json!({"Random quote": ""})
        );
    }

    // ── Escaping round-trip ─────────────────────────────────────────────

    #[test]
    fn test_escape_then_unescape_round_trips() {
        let original = "if a < b && b > c then \"quote\"";
        let escaped = escape(original);
        assert!(escaped.contains("&lt;"));
        assert!(escaped.contains("&gt;"));
        assert!(escaped.contains("&amp;"));
        let decoded = html_escape::decode_html_entities(&escaped).into_owned();
        assert_eq!(decoded, original);
    }

    // ── Serialized shapes ───────────────────────────────────────────────

    #[test]
    fn test_quran_response_serializes_to_category_and_quote_keys() {
        let reply = "*English:* Verily with hardship comes ease.\n*Arabic:* نص\n";
        let parsed = parse_reply(Category::Quran, reply);
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["category"], "Quran");
        assert_eq!(value["quote"]["English"], "Verily with hardship comes ease.");
        assert_eq!(value["quote"]["Arabic"], "نص");
    }

    #[test]
    fn test_thirukkural_response_carries_static_explanation() {
        let parsed = parse_reply(Category::Thirukkural, "first\nsecond");
        let value = serde_json::to_value(&parsed).unwrap();
        assert_eq!(value["category"], "Thirukkural");
        assert_eq!(value["quote"]["Original"], "first\nsecond");
        assert_eq!(value["quote"]["Explanation"], KURAL_EXPLANATION);
    }
}
