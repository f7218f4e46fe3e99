//! Query-language reference for the trove CLI

use super::CliError;

/// Available syntax reference topics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxTopic {
    Operators,
    Literals,
    Lists,
    Fallback,
}

impl SyntaxTopic {
    /// Parse topic name from string
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "operators" | "ops" => Some(Self::Operators),
            "literals" | "literal" | "strings" => Some(Self::Literals),
            "lists" | "list" => Some(Self::Lists),
            "fallback" => Some(Self::Fallback),
            _ => None,
        }
    }
}

/// Get the syntax overview (topic listing)
pub fn get_syntax_overview() -> &'static str {
    r#"TROVE SEARCH SYNTAX

Searches compile into a filter expression over the collection. A bare word
searches titles; operators compare fields.

TOPICS

  operators         Comparison, logical and list-membership operators
  literals          Words, numbers, quoted strings and {preserved} blocks
  lists             Colon-joined lists
  fallback          How operator-less searches are interpreted

QUICK REFERENCE

  bebop                         Title search
  year>2000                     Comparison
  (kind = "book") & (year>2000) Grouping and AND
  kind ^ "book":"comic"         Membership in a list

Run 'trove syntax <topic>' for details.
Run 'trove compile <query>' to see what a search compiles to.
"#
}

/// Get the reference text for a specific topic
pub fn get_syntax_topic(name: &str) -> Result<&'static str, CliError> {
    match SyntaxTopic::from_name(name) {
        Some(SyntaxTopic::Operators) => Ok(OPERATORS_DOC),
        Some(SyntaxTopic::Literals) => Ok(LITERALS_DOC),
        Some(SyntaxTopic::Lists) => Ok(LISTS_DOC),
        Some(SyntaxTopic::Fallback) => Ok(FALLBACK_DOC),
        None => Err(CliError::UnknownTopic(name.to_string())),
    }
}

const OPERATORS_DOC: &str = r#"OPERATORS

COMPARISON
  =     Equal                    renders ==
  <     Lower                    renders <=
  <=    Lower or equal           renders <
  >     Greater                  renders >=
  >=    Greater or equal         renders >
  ~     Similar (pattern match)  renders LIKE
  ^     Member of a list         renders IN

  The two-character forms are only recognised when the second character of
  the whole query is '='. Write them without a leading field, or expect the
  one-character form.

LOGICAL
  &     Both sides must match    renders AND
  |     Either side may match    renders OR

  Chains group from the left:
    a = 1 & b = 2 | c = 3    ->    (((a == 1) AND (b == 2)) OR (c == 3))

  A logical operator at the very end of a query is an error.

GROUPING
  ( ... )    Parenthesise any sub-search.
"#;

const LITERALS_DOC: &str = r#"LITERALS

WORDS
  year, en_title, kind
    Rendered as written, with any ';' removed. A word runs until whitespace
    or one of ; < > = & ~ ^ |

NUMBERS
  2000, 12.5
    Digits with at most one '.'.

QUOTED STRINGS
  "cowboy bebop", 'it\'s'
    Either quote character. A backslash keeps the next character literally.
    Rendered as a JSON string.

PRESERVED BLOCKS
  {release date}
    Passed through without lexing. Nested braces are kept.
"#;

const LISTS_DOC: &str = r#"LISTS

  1999:2000:2001       ->    (1999,2000,2001)
  "book" : "comic"     ->    ("book","comic")
  2000:                ->    (2000)

  A single value stays a value; a trailing ':' makes a one-item list.
  Words swallow ':' so separate word items with spaces.
"#;

const FALLBACK_DOC: &str = r#"FALLBACK

  A search that is a single word, number, string or preserved block with no
  operator becomes a title search:

    bebop            ->    (en_title LIKE "bebop")
    "spirited away"  ->    (en_title LIKE "spirited away")

  The searched column can be changed with --fallback-field.
"#;

#[test]
fn test_every_topic_resolves() {
    for name in ["operators", "literals", "lists", "fallback"] {
        assert!(get_syntax_topic(name).is_ok(), "missing topic {name}");
    }
    assert!(matches!(get_syntax_topic("nope"), Err(CliError::UnknownTopic(_))));
}
