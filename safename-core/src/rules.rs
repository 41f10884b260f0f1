//! rules.rs - The built-in, ordered sanitization rule tables.
//!
//! Every table here is plain declarative data. Order matters: each rule sees
//! the output of the rules before it, so the tables are applied front to back
//! and the character tables always run before the reserved-name table.
//!
//! License: MIT OR APACHE 2.0

/// What a rule puts in place of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// A fixed substitute: a fullwidth look-alike, a space, or nothing.
    Literal(&'static str),
    /// Capture group 1 is a reserved device token. Its ASCII letters are mapped
    /// to fullwidth (case kept, digits kept) and capture group 2, the optional
    /// extension, is appended unchanged.
    ReservedName,
}

/// A single uncompiled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSpec {
    /// Stable identifier, used in logs and tests.
    pub name: &'static str,
    /// Regex pattern (`regex` crate syntax).
    pub pattern: &'static str,
    pub replacement: Replacement,
    /// Whether the `remove` option turns this rule into a deletion.
    pub removable: bool,
}

const fn fixed(name: &'static str, pattern: &'static str, replacement: &'static str) -> RuleSpec {
    RuleSpec {
        name,
        pattern,
        replacement: Replacement::Literal(replacement),
        removable: false,
    }
}

const fn fullwidth(name: &'static str, pattern: &'static str, replacement: &'static str) -> RuleSpec {
    RuleSpec {
        name,
        pattern,
        replacement: Replacement::Literal(replacement),
        removable: true,
    }
}

const fn reserved(name: &'static str, pattern: &'static str) -> RuleSpec {
    RuleSpec {
        name,
        pattern,
        replacement: Replacement::ReservedName,
        removable: true,
    }
}

/// Control characters, whitespace and the characters Windows forbids in names.
pub const CHARACTER_RULES: &[RuleSpec] = &[
    // Cc has no visual substitute, so it is always deleted.
    fixed("control_characters", r"\p{Cc}", ""),
    fixed(
        "whitespace",
        r"[\r\n\t\f\v\x00\x{00A0}\x{2002}-\x{200B}\x{202F}\x{205F}\x{3000}\x{FEFF}]",
        " ",
    ),
    fullwidth("less_than", r"<", "＜"),
    fullwidth("greater_than", r">", "＞"),
    fullwidth("colon", r":", "："),
    fullwidth("double_quote", r#"""#, "＂"),
    fullwidth("slash", r"/", "／"),
    fullwidth("backslash", r"\\", "＼"),
    fullwidth("pipe", r"\|", "｜"),
    fullwidth("question_mark", r"\?", "？"),
    fullwidth("asterisk", r"\*", "＊"),
];

/// Windows device names, matched against the whole string.
///
/// The bracket classes spell out every case permutation of each name. Only
/// ASCII letters are accepted, so no Unicode case folding sneaks in.
pub const RESERVED_NAME_RULES: &[RuleSpec] = &[
    reserved("reserved_con", r"(?s)^([Cc][Oo][Nn])(\..*)?$"),
    reserved("reserved_prn", r"(?s)^([Pp][Rr][Nn])(\..*)?$"),
    reserved("reserved_aux", r"(?s)^([Aa][Uu][Xx])(\..*)?$"),
    reserved("reserved_nul", r"(?s)^([Nn][Uu][Ll])(\..*)?$"),
    reserved("reserved_com", r"(?s)^([Cc][Oo][Mm][0-9]+)(\..*)?$"),
    reserved("reserved_lpt", r"(?s)^([Ll][Pp][Tt][0-9]+)(\..*)?$"),
];

/// Punctuation that is legal in filenames but significant to shells, markup
/// and code. Only applied when the `extended` option is on.
pub const EXTENDED_RULES: &[RuleSpec] = &[
    fullwidth("left_bracket", r"\[", "［"),
    fullwidth("right_bracket", r"\]", "］"),
    fullwidth("equals", r"=", "＝"),
    fullwidth("semicolon", r";", "；"),
    fullwidth("comma", r",", "，"),
    fullwidth("ampersand", r"&", "＆"),
    fullwidth("dollar", r"\$", "＄"),
    fullwidth("hash", r"#", "＃"),
    fullwidth("left_paren", r"\(", "（"),
    fullwidth("right_paren", r"\)", "）"),
    fullwidth("tilde", r"~", "～"),
    fullwidth("backtick", r"`", "｀"),
    fullwidth("apostrophe", r"'", "＇"),
    fullwidth("exclamation", r"!", "！"),
    fullwidth("left_brace", r"\{", "｛"),
    fullwidth("right_brace", r"\}", "｝"),
    fullwidth("percent", r"%", "％"),
    fullwidth("plus", r"\+", "＋"),
    fullwidth("curly_single_quotes", r"[\x{2018}\x{2019}]", "＇"),
    fullwidth("guillemets_and_curly_double_quotes", r"[\x{00AB}\x{00BB}\x{201C}\x{201D}]", "＂"),
];

/// Offset between printable ASCII and the Halfwidth and Fullwidth Forms block.
const FULLWIDTH_OFFSET: u32 = 0xFF01 - 0x21;

/// Maps printable ASCII (`!` through `~`) to its fullwidth form.
///
/// Any other character, including the ASCII space, comes back unchanged.
pub fn to_fullwidth(c: char) -> char {
    match c {
        '!'..='~' => char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c),
        _ => c,
    }
}
