/// Parses a Discord snowflake from a raw ID or a mention.
///
/// Accepts `123`, `<@123>`, `<@!123>`, `<@&123>` and `<#123>`.
///
/// # Returns
/// - `Some(u64)` - The ID inside the token
/// - `None` - The token is not an ID or mention, or the ID is zero
pub fn parse_snowflake(token: &str) -> Option<u64> {
    let token = token.trim();

    let inner = match token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        Some(mention) => mention
            .strip_prefix("@&")
            .or_else(|| mention.strip_prefix("@!"))
            .or_else(|| mention.strip_prefix('@'))
            .or_else(|| mention.strip_prefix('#'))?,
        None => token,
    };

    inner.parse::<u64>().ok().filter(|id| *id > 0)
}
