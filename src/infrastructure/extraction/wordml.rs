//! Minimal WordprocessingML text collection.
//!
//! The main document part is scanned tag-by-tag: character data inside
//! `<w:t>` runs is kept, paragraph ends and explicit breaks become newlines,
//! tabs become tabs. Everything else (formatting, tables, drawings) is
//! dropped. This mirrors a "raw text" extraction: no styling survives.

/// Collects the visible text of a WordprocessingML part.
pub fn collect_text(xml: &str) -> String {
    let mut out = String::new();
    let mut remaining = xml;
    let mut in_run = false;
    let mut in_tab_defs = false;

    while let Some(lt) = remaining.find('<') {
        if in_run {
            out.push_str(&decode_entities(&remaining[..lt]));
        }

        let after = &remaining[lt + 1..];
        let Some(gt) = after.find('>') else {
            break;
        };
        let tag = &after[..gt];
        remaining = &after[gt + 1..];

        let name = tag
            .trim_end_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("");

        match name {
            // A self-closing <w:t/> carries no character data.
            "w:t" => in_run = !tag.ends_with('/'),
            "/w:t" => in_run = false,
            "/w:p" => out.push('\n'),
            // <w:tab/> inside <w:tabs> defines a tab stop, not a character.
            "w:tabs" => in_tab_defs = !tag.ends_with('/'),
            "/w:tabs" => in_tab_defs = false,
            "w:tab" if !in_tab_defs => out.push('\t'),
            "w:br" | "w:cr" => out.push('\n'),
            _ => {}
        }
    }

    out
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        match tail.find(';') {
            Some(semi) => {
                match &tail[1..semi] {
                    "amp" => out.push('&'),
                    "lt" => out.push('<'),
                    "gt" => out.push('>'),
                    "quot" => out.push('"'),
                    "apos" => out.push('\''),
                    entity => match parse_char_ref(entity) {
                        Some(ch) => out.push(ch),
                        // Unknown entity: keep it verbatim rather than lose text.
                        None => out.push_str(&tail[..=semi]),
                    },
                }
                rest = &tail[semi + 1..];
            }
            None => {
                rest = tail;
                break;
            }
        }
    }

    out.push_str(rest);
    out
}

fn parse_char_ref(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix('x').or_else(|| digits.strip_prefix('X')) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
