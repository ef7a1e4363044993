// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Transition message rendering.

Pure string processing: placeholder substitution plus legacy `&x` color
code normalization. Delivery of the rendered text is the host's business.

Supported placeholders:
- `[nickname]` - tracked agent's display name
- `[zone_name]` - name of the zone that transitioned
- `[time]` - current wall-clock time, HH:MM:SS
- `[date]` - current date, DD/MM/YYYY
- `[coords]` - agent position, floored to whole units
*/

use chrono::Local;
use zonewatch_structures::Point3;

/// Everything a template needs besides the clock
#[derive(Debug, Clone, Copy)]
pub struct MessageContext<'a> {
    pub nickname: &'a str,
    pub zone_name: &'a str,
    pub position: Point3,
}

/// Codes accepted after `&`: the sixteen colors plus the style/reset codes
const COLOR_CODES: &str = "0123456789abcdeflonmr";

/// Expand placeholders and normalize color codes in one pass over the template
pub fn render_message(template: &str, ctx: &MessageContext<'_>) -> String {
    let now = Local::now();
    let rendered = template
        .replace("[nickname]", ctx.nickname)
        .replace("[zone_name]", ctx.zone_name)
        .replace("[time]", &now.format("%H:%M:%S").to_string())
        .replace("[date]", &now.format("%d/%m/%Y").to_string())
        .replace(
            "[coords]",
            &format!(
                "{}, {}, {}",
                ctx.position.x.floor() as i64,
                ctx.position.y.floor() as i64,
                ctx.position.z.floor() as i64
            ),
        );

    convert_ampersand_codes(&rendered)
}

/// Convert `&x` legacy color codes to their `§x` form, leaving `&` followed
/// by anything that is not a known code untouched
fn convert_ampersand_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(current) = chars.next() {
        if current == '&' {
            if let Some(&next) = chars.peek() {
                if COLOR_CODES.contains(next) {
                    result.push('§');
                    result.push(chars.next().unwrap_or(next));
                    continue;
                }
            }
        }
        result.push(current);
    }

    result
}

/// Remove every `&x`/`§x` color code, for plain-text display
pub fn strip_color_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(current) = chars.next() {
        if current == '&' || current == '§' {
            if let Some(&next) = chars.peek() {
                if COLOR_CODES.contains(next.to_ascii_lowercase()) {
                    chars.next();
                    continue;
                }
            }
        }
        result.push(current);
    }

    result
}
