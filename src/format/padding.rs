// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Reads the optional `-` and digits that precede a directive character.
///
/// Returns `(width, offset)` where `offset` is the byte length of the
/// padding prefix. Without digits there is no padding and the offset is 0,
/// so a lone `-` is taken as the directive character itself.
pub fn parse_padding(phrase: &str) -> (i32, usize) {
    let (sign, rest) = match phrase.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, phrase),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return (0, 0);
    }

    match rest[..digits_len].parse::<i32>() {
        Ok(width) => {
            let sign_len = if sign < 0 { 1 } else { 0 };
            (sign * width, sign_len + digits_len)
        }
        Err(_) => (0, 0),
    }
}

/// Pads or truncates `text` to `width` chars.
///
/// A positive width right-aligns and keeps the tail when `text` is longer;
/// a negative width left-aligns and keeps the head. Zero leaves `text` as is.
pub fn pad(text: &str, width: i32) -> String {
    if width == 0 {
        return text.to_string();
    }

    let target = width.unsigned_abs() as usize;
    let len = text.chars().count();

    if width > 0 {
        if len > target {
            text.chars().skip(len - target).collect()
        } else {
            let mut padded = " ".repeat(target - len);
            padded.push_str(text);
            padded
        }
    } else if len > target {
        text.chars().take(target).collect()
    } else {
        let mut padded = text.to_string();
        padded.push_str(&" ".repeat(target - len));
        padded
    }
}
