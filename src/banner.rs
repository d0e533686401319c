use owo_colors::OwoColorize;
use supports_color::Stream;

const BANNER_TEXT: &str = "Vue.js - The Progressive JavaScript Framework";

// Upstream starter gradient endpoints (#42d392 -> #647eff).
const GRADIENT_FROM: (u8, u8, u8) = (0x42, 0xd3, 0x92);
const GRADIENT_TO: (u8, u8, u8) = (0x64, 0x7e, 0xff);

/// Picks the banner variant for the current stdout: the gradient needs a
/// terminal that advertises more than basic 8-color support.
#[must_use]
pub fn banner() -> String {
    match supports_color::on_cached(Stream::Stdout) {
        Some(level) if level.has_256 || level.has_16m => gradient_banner(),
        _ => plain_banner().to_string(),
    }
}

#[must_use]
pub fn plain_banner() -> &'static str {
    BANNER_TEXT
}

/// Renders the banner with a left-to-right truecolor gradient, one color
/// stop per character.
#[must_use]
pub fn gradient_banner() -> String {
    let chars: Vec<char> = BANNER_TEXT.chars().collect();
    let last = chars.len().saturating_sub(1).max(1);

    chars
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let (r, g, b) = gradient_stop(i as f32 / last as f32);
            c.truecolor(r, g, b).to_string()
        })
        .collect()
}

fn gradient_stop(t: f32) -> (u8, u8, u8) {
    let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;

    (
        lerp(GRADIENT_FROM.0, GRADIENT_TO.0),
        lerp(GRADIENT_FROM.1, GRADIENT_TO.1),
        lerp(GRADIENT_FROM.2, GRADIENT_TO.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_spans_endpoint_colors() {
        assert_eq!(gradient_stop(0.0), GRADIENT_FROM);
        assert_eq!(gradient_stop(1.0), GRADIENT_TO);
    }

    #[test]
    fn gradient_banner_keeps_the_text() {
        let rendered = gradient_banner();
        let visible: String = rendered
            .chars()
            .scan(false, |in_escape, c| {
                match c {
                    '\x1b' => *in_escape = true,
                    'm' if *in_escape => {
                        *in_escape = false;
                        return Some(None);
                    }
                    _ => {}
                }
                Some((!*in_escape).then_some(c))
            })
            .flatten()
            .collect();

        assert_eq!(visible, BANNER_TEXT);
    }

    #[test]
    fn gradient_banner_uses_truecolor_sequences() {
        assert!(gradient_banner().contains("\x1b[38;2;"));
    }
}
