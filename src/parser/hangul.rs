/// Korean Hangul Jamo recomposition
/// PDF text layers of Korean documents frequently store syllables as
/// decomposed jamo runs (ᄀ, ᅡ, etc.), sometimes with stray whitespace
/// between the jamos. Field labels cannot be matched until those runs
/// are recombined into complete syllables (가, 나, etc.).
use unicode_normalization::UnicodeNormalization;

const SYLLABLE_BASE: u32 = 0xAC00; // '가'
const CHOSEONG_BASE: u32 = 0x1100; // 'ᄀ'
const JUNGSEONG_BASE: u32 = 0x1161; // 'ᅡ'
const JONGSEONG_BASE: u32 = 0x11A7; // one below 'ᆨ'; index 0 = no final
const CHOSEONG_COUNT: u32 = 19;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

// The modern jamo blocks are contiguous, so indices are plain offsets.
fn choseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    (CHOSEONG_BASE..CHOSEONG_BASE + CHOSEONG_COUNT)
        .contains(&code)
        .then(|| code - CHOSEONG_BASE)
}

fn jungseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    (JUNGSEONG_BASE..JUNGSEONG_BASE + JUNGSEONG_COUNT)
        .contains(&code)
        .then(|| code - JUNGSEONG_BASE)
}

fn jongseong_index(c: char) -> Option<u32> {
    let code = c as u32;
    (JONGSEONG_BASE + 1..JONGSEONG_BASE + JONGSEONG_COUNT)
        .contains(&code)
        .then(|| code - JONGSEONG_BASE)
}

fn is_jamo(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x11FF | // Hangul Jamo
        0x3130..=0x318F | // Hangul Compatibility Jamo
        0xA960..=0xA97F | // Hangul Jamo Extended-A
        0xD7B0..=0xD7FF   // Hangul Jamo Extended-B
    )
}

/// Drops whitespace runs that sit between two jamos. Ordinary word
/// spacing between complete syllables ("국 명") survives untouched.
fn strip_jamo_gaps(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            let mut end = i;
            while end < chars.len() && chars[end].is_whitespace() {
                end += 1;
            }
            let prev_is_jamo = result.chars().last().map(is_jamo).unwrap_or(false);
            let next_is_jamo = chars.get(end).copied().map(is_jamo).unwrap_or(false);
            if prev_is_jamo && next_is_jamo {
                i = end;
                continue;
            }
            while i < end {
                result.push(chars[i]);
                i += 1;
            }
            continue;
        }
        result.push(chars[i]);
        i += 1;
    }

    result
}

/// Recombines decomposed Hangul in extracted text.
///
/// NFKC first maps compatibility jamo (ㄱㅏ) onto the canonical block and
/// folds presentation glyphs such as ㎢ into plain "km2"; whitespace gaps
/// between jamos are then removed so composition can cross them, and a
/// final arithmetic pass catches sequences NFC leaves split. Idempotent
/// on already-composed text.
pub fn recompose_hangul(text: &str) -> String {
    let normalized = text.nfkc().collect::<String>();
    let compact = strip_jamo_gaps(&normalized);
    let nfc_text = compact.nfc().collect::<String>();

    let chars: Vec<char> = nfc_text.chars().collect();
    let mut result = String::with_capacity(nfc_text.len());
    let mut i = 0;

    while i < chars.len() {
        if let Some(cho) = choseong_index(chars[i]) {
            if let Some(jung) = chars.get(i + 1).copied().and_then(jungseong_index) {
                let (jong, consumed) = match chars.get(i + 2).copied().and_then(jongseong_index) {
                    Some(jong) => (jong, 3),
                    None => (0, 2),
                };
                let code =
                    SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong;
                if let Some(syllable) = char::from_u32(code) {
                    result.push(syllable);
                    i += consumed;
                    continue;
                }
            }
        }

        result.push(chars[i]);
        i += 1;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_canonical_jamo() {
        // "한" = ᄒ + ᅡ + ᆫ, "글" = ᄀ + ᅳ + ᆯ
        assert_eq!(recompose_hangul("\u{1112}\u{1161}\u{11AB}"), "한");
        assert_eq!(
            recompose_hangul("\u{1112}\u{1161}\u{11AB}\u{1100}\u{1173}\u{11AF}"),
            "한글"
        );
    }

    #[test]
    fn composes_compat_jamo() {
        assert_eq!(recompose_hangul("ㄱㅏ"), "가");
    }

    #[test]
    fn collapses_whitespace_between_jamos() {
        assert_eq!(
            recompose_hangul("\u{1112} \u{1161} \u{11AB} \u{1100} \u{1173} \u{11AF}"),
            "한글"
        );
    }

    #[test]
    fn keeps_word_spacing_between_syllables() {
        assert_eq!(recompose_hangul("국 명"), "국 명");
        assert_eq!(recompose_hangul("한 글 테스트"), "한 글 테스트");
    }

    #[test]
    fn idempotent_on_composed_text() {
        let text = "수도 : 암만(Amman), GDP : 400억 달러(2017)";
        assert_eq!(recompose_hangul(text), text);
    }

    #[test]
    fn folds_area_unit_glyph() {
        // ㎢ has to reach the area rule as plain "km2"
        assert_eq!(recompose_hangul("89,342㎢"), "89,342km2");
    }

    #[test]
    fn passes_through_non_korean_text() {
        assert_eq!(recompose_hangul("Hello 123"), "Hello 123");
    }
}
