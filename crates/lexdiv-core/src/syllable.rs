//! Heuristic syllabification for Portuguese orthography.
//!
//! A word is split around its syllable nuclei. Nuclei are the characters of
//! [`VOWELS`], plus `i` and `u` when neither neighbour is in [`VOWELS`]
//! (next to one they act as glides, as in "sa*i*a" or "o*u*tra").
//!
//! Between two nuclei a lone consonant starts the next syllable; a longer
//! cluster is cut at `cons / 2`, so odd clusters give the extra consonant to
//! the next syllable ("con-stan-te").
//!
//! The result is an approximation, not a phonological analysis. Syllables
//! always borrow from the input and concatenate back to it.

/// Characters that are always syllable nuclei.
///
/// Plain `i` and `u` are classified per position instead.
pub const VOWELS: &[char] = &[
    'a', 'e', 'o', 'á', 'é', 'ó', 'í', 'ú', 'ã', 'õ', 'â', 'ê', 'ô', 'à', 'ü',
];

fn in_vowel_set(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Classify every position of `chars` as nucleus or not.
///
/// Each position is decided once, from its own character and its two
/// immediate neighbours.
fn classify(chars: &[char]) -> Box<[bool]> {
    let mut nucleus = vec![false; chars.len()].into_boxed_slice();
    for (i, &c) in chars.iter().enumerate() {
        nucleus[i] = if in_vowel_set(c) {
            true
        } else if matches!(c, 'i' | 'u') {
            let before = i > 0 && in_vowel_set(chars[i - 1]);
            let after = chars.get(i + 1).copied().is_some_and(in_vowel_set);
            !(before || after)
        } else {
            false
        };
    }
    nucleus
}

/// Character positions of the syllable nuclei in `word`.
pub fn nuclei(word: &str) -> Vec<usize> {
    let chars: Vec<char> = word.chars().collect();
    let nucleus = classify(&chars);
    (0..chars.len()).filter(|&i| nucleus[i]).collect()
}

/// Split a lowercased word into syllables.
///
/// An empty word has no syllables. A single character, or a word without
/// any nucleus ("bcd"), is one syllable.
///
/// ```
/// use lexdiv_core::syllable::syllabify;
///
/// assert_eq!(syllabify("casa"), vec!["ca", "sa"]);
/// assert_eq!(syllabify("constante"), vec!["con", "stan", "te"]);
/// ```
pub fn syllabify(word: &str) -> Vec<&str> {
    let offsets: Vec<usize> = word.char_indices().map(|(b, _)| b).collect();
    match offsets.len() {
        0 => return Vec::new(),
        1 => return vec![word],
        _ => {}
    }

    let nuclei = nuclei(word);
    if nuclei.is_empty() {
        return vec![word];
    }

    // Byte offset just past character position `end`.
    let byte_end = |end: usize| offsets.get(end + 1).copied().unwrap_or(word.len());

    let mut syllables = Vec::with_capacity(nuclei.len());
    let mut start = 0;
    for (i, &v) in nuclei.iter().enumerate() {
        let end = match nuclei.get(i + 1) {
            None => offsets.len() - 1,
            Some(&next) => {
                let cons = next - v - 1;
                if cons <= 1 { v } else { v + cons / 2 }
            }
        };
        syllables.push(&word[offsets[start]..byte_end(end)]);
        start = end + 1;
    }

    syllables
}
