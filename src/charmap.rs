//! Built-in character map: single code points → ASCII Latin renderings.
//!
//! Covers Latin-1 Supplement, Latin Extended-A, Greek (with tonos and
//! dialytika) and Cyrillic. Every value is 1–3 characters from `[A-Za-z0-9]`,
//! so the map never injects separators or punctuation. Uppercase sources map
//! to capitalized targets; lowercase folding happens at the end of the
//! pipeline.
//!
//! Characters with no reasonable Latin rendering (Cyrillic `ъ`/`ь`) are
//! absent on purpose and get dropped by the filter.
use phf::{Map, phf_map};

pub static CHAR_MAP: Map<char, &'static str> = phf_map! {
    // Latin-1 Supplement letters
    'À' => "A", 'Á' => "A", 'Â' => "A", 'Ã' => "A", 'Ä' => "Ae", 'Å' => "Aa", 'Æ' => "Ae",
    'Ç' => "C", 'È' => "E", 'É' => "E", 'Ê' => "E", 'Ë' => "E", 'Ì' => "I", 'Í' => "I",
    'Î' => "I", 'Ï' => "I", 'Ð' => "D", 'Ñ' => "N", 'Ò' => "O", 'Ó' => "O", 'Ô' => "O",
    'Õ' => "O", 'Ö' => "Oe", '×' => "x", 'Ø' => "Oe", 'Ù' => "U", 'Ú' => "U", 'Û' => "U",
    'Ü' => "Ue", 'Ý' => "Y", 'Þ' => "Th", 'ß' => "ss", 'à' => "a", 'á' => "a", 'â' => "a",
    'ã' => "a", 'ä' => "ae", 'å' => "aa", 'æ' => "ae", 'ç' => "c", 'è' => "e", 'é' => "e",
    'ê' => "e", 'ë' => "e", 'ì' => "i", 'í' => "i", 'î' => "i", 'ï' => "i", 'ð' => "d",
    'ñ' => "n", 'ò' => "o", 'ó' => "o", 'ô' => "o", 'õ' => "o", 'ö' => "oe", 'ø' => "oe",
    'ù' => "u", 'ú' => "u", 'û' => "u", 'ü' => "ue", 'ý' => "y", 'þ' => "th", 'ÿ' => "y",
    // Symbols
    '€' => "e", 'ƒ' => "f", '™' => "tm", '©' => "c", '®' => "r", 'ª' => "a", 'º' => "o",
    '¹' => "1", '²' => "2", '³' => "3", 'µ' => "u", '¼' => "14", '½' => "12", '¾' => "34",
    // Latin Extended-A
    'Ā' => "A", 'ā' => "a", 'Ă' => "A", 'ă' => "a", 'Ą' => "A", 'ą' => "a", 'Ć' => "C",
    'ć' => "c", 'Ĉ' => "C", 'ĉ' => "c", 'Ċ' => "C", 'ċ' => "c", 'Č' => "C", 'č' => "c",
    'Ď' => "D", 'ď' => "d", 'Đ' => "D", 'đ' => "d", 'Ē' => "E", 'ē' => "e", 'Ĕ' => "E",
    'ĕ' => "e", 'Ė' => "E", 'ė' => "e", 'Ę' => "E", 'ę' => "e", 'Ě' => "E", 'ě' => "e",
    'Ĝ' => "G", 'ĝ' => "g", 'Ğ' => "G", 'ğ' => "g", 'Ġ' => "G", 'ġ' => "g", 'Ģ' => "G",
    'ģ' => "g", 'Ĥ' => "H", 'ĥ' => "h", 'Ħ' => "H", 'ħ' => "h", 'Ĩ' => "I", 'ĩ' => "i",
    'Ī' => "I", 'ī' => "i", 'Ĭ' => "I", 'ĭ' => "i", 'Į' => "I", 'į' => "i", 'İ' => "I",
    'ı' => "i", 'Ĳ' => "IJ", 'ĳ' => "ij", 'Ĵ' => "J", 'ĵ' => "j", 'Ķ' => "K", 'ķ' => "k",
    'ĸ' => "k", 'Ĺ' => "L", 'ĺ' => "l", 'Ļ' => "L", 'ļ' => "l", 'Ľ' => "L", 'ľ' => "l",
    'Ŀ' => "L", 'ŀ' => "l", 'Ł' => "L", 'ł' => "l", 'Ń' => "N", 'ń' => "n", 'Ņ' => "N",
    'ņ' => "n", 'Ň' => "N", 'ň' => "n", 'ŉ' => "n", 'Ŋ' => "N", 'ŋ' => "n", 'Ō' => "O",
    'ō' => "o", 'Ŏ' => "O", 'ŏ' => "o", 'Ő' => "O", 'ő' => "o", 'Œ' => "Oe", 'œ' => "oe",
    'Ŕ' => "R", 'ŕ' => "r", 'Ŗ' => "R", 'ŗ' => "r", 'Ř' => "R", 'ř' => "r", 'Ś' => "S",
    'ś' => "s", 'Ŝ' => "S", 'ŝ' => "s", 'Ş' => "S", 'ş' => "s", 'Š' => "S", 'š' => "s",
    'Ţ' => "T", 'ţ' => "t", 'Ť' => "T", 'ť' => "t", 'Ŧ' => "T", 'ŧ' => "t", 'Ũ' => "U",
    'ũ' => "u", 'Ū' => "U", 'ū' => "u", 'Ŭ' => "U", 'ŭ' => "u", 'Ů' => "U", 'ů' => "u",
    'Ű' => "U", 'ű' => "u", 'Ų' => "U", 'ų' => "u", 'Ŵ' => "W", 'ŵ' => "w", 'Ŷ' => "Y",
    'ŷ' => "y", 'Ÿ' => "Y", 'Ź' => "Z", 'ź' => "z", 'Ż' => "Z", 'ż' => "z", 'Ž' => "Z",
    'ž' => "z", 'ſ' => "s",
    // Romanian comma-below
    'Ș' => "S", 'ș' => "s", 'Ț' => "T", 'ț' => "t",
    // Greek capitals
    'Α' => "A", 'Β' => "B", 'Γ' => "G", 'Δ' => "D", 'Ε' => "E", 'Ζ' => "Z", 'Η' => "H",
    'Θ' => "Th", 'Ι' => "I", 'Κ' => "K", 'Λ' => "L", 'Μ' => "M", 'Ν' => "N", 'Ξ' => "Ks",
    'Ο' => "O", 'Π' => "P", 'Ρ' => "R", 'Σ' => "S", 'Τ' => "T", 'Υ' => "Y", 'Φ' => "F",
    'Χ' => "X", 'Ψ' => "Ps", 'Ω' => "W",
    // Greek small letters
    'α' => "a", 'β' => "b", 'γ' => "g", 'δ' => "d", 'ε' => "e", 'ζ' => "z", 'η' => "h",
    'θ' => "th", 'ι' => "i", 'κ' => "k", 'λ' => "l", 'μ' => "m", 'ν' => "n", 'ξ' => "ks",
    'ο' => "o", 'π' => "p", 'ρ' => "r", 'ς' => "s", 'σ' => "s", 'τ' => "t", 'υ' => "y",
    'φ' => "f", 'χ' => "x", 'ψ' => "ps", 'ω' => "w",
    // Greek with tonos
    'Ά' => "A", 'Έ' => "E", 'Ή' => "H", 'Ί' => "I", 'Ό' => "O", 'Ύ' => "Y", 'Ώ' => "W",
    'ά' => "a", 'έ' => "e", 'ή' => "h", 'ί' => "i", 'ό' => "o", 'ύ' => "y", 'ώ' => "w",
    // Greek with dialytika
    'Ϊ' => "I", 'Ϋ' => "Y", 'ϊ' => "i", 'ϋ' => "u", 'ΰ' => "u", 'ΐ' => "i",
    // Cyrillic capitals
    'А' => "A", 'Б' => "B", 'В' => "V", 'Г' => "G", 'Д' => "D", 'Е' => "E", 'Ж' => "Zh",
    'З' => "Z", 'И' => "I", 'Й' => "J", 'К' => "K", 'Л' => "L", 'М' => "M", 'Н' => "N",
    'О' => "O", 'П' => "P", 'Р' => "R", 'С' => "S", 'Т' => "T", 'У' => "U", 'Ф' => "F",
    'Х' => "Kh", 'Ц' => "Ts", 'Ч' => "Ch", 'Ш' => "Sh", 'Щ' => "Sch", 'Ы' => "Y", 'Э' => "E",
    'Ю' => "Yu", 'Я' => "Ya",
    // Cyrillic small letters
    'а' => "a", 'б' => "b", 'в' => "v", 'г' => "g", 'д' => "d", 'е' => "e", 'ж' => "zh",
    'з' => "z", 'и' => "i", 'й' => "j", 'к' => "k", 'л' => "l", 'м' => "m", 'н' => "n",
    'о' => "o", 'п' => "p", 'р' => "r", 'с' => "s", 'т' => "t", 'у' => "u", 'ф' => "f",
    'х' => "kh", 'ц' => "ts", 'ч' => "ch", 'ш' => "sh", 'щ' => "sch", 'ы' => "y", 'э' => "e",
    'ю' => "yu", 'я' => "ya",
    // Cyrillic: Ukrainian, Belarusian, Serbian, Macedonian
    'Ё' => "Yo", 'ё' => "yo", 'Є' => "Ye", 'є' => "ye", 'І' => "I", 'і' => "i", 'Ї' => "Yi",
    'ї' => "yi", 'Ґ' => "G", 'ґ' => "g", 'Ў' => "U", 'ў' => "u", 'Ђ' => "Dj", 'ђ' => "dj",
    'Ј' => "J", 'ј' => "j", 'Љ' => "Lj", 'љ' => "lj", 'Њ' => "Nj", 'њ' => "nj", 'Ћ' => "C",
    'ћ' => "c", 'Џ' => "Dz", 'џ' => "dz", 'Ѓ' => "G", 'ѓ' => "g", 'Ќ' => "K", 'ќ' => "k",
    'Ѕ' => "Dz", 'ѕ' => "dz",
};

/// Look up the ASCII rendering of `c`.
#[inline(always)]
pub fn lookup(c: char) -> Option<&'static str> {
    if c.is_ascii() {
        return None;
    }
    CHAR_MAP.get(&c).copied()
}

/// `true` if `c` has an entry in the built-in map.
#[inline]
pub fn contains(c: char) -> bool {
    lookup(c).is_some()
}

#[inline]
pub fn len() -> usize {
    CHAR_MAP.len()
}

#[inline]
pub fn is_empty() -> bool {
    CHAR_MAP.is_empty()
}
