//! Fixed tables shared by the analyzers.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Function words (Traditional Chinese and English) plus web/brand terms
/// that never count as keywords. Entries are already lowercase.
pub const STOP_WORDS: &[&str] = &[
    // Chinese
    "的", "了", "是", "在", "我", "有", "和", "就", "不", "人", "都", "一", "一個",
    "上", "也", "很", "到", "說", "要", "去", "你", "會", "著", "沒有", "看", "好",
    "自己", "這", "那", "這個", "那個", "什麼", "怎麼", "為什麼", "可以", "因為",
    "如果", "但是", "所以", "還是", "已經", "現在", "真的", "覺得", "知道", "應該",
    "他", "她", "它", "們", "嗎", "吧", "啊", "呢", "喔", "欸", "哈", "哈哈",
    // English
    "the", "a", "an", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "could", "should",
    "may", "might", "must", "shall", "can", "need", "dare", "ought", "used",
    "to", "of", "in", "for", "on", "with", "at", "by", "from", "as",
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves",
    "you", "your", "yours", "yourself", "yourselves",
    "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves",
    "what", "which", "who", "whom", "this", "that", "these", "those",
    "am", "and", "but", "if", "or", "because",
    "until", "while", "about", "against", "between", "into", "through",
    "during", "before", "after", "above", "below", "up", "down", "out",
    "off", "over", "under", "again", "further", "then", "once",
    // URLs and platform names
    "http", "https", "www", "com", "threads", "instagram",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// Weekday labels, Sunday first.
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Word count of *Harry Potter and the Philosopher's Stone*.
pub const NOVEL_WORDS: u64 = 1_084_170;
/// Word count of an average thesis.
pub const THESIS_WORDS: u64 = 15_000;
/// Word count of the *Chu Shi Biao* memorial.
pub const CLASSIC_TEXT_WORDS: u64 = 700;

/// Label under which saved_threads.json stores the save time ("saved time").
pub const SAVED_TIME_KEY: &str = "儲存時間";
