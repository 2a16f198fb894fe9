use kana_core::{Category, Example, GridPos, KanaEntry};

macro_rules! ex {
    ($word:expr, $reading:expr, $romaji:expr, $meaning:expr) => {
        Example {
            word: $word,
            reading: $reading,
            romaji: $romaji,
            meaning: $meaning,
        }
    };
}

/// Base-syllabary entry placed in the chart
const fn at(
    kana: &'static str,
    katakana: &'static str,
    romaji: &'static str,
    row: u8,
    col: u8,
    examples: &'static [Example],
) -> KanaEntry {
    KanaEntry {
        kana,
        katakana,
        romaji,
        examples,
        grid: Some(GridPos::new(row, col)),
    }
}

const fn kana(
    kana: &'static str,
    katakana: &'static str,
    romaji: &'static str,
    examples: &'static [Example],
) -> KanaEntry {
    KanaEntry {
        kana,
        katakana,
        romaji,
        examples,
        grid: None,
    }
}

pub const GOJUON: &[KanaEntry] = &[
    at("あ", "ア", "a", 0, 0, &[ex!("朝", "あさ", "asa", "morning")]),
    at("い", "イ", "i", 0, 1, &[ex!("犬", "いぬ", "inu", "dog")]),
    at("う", "ウ", "u", 0, 2, &[ex!("海", "うみ", "umi", "sea")]),
    at("え", "エ", "e", 0, 3, &[ex!("駅", "えき", "eki", "station")]),
    at("お", "オ", "o", 0, 4, &[ex!("美味しい", "おいしい", "oishii", "delicious")]),
    at("か", "カ", "ka", 1, 0, &[ex!("傘", "かさ", "kasa", "umbrella")]),
    at("き", "キ", "ki", 1, 1, &[ex!("切手", "きって", "kitte", "postage stamp")]),
    at("く", "ク", "ku", 1, 2, &[ex!("車", "くるま", "kuruma", "car")]),
    at("け", "ケ", "ke", 1, 3, &[ex!("携帯", "けいたい", "keitai", "mobile phone")]),
    at("こ", "コ", "ko", 1, 4, &[ex!("子供", "こども", "kodomo", "child")]),
    at("さ", "サ", "sa", 2, 0, &[ex!("魚", "さかな", "sakana", "fish")]),
    at("し", "シ", "shi", 2, 1, &[ex!("新聞", "しんぶん", "shinbun", "newspaper")]),
    at("す", "ス", "su", 2, 2, &[ex!("寿司", "すし", "sushi", "sushi")]),
    at("せ", "セ", "se", 2, 3, &[ex!("先生", "せんせい", "sensei", "teacher")]),
    at("そ", "ソ", "so", 2, 4, &[ex!("空", "そら", "sora", "sky")]),
    at("た", "タ", "ta", 3, 0, &[ex!("卵", "たまご", "tamago", "egg")]),
    at("ち", "チ", "chi", 3, 1, &[ex!("地下鉄", "ちかてつ", "chikatetsu", "subway")]),
    at("つ", "ツ", "tsu", 3, 2, &[ex!("机", "つくえ", "tsukue", "desk")]),
    at("て", "テ", "te", 3, 3, &[ex!("手紙", "てがみ", "tegami", "letter")]),
    at("と", "ト", "to", 3, 4, &[ex!("友達", "ともだち", "tomodachi", "friend")]),
    at("な", "ナ", "na", 4, 0, &[ex!("夏", "なつ", "natsu", "summer")]),
    at("に", "ニ", "ni", 4, 1, &[ex!("肉", "にく", "niku", "meat")]),
    at("ぬ", "ヌ", "nu", 4, 2, &[ex!("ぬいぐるみ", "ぬいぐるみ", "nuigurumi", "stuffed toy")]),
    at("ね", "ネ", "ne", 4, 3, &[ex!("猫", "ねこ", "neko", "cat")]),
    at("の", "ノ", "no", 4, 4, &[ex!("飲み物", "のみもの", "nomimono", "drink")]),
    at("は", "ハ", "ha", 5, 0, &[ex!("花", "はな", "hana", "flower")]),
    at("ひ", "ヒ", "hi", 5, 1, &[ex!("飛行機", "ひこうき", "hikouki", "airplane")]),
    at("ふ", "フ", "fu", 5, 2, &[ex!("船", "ふね", "fune", "ship")]),
    at("へ", "ヘ", "he", 5, 3, &[ex!("部屋", "へや", "heya", "room")]),
    at("ほ", "ホ", "ho", 5, 4, &[ex!("本", "ほん", "hon", "book")]),
    at("ま", "マ", "ma", 6, 0, &[ex!("窓", "まど", "mado", "window")]),
    at("み", "ミ", "mi", 6, 1, &[ex!("耳", "みみ", "mimi", "ear")]),
    at("む", "ム", "mu", 6, 2, &[ex!("虫", "むし", "mushi", "insect")]),
    at("め", "メ", "me", 6, 3, &[ex!("眼鏡", "めがね", "megane", "glasses")]),
    at("も", "モ", "mo", 6, 4, &[ex!("森", "もり", "mori", "forest")]),
    at("や", "ヤ", "ya", 7, 0, &[ex!("山", "やま", "yama", "mountain")]),
    at("ゆ", "ユ", "yu", 7, 2, &[ex!("雪", "ゆき", "yuki", "snow")]),
    at("よ", "ヨ", "yo", 7, 4, &[ex!("夜", "よる", "yoru", "night")]),
    at("ら", "ラ", "ra", 8, 0, &[ex!("来週", "らいしゅう", "raishuu", "next week")]),
    at("り", "リ", "ri", 8, 1, &[ex!("林檎", "りんご", "ringo", "apple")]),
    at("る", "ル", "ru", 8, 2, &[ex!("留守", "るす", "rusu", "away from home")]),
    at("れ", "レ", "re", 8, 3, &[ex!("練習", "れんしゅう", "renshuu", "practice")]),
    at("ろ", "ロ", "ro", 8, 4, &[ex!("六", "ろく", "roku", "six")]),
    at("わ", "ワ", "wa", 9, 0, &[ex!("私", "わたし", "watashi", "I, me")]),
    at("を", "ヲ", "wo", 9, 4, &[ex!("本を", "ほんを", "hon wo", "(read) a book")]),
    at("ん", "ン", "n", 10, 0, &[ex!("新聞", "しんぶん", "shinbun", "newspaper")]),
];

pub const DAKUON: &[KanaEntry] = &[
    kana(
        "が",
        "ガ",
        "ga",
        &[
            ex!("大学", "だいがく", "daigaku", "university"),
            ex!("学校", "がっこう", "gakkou", "school"),
        ],
    ),
    kana("ざ", "ザ", "za", &[ex!("雑誌", "ざっし", "zasshi", "magazine")]),
    kana("だ", "ダ", "da", &[ex!("台所", "だいどころ", "daidokoro", "kitchen")]),
    kana("ば", "バ", "ba", &[ex!("晩御飯", "ばんごはん", "bangohan", "dinner")]),
    kana("ぱ", "パ", "pa", &[ex!("天ぷら", "てんぷら", "tenpura", "tempura")]),
];

pub const YOON: &[KanaEntry] = &[
    kana("きゃ", "キャ", "kya", &[ex!("客", "きゃく", "kyaku", "guest")]),
    kana("しゃ", "シャ", "sha", &[ex!("写真", "しゃしん", "shashin", "photograph")]),
    kana("ちゃ", "チャ", "cha", &[ex!("お茶", "おちゃ", "ocha", "tea")]),
];

pub const SPECIAL: &[KanaEntry] = &[
    kana(
        "っ",
        "ッ",
        "(pause)",
        &[
            ex!("切手", "きって", "kitte", "postage stamp"),
            ex!("学校", "がっこう", "gakkou", "school"),
        ],
    ),
    kana(
        "ん",
        "ン",
        "n",
        &[
            ex!("先生", "せんせい", "sensei", "teacher"),
            ex!("案内", "あんない", "annai", "guidance"),
        ],
    ),
    kana("ー", "ー", "(long)", &[ex!("ノート", "のーと", "nōto", "notebook")]),
];

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "pure",
        name: "Gojūon 五十音",
        description: "The foundation of Japanese pronunciation, in hiragana and katakana.",
        entries: GOJUON,
    },
    Category {
        id: "dakuon",
        name: "Dakuon 濁音",
        description: "Voiced and semi-voiced sounds (が, ぱ): a ゛ or ゜ at the top right turns か into が.",
        entries: DAKUON,
    },
    Category {
        id: "contracted",
        name: "Yōon 拗音",
        description: "An i-column kana plus a small ya/yu/yo. Two glyphs shrink into a single beat.",
        entries: YOON,
    },
    Category {
        id: "special",
        name: "Special moras",
        description: "Sokuon (っ), hatsuon (ん) and the long vowel mark (ー).",
        entries: SPECIAL,
    },
];
