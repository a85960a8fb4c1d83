//! Built-in particle table.
//!
//! `*` stands for one or more kanji-class characters (a verb or noun stem),
//! so `に*て` covers について, に対して, によって … and `を*じて` covers を通じて.

/// A named group of particle surface forms.
#[derive(Debug, Clone, Copy)]
pub struct ParticleGroup {
    pub name: &'static str,
    pub patterns: &'static [&'static str],
}

// ---------------------------------------------------------------------------
//    Pattern groups (single source of truth)
// ---------------------------------------------------------------------------

pub const BASIC: &[&str] = &[
    "は", "が", "を", "に", "へ", "と", "で", "の", "も", "や", "か", "ね", "よ", "ぞ", "ぜ", "さ", "わ",
    "なの",
];

pub const FROM: &[&str] = &[
    "から", "からも", "からは", "からこそ", "からして", "からには", "からといって",
];

pub const UNTIL: &[&str] = &["まで", "までも", "までは", "までに", "までして", "までが"];

pub const COMPARISON: &[&str] = &["より", "よりも", "よりは", "よりか"];

pub const WITH: &[&str] = &[
    "で",
    "では", "ではない", "ではないか", "ではなかろう", "ではなかろうか", "ではなく", "ではなくて",
    "ではあるが",
    "でも", "でもって", "でもなお", "でもある", "でもあり",
    "でして", "でした", "でしたら", "でさえ", "でさえも",
];

pub const TO: &[&str] = &[
    "に",
    "には", "にて", "にして", "にしても", "にしては", "にしろ", "にせよ",
    // について, につき
    "に*て", "に*",
    "にあって", "にあたり", "にあたって",
    "において", "における",
    // によって, によっては, によると, によれば
    "に*ては", "に*と", "に*ば",
    // に対し, に対して, に対する, に関して
    "に*し", "に*して", "に*する",
    // に関わらず, にも関わらず
    "にかかわらず", "にもかかわらず", "に*わらず", "にも*わらず",
    "にとって", "にとっては", "にとっても",
    "にいたるまで", "にいたって", "にいたっては",
];

pub const OBJECT: &[&str] = &[
    "を",
    // を巡って, を巡る
    "を*って", "を*る",
    // を通じて, を通して
    "を*じて", "を*して", "を*じ", "を*し",
    // を始め, を始めとして
    "をはじめ", "を*め", "を*として", "を*めとして",
    "をもって", "をもってして", "をもってしても",
    // を前に, を前にして, を契機として
    "を*に", "を*にして",
];

pub const QUOTE: &[&str] = &[
    "と",
    "とは", "とか", "とも", "として", "としては", "としても", "としての", "とした",
    "とかも", "とかは", "とかで", "とかの",
    // と共に
    "ともに", "とともに", "と*に",
    "ともかく", "ともあれ", "ともあろう",
    // と言えど
    "といえども", "と*えど", "といえば", "というと", "というか",
    "といったら", "といったところで", "といった",
    "とはいえ", "とはいいながら", "とはいうものの",
    "となると", "となれば", "となって", "となっては",
    "ところで", "ところが", "ところへ", "ところに",
];

pub const QUESTION: &[&str] = &[
    "か",
    // かと思えば, かと思うと
    "かと*えば", "かと*うと", "かというと", "かといえば", "かといって",
    "かどうか", "かしら", "かな", "かも", "かもしれない",
    "かのように", "かのような", "かのごとく", "かのごとき",
];

pub const COMPOUND: &[&str] = &[
    // ばかり
    "ばかり", "ばかりで", "ばかりだ", "ばかりか", "ばかりに", "ばかりでなく", "ばかりでは",
    // だけ
    "だけ", "だけは", "だけに", "だけしか", "だけでなく", "だけでは", "だけど", "だけども",
    // ほど
    "ほど", "ほどに", "ほどの", "ほどでは", "ほどでも",
    // ながら
    "ながら", "ながらも", "ながらに", "ながらにして",
    // もの
    "もの", "ものの", "ものを", "ものだ", "ものか", "ものなら", "ものだから",
    // のに
    "のに", "のには", "のにも",
    // ても
    "ても", "てもなお", "てもまだ", "てもいい", "てもよい",
    // など
    "など", "などは", "なども", "などか", "などという", "などと", "などで", "などに",
    // やら
    "やら", "やらか", "やらなんやら", "やらで",
    // limiting / emphatic
    "くらい", "ぐらい", "しか", "さえ", "さえも", "さえは", "こそ", "すら", "だに",
    // colloquial
    "なんて", "なんか", "けれども", "けれど", "けど", "けども", "けどもさ",
    "だって", "だの", "って", "ったって", "ってば",
    "じゃ", "じゃあ", "じゃね", "じゃん", "じゃない", "じゃないか",
    // conjunctive
    "つつ", "つつも", "つつある",
    "さては", "ついては", "あるいは", "または", "もしくは", "ないし", "ないしは",
];

pub static PARTICLE_GROUPS: &[ParticleGroup] = &[
    ParticleGroup { name: "basic", patterns: BASIC },
    ParticleGroup { name: "from", patterns: FROM },
    ParticleGroup { name: "until", patterns: UNTIL },
    ParticleGroup { name: "comparison", patterns: COMPARISON },
    ParticleGroup { name: "with", patterns: WITH },
    ParticleGroup { name: "to", patterns: TO },
    ParticleGroup { name: "object", patterns: OBJECT },
    ParticleGroup { name: "quote", patterns: QUOTE },
    ParticleGroup { name: "question", patterns: QUESTION },
    ParticleGroup { name: "compound", patterns: COMPOUND },
];

/// Every built-in pattern, group by group. Duplicates across groups are kept;
/// inserting them twice is harmless.
pub fn builtin_patterns() -> impl Iterator<Item = &'static str> {
    PARTICLE_GROUPS
        .iter()
        .flat_map(|group| group.patterns.iter().copied())
}
