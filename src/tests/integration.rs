#[cfg(test)]
mod integration_tests {

    use crate::{HtmlOptions, Segmenter, to_html, tokenize};

    const SPAN: &str = "<span style=\"display:inline-block\" role=\"presentation\">";

    /// Token texts back out of default-option markup.
    fn unwrap_spans(html: &str) -> Vec<&str> {
        html.split_terminator("</span>")
            .map(|part| part.strip_prefix(SPAN).expect("span prefix"))
            .collect()
    }

    fn assert_tokens(source: &str, expected: &[&str]) {
        assert_eq!(tokenize(source), expected, "source: {source}");
        assert_eq!(unwrap_spans(&to_html(source, &HtmlOptions::default())), expected);
    }

    fn assert_lossless(source: &str) {
        let tokens = tokenize(source);
        assert_eq!(tokens.concat(), source);
        assert!(tokens.iter().all(|t| !t.is_empty()), "empty token in {tokens:?}");
        assert_eq!(
            unwrap_spans(&to_html(source, &HtmlOptions::default())).concat(),
            source
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sentences
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn basic_sentence() {
        assert_tokens(
            "常に最新、最高のモバイル。Androidを開発した同じチームから。",
            &[
                "常に", "最新、", "最高の", "モバイル。", "Androidを", "開発した", "同じ",
                "チームから。",
            ],
        );
    }

    #[test]
    fn request_sentence() {
        assert_tokens(
            "原稿と防災服を用意してくれ",
            &["原稿と", "防災服を", "用意してくれ"],
        );
    }

    #[test]
    fn hiragana_only() {
        assert_tokens("やりたいことのそばにいる", &["やりたいことの", "そばに", "いる"]);
    }

    #[test]
    fn library_name() {
        assert_tokens(
            "このtoHTMLtoHTML.jsというライブラリは、スマートな文字区切りを可能にします。",
            &[
                "この",
                "toHTMLtoHTML.jsと",
                "いう",
                "ライブラリは、",
                "スマートな",
                "文字区切りを",
                "可能にします。",
            ],
        );
    }

    #[test]
    fn question_with_options() {
        assert_tokens(
            "テンプレートを使用しますか、それとも空白の調査から始めますか？",
            &[
                "テンプレートを",
                "使用しますか、",
                "それとも",
                "空白の",
                "調査から",
                "始めますか？",
            ],
        );
    }

    #[test]
    fn quoted_text_with_negation() {
        assert_tokens(
            "「あれ」でもない、「これ」でもない。",
            &["「あれ」", "でもない、", "「これ」", "でもない。"],
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Numbers and units
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn speed_with_unit() {
        assert_tokens(
            "桜の花の落ちるスピード。秒速5センチメートル",
            &["桜の", "花の", "落ちる", "スピード。", "秒速", "5センチメートル"],
        );
    }

    #[test]
    fn percentage_after_space() {
        assert_tokens(
            "ページの読み込みが 50%加速",
            &["ページの", "読み", "込みが", " ", "50%", "加速"],
        );
    }

    #[test]
    fn distance_with_man() {
        assert_tokens(
            "赤道を抜け、嵐を抜け、氷を割り、日本から1万4000キロ",
            &[
                "赤道を", "抜け、", "嵐を", "抜け、", "氷を", "割り、", "日本から", "1万",
                "4000キロ",
            ],
        );
    }

    #[test]
    fn kanji_numerals() {
        assert_tokens("母をたずねて三千里", &["母をたずねて", "三千里"]);
    }

    #[test]
    fn navigation_data() {
        assert_tokens(
            "ヘディング190、高度32000、速度720ノット、なお南下中",
            &[
                "ヘディング",
                "190、",
                "高度",
                "32000、",
                "速度",
                "720ノット、なお",
                "南下中",
            ],
        );
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mixed content keeps every character
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn symbols_and_paths() {
        for source in [
            "日本語/英語の切り替えができます",
            "パス: src/components/Button.tsx",
            "詳細は https://example.com/docs を参照してください",
            "検索パターン: *.txt + 正規表現 ^ $ | () [] {}",
            "数式: (a + b) * c^2 = result",
            "メール: user@example.com と user+tag@domain.co.jp",
            "参考文献[1]と(注釈)を含む文章{重要}",
            "ファイル検索: *.js | *.ts ? 見つかりました",
        ] {
            assert_lossless(source);
        }
    }

    #[test]
    fn emoji_and_signs() {
        for source in [
            "今日は良い天気ですね 🌞 とても暖かいです",
            "価格: €100 ≈ ¥15,000 💰",
            "GitHub © 2024 → 新機能追加 ⭐",
            "数学: α + β = γ ∞",
            "顔文字: (^_^) ಠ_ಠ ¯_(ツ)_/¯",
            "矢印: ← → ↑ ↓ ↔ ⇄",
            "家族: 👨‍👩‍👧‍👦 国旗: 🇯🇵",
        ] {
            assert_lossless(source);
        }
    }

    #[test]
    fn other_scripts() {
        for source in [
            "タイ語: สวัสดีครับ 日本語と混在テスト ขอบคุณมากครับ",
            "ロシア語: Привет мир! 日本語と一緒に Спасибо большое",
            "フランス語: Bonjour le monde! 日本とフランス Merci beaucoup",
            "アラビア語: مرحبا بالعالم 日本語テキスト شكرا جزيلا",
            "韓国語: 안녕하세요 세계! 日本語との混合 감사합니다",
            "ヒンディー語: नमस्ते दुनिया! 日本語テスト धन्यवाद",
        ] {
            assert_lossless(source);
        }
    }

    #[test]
    fn nbsp_entity_survives() {
        assert_lossless("吾輩は&nbsp;猫である");
        assert!(tokenize("a&nbsp;b").contains(&"&nbsp;"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // HTML options and custom particles
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn html_custom_options() {
        let opts = HtmlOptions::default()
            .class_name("wbr")
            .style("font-weight:bold")
            .aria(false);
        let html = to_html("私は好きにした。君たちも好きにしろ。", &opts);
        assert!(html.contains("class=\"wbr\""));
        assert!(html.contains("style=\"display:inline-block;font-weight:bold\""));
        assert!(!html.contains("role="));
    }

    #[test]
    fn html_empty_attributes() {
        let opts = HtmlOptions::default().class_name("").style("").aria(false);
        let html = to_html("え、蒲田に！？", &opts);
        assert!(!html.contains("class="));
        assert!(html.contains("style=\"display:inline-block\""));
        assert!(!html.contains("role="));
    }

    #[test]
    fn html_of_empty_input_is_one_empty_span() {
        assert_eq!(to_html("", &HtmlOptions::default()), format!("{SPAN}</span>"));
    }

    #[test]
    fn custom_particle_changes_splitting() {
        let plain = Segmenter::default();
        assert_eq!(plain.tokenize("ネコってさ"), vec!["ネコ", "ってさ"]);

        let seg = Segmenter::builder().particle("ってさ").build().unwrap();
        assert_eq!(seg.tokenize("ネコってさ"), vec!["ネコってさ"]);
    }

    #[test]
    fn one_segmenter_many_threads() {
        let seg = Segmenter::default();
        let text = "常に最新、最高のモバイル。";
        let expected = seg.tokenize(text);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(seg.tokenize(text), expected));
            }
        });
    }
}
