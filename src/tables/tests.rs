/*
 * Copyright 2019 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */


use std::io::Cursor;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::emojis::emoji::EmojiRecord;
use crate::emojis::emoji_status::EmojiStatus;
use crate::tables::emoji_tables::EmojiTable;
use crate::tables::parser::{parse_code_points, ParserContext};
use crate::tables::regexes::{match_line, split_annotation, EmojiLine, LineKind};
use crate::tests::init_logger;

fn table(definition: &str) -> EmojiTable {
    init_logger();
    EmojiTable::from_reader(definition.as_bytes())
}

#[test]
fn minimal_definition() {
    let table = table(
        "# group: Smileys & Emotion\n\
         # subgroup: face-smiling\n\
         1F600 ; fully-qualified # 😀 E1.0 grinning face\n"
    );

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0), Some(&EmojiRecord {
        code_points: vec![0x1f600],
        group: String::from("Smileys & Emotion"),
        sub_group: String::from("face-smiling"),
        unicode_version: String::from("E1.0"),
        text_description: String::from("grinning face"),
        status: Some(EmojiStatus::FullyQualified)
    }));
    assert_eq!(table.get(1), None);
}

#[test]
fn distinct_names_in_file_order() {
    let table = table(
        "# group: A\n# subgroup: a1\n1F600 ; fully-qualified # 😀 E1.0 one\n\
         # subgroup: a2\n1F601 ; fully-qualified # 😁 E0.6 two\n\
         # group: B\n# subgroup: a1\n1F602 ; fully-qualified # 😂 E0.6 three\n"
    );

    assert_eq!(table.group_names(), vec!["A", "B"]);
    assert_eq!(table.sub_group_names(), vec!["a1", "a2"]);
    assert_eq!(table.count_in_group("A"), 2);
    assert_eq!(table.count_in_group("B"), 1);
    assert_eq!(table.count_in_group("nonexistent"), 0);
    assert_eq!(table.count_in_sub_group("a1"), 2);

    assert_eq!(table.record_at_group("A", 1).map(|record| record.code_points[0]), Some(0x1f601));
    assert_eq!(table.record_at_sub_group("a1", 1).map(|record| record.code_points[0]), Some(0x1f602));
    assert_eq!(table.record_at_group("A", 2), None);
    assert_eq!(table.record_at_group("nonexistent", 0), None);

    let keys: Vec<_> = table.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec![0, 1, 2]);
}

#[test]
fn headers_never_produce_records() {
    let mut context = ParserContext::new();
    for line in &[
        "# emoji-test.txt",
        "# group: Flags",
        "# subgroup: flag",
        "#EOF",
        "",
        "   ",
        "# Flags subtotal:\t\t6",
    ] {
        assert_eq!(context.parse_line(line), None, "{:?}", line);
    }
    assert_eq!(context.group, "Flags");
    assert_eq!(context.sub_group, "flag");
}

#[test]
fn line_kinds() {
    assert_eq!(match_line("# subgroup: face-smiling"), LineKind::SubGroup("face-smiling"));
    assert_eq!(match_line("#  group:   Objects  "), LineKind::Comment);
    assert_eq!(match_line("# group:   Objects  "), LineKind::Group("Objects"));
    assert_eq!(match_line("garbage without annotation"), LineKind::Unrecognized);
    assert_eq!(
        match_line("0023 FE0F 20E3 ; fully-qualified # #️⃣ E0.6 keycap: #"),
        LineKind::Data(EmojiLine {
            sequence: "0023 FE0F 20E3 ",
            status: Some("fully-qualified"),
            annotation: " #️⃣ E0.6 keycap: #"
        })
    );
}

#[test]
fn hex_tokens() {
    assert_eq!(parse_code_points("1F3F3 FE0F 200D 1F308"), vec![0x1f3f3, 0xfe0f, 0x200d, 0x1f308]);
    assert_eq!(parse_code_points("1f600"), vec![0x1f600]);
    assert_eq!(parse_code_points("1F600 ?? 1F601"), vec![0x1f600, 0x1f601]);
    assert_eq!(parse_code_points("FFFFFFFFF 1F600"), vec![0x1f600]);
    assert!(parse_code_points("").is_empty());
    assert!(parse_code_points("xyz ---").is_empty());
}

#[test]
fn skipped_lines() {
    let table = table(
        "# group: G\n# subgroup: s\n\
         xyz ; fully-qualified # ? E1.0 no hex at all\n\
         1F600 fully-qualified without annotation\n\
         1F601 ; fully-qualified # 😁 E0.6 beaming face with smiling eyes\n"
    );

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0).map(|record| record.code_points.clone()), Some(vec![0x1f601]));
}

#[test]
fn missing_version_keeps_previous() {
    let table = table(
        "# group: G\n# subgroup: s\n\
         1F600 ; fully-qualified # 😀 E1.0 grinning face\n\
         1F601 ; fully-qualified # 😁 no version\n\
         1F602 # 😂 E0.6 face with tears of joy\n"
    );

    assert_eq!(table.len(), 3);
    let second = table.get(1).unwrap();
    assert_eq!(second.unicode_version, "E1.0");
    assert_eq!(second.text_description, "grinning face");
    assert_eq!(second.code_points, vec![0x1f601]);

    let third = table.get(2).unwrap();
    assert_eq!(third.unicode_version, "E0.6");
    assert_eq!(third.text_description, "face with tears of joy");
    assert_eq!(third.status, None);
}

#[test]
fn versions_use_ascii_digits() {
    assert_eq!(split_annotation(" 🫠 E14.0 melting face"), Some(("E14.0", "melting face")));
    assert_eq!(split_annotation(" 😀 E١.٠ fake"), None);
    assert_eq!(split_annotation(" 😀 E１.０ fake"), None);

    let table = table(
        "# group: G\n# subgroup: s\n\
         1F600 ; fully-qualified # 😀 E1.0 grinning face\n\
         1F601 ; fully-qualified # 😁 E١.٠ fake\n"
    );
    let second = table.get(1).unwrap();
    assert_eq!(second.unicode_version, "E1.0");
    assert_eq!(second.text_description, "grinning face");
}

#[test]
fn status_and_line_endings() {
    let table = table(
        "# group: Component\r\n# subgroup: skin-tone\r\n\
         1F3FB ; component # 🏻 E1.0 light skin tone\r\n\
         263A ; unqualified # ☺ E0.6 smiling face\r\n\
         1F441 ; minimally-qualified # 👁 E0.7 eye\r\n\
         1F600 ; whatever # 😀 E1.0 grinning face\r\n"
    );

    assert_eq!(table.group_names(), vec!["Component"]);
    assert_eq!(table.sub_group_names(), vec!["skin-tone"]);
    let statuses: Vec<_> = table.iter().map(|(_, record)| record.status).collect();
    assert_eq!(statuses, vec![
        Some(EmojiStatus::Component),
        Some(EmojiStatus::Unqualified),
        Some(EmojiStatus::MinimallyQualified),
        None
    ]);
    assert_eq!(table.get(0).unwrap().text_description, "light skin tone");
}

#[test]
fn invalid_utf8_lines_are_skipped() {
    let mut definition = b"# group: G\n# subgroup: s\n".to_vec();
    definition.extend_from_slice(b"1F600 ; fully-qualified # \xff\xfe E1.0 broken\n");
    definition.extend_from_slice("1F601 ; fully-qualified # 😁 E0.6 beaming face\n".as_bytes());
    init_logger();
    let table = EmojiTable::from_reader(Cursor::new(definition));

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(0).unwrap().text_description, "beaming face");
}

#[test]
fn random_sampling() {
    let table = table(
        "# group: Single\n# subgroup: one\n1F98A ; fully-qualified # 🦊 E3.0 fox\n\
         # group: Many\n# subgroup: many\n\
         1F600 ; fully-qualified # 😀 E1.0 a\n\
         1F601 ; fully-qualified # 😁 E0.6 b\n\
         1F602 ; fully-qualified # 😂 E0.6 c\n"
    );
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..10 {
        assert_eq!(table.random_in_group("Single", &mut rng), table.get(0));
    }
    assert_eq!(table.random_in_group("nonexistent", &mut rng), None);
    assert_eq!(table.random_in_sub_group("nonexistent", &mut rng), None);

    // Every entry (including the last one) can be chosen
    let mut seen = [false; 3];
    for _ in 0..200 {
        let record = table.random_in_sub_group("many", &mut rng).unwrap();
        seen[(record.code_points[0] - 0x1f600) as usize] = true;
    }
    assert_eq!(seen, [true; 3]);

    // Neither group is one of the random groups
    assert_eq!(table.random_any(&mut rng), None);
}

#[test]
fn strings_and_descriptions() {
    let table = table(
        "# group: Flags\n# subgroup: country-flag\n\
         1F1E9 1F1EA ; fully-qualified # 🇩🇪 E0.6 flag: Germany\n\
         1F1EF 1F1F5 ; fully-qualified # 🇯🇵 E0.6 flag: Japan\n"
    );

    assert_eq!(table.emojis_in_group("Flags"), "🇩🇪🇯🇵");
    assert_eq!(table.emojis_in_sub_group("country-flag"), "🇩🇪🇯🇵");
    assert_eq!(table.emojis_in_group("nonexistent"), "");
    assert_eq!(
        table.describe_sub_group("country-flag"),
        "Emoji: 🇩🇪\t Group: Flags | Subgroup: country-flag | Description: flag: Germany | Unicode version: E0.6\n\
         Emoji: 🇯🇵\t Group: Flags | Subgroup: country-flag | Description: flag: Japan | Unicode version: E0.6\n"
    );
    assert_eq!(table.describe_group("nonexistent"), "");
    assert_eq!(table.get(1).unwrap().code_point_string(), "1F1EF 1F1F5");
    assert_eq!(format!("{}", table.get(1).unwrap()), "flag: Japan");
}

#[test]
fn exports() {
    let table = table(
        "# group: Symbols\n# subgroup: keycap\n\
         0023 FE0F 20E3 ; fully-qualified # #️⃣ E0.6 keycap: #\n"
    );

    let mut csv = Vec::new();
    table.write_csv(&mut csv).unwrap();
    let mut reader = csv::Reader::from_reader(csv.as_slice());
    assert_eq!(
        reader.headers().unwrap(),
        vec!["key", "emoji", "code_points", "group", "sub_group", "status", "unicode_version", "text_description"]
    );
    let rows: Vec<_> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec!["0", "#️⃣", "0023 FE0F 20E3", "Symbols", "keycap", "fully-qualified", "E0.6", "keycap: #"]
    );

    let mut json = Vec::new();
    table.write_json(&mut json).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(json[0]["emoji"], "#️⃣");
    assert_eq!(json[0]["status"], "fully-qualified");
    assert_eq!(json[0]["code_points"], "0023 FE0F 20E3");
    assert_eq!(json.as_array().map(Vec::len), Some(1));
}

#[test]
fn table_from_file() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emoji-test.txt");
    std::fs::write(&path, "# group: G\n# subgroup: s\n1F600 ; fully-qualified # 😀 E1.0 grinning face\n").unwrap();

    let table = EmojiTable::from_file(&path).unwrap();
    assert!(table.is_populated());
    assert!(EmojiTable::from_file(dir.path().join("missing.txt")).is_err());
    assert!(!EmojiTable::new().is_populated());
}

#[cfg(feature = "online")]
#[test]
fn online_table() {
    init_logger();
    let table = crate::tables::online::load_online_table((13, 0)).unwrap();

    assert_eq!(table.group_names().first(), Some(&"Smileys & Emotion"));
    assert_eq!(table.record_at_sub_group("face-smiling", 0).unwrap().text_description, "grinning face");
}
