#[cfg(test)]
mod integration_test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use strum::IntoEnumIterator;
    use tw_id::{
        generate, region_name, validate, Check, Gender, Generator, IdError, IdentityNumber,
        RegionTable, TaiwanIdChecksum, Validator,
    };

    #[test]
    fn test_reference_id() {
        let report = validate("A123456789");
        assert!(report.valid);

        let messages: Vec<&str> = report.checks.iter().map(|c| c.message.as_str()).collect();
        assert_eq!(messages, vec!["地區: 台北市", "性別: 男性", "驗證碼正確"]);
        assert!(report.checks.iter().all(|c| c.passed));
    }

    #[test]
    fn test_every_generated_id_validates() {
        let regions = RegionTable::standard();
        let mut generator = Generator::new(regions, StdRng::seed_from_u64(2024));

        for entry in regions.entries() {
            for gender in Gender::iter() {
                for _ in 0..25 {
                    let id = generator.generate(entry.letter, gender).unwrap();
                    let report = validate(id.as_str());
                    assert!(report.valid, "{id}: {report}");
                    assert!(TaiwanIdChecksum.is_valid_match(id.as_str()));
                    assert_eq!(
                        report.checks[0].message,
                        format!("地區: {}", region_name(entry.letter).unwrap())
                    );
                }
            }
        }
    }

    #[test]
    fn test_unseeded_generation() {
        let id = generate('W', Gender::Male).unwrap();
        assert_eq!(id.region().name, "金門縣");
        let parsed: IdentityNumber = id.as_str().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_every_wrong_check_digit_names_the_right_one() {
        for last in '0'..='9' {
            let input = format!("A12345678{last}");
            let report = validate(&input);
            if last == '9' {
                assert!(report.valid);
                continue;
            }
            assert!(!report.valid);
            assert_eq!(report.first_failed_check(), Some(Check::Checksum));
            assert_eq!(
                report.first_error(),
                Some(IdError::ChecksumMismatch {
                    expected: '9',
                    actual: last
                })
            );
            assert!(report.to_string().ends_with("(正確應為: 9)"));
        }
    }

    #[test]
    fn test_hostile_inputs_never_panic() {
        let inputs = [
            "",
            " ",
            "A",
            "a1",
            "ß123456789",
            "ǅ123456789",
            "A12345678٩",
            "A1234567890123",
            "🎅123456789",
            "\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}\u{0}",
        ];
        for input in inputs {
            let report = validate(input);
            assert!(!report.valid, "{input:?} should be invalid");
            assert!(!report.checks.is_empty());
            assert!(input.parse::<IdentityNumber>().is_err());
        }
    }

    #[test]
    fn test_report_json() {
        let json = serde_json::to_string(&validate("A123456780")).unwrap();
        assert_eq!(
            json,
            r#"{"valid":false,"checks":[{"check":"region","passed":true,"message":"地區: 台北市"},{"check":"gender","passed":true,"message":"性別: 男性"},{"check":"checksum","passed":false,"message":"驗證碼錯誤 (正確應為: 9)"}]}"#
        );
    }
}
