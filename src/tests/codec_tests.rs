// Decoding pipeline scenarios: round trips, length invariant and each failure stage

#[cfg(test)]
mod decode_pipeline_tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    use crate::alphabet::Alphabet;
    use crate::codec::Translator;
    use crate::error::{DecodeStage, GugaError};
    use crate::table::{base64_index, CODE_WIDTH};
    use crate::tokenizer::tokenize;

    // Emoji text for an arbitrary (possibly non-canonical) Base64 string, padding dropped
    fn emoji_for_base64(translator: &Translator, base64: &str) -> String {
        base64
            .chars()
            .filter_map(base64_index)
            .filter_map(|index| translator.tables().code(index))
            .collect()
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(crate::decode(b"").unwrap(), Vec::<u8>::new());
        assert_eq!(Translator::default().decode_text("").unwrap(), "");
    }

    #[test]
    fn test_roundtrip_ascii() {
        let encoded = crate::encode(b"A").unwrap();
        assert_eq!(crate::decode(&encoded).unwrap(), b"A");
    }

    #[test]
    fn test_roundtrip_multibyte() {
        let encoded = crate::encode("你好".as_bytes()).unwrap();
        assert_eq!(String::from_utf8(crate::decode(&encoded).unwrap()).unwrap(), "你好");
    }

    #[test]
    fn test_roundtrip_all_lengths() {
        let translator = Translator::default();
        let source = "The penguin says 咕嘎 🐧🍄 哇擦!";
        for end in source.char_indices().map(|(i, _)| i).chain([source.len()]) {
            let text = &source[..end];
            assert_eq!(translator.decode_text(&translator.encode_text(text)).unwrap(), text);
        }
    }

    #[test]
    fn test_length_invariant() {
        let translator = Translator::default();
        for text in ["", "A", "ab", "abc", "你好", "hello, world"] {
            let stripped = STANDARD.encode(text).trim_end_matches('=').len();
            let encoded = translator.encode_text(text);
            let tokens = tokenize(translator.alphabet(), &encoded).unwrap();
            assert_eq!(tokens.len(), stripped * CODE_WIDTH, "text {:?}", text);
        }
    }

    #[test]
    fn test_invalid_token() {
        let err = crate::decode("XYZ".as_bytes()).unwrap_err();
        assert!(matches!(err, GugaError::InvalidToken { position: 0 }));
        assert_eq!(err.stage(), Some(DecodeStage::Tokenize));
    }

    #[test]
    fn test_invalid_length() {
        let err = crate::decode("咕嘎🐧🍄".as_bytes()).unwrap_err();
        assert!(matches!(err, GugaError::InvalidLength { tokens: 4 }));
        assert_eq!(err.stage(), Some(DecodeStage::LengthValidation));
    }

    #[test]
    fn test_unknown_code() {
        // Base-5 400 = 100, past the 64 table entries
        let err = crate::decode("哇擦咕咕".as_bytes()).unwrap_err();
        match err {
            GugaError::UnknownCode(code) => assert_eq!(code, "哇擦咕咕"),
            other => panic!("unexpected error: {:?}", other),
        }

        // A valid code followed by an out-of-range one
        let valid = Translator::default().encode_text("A");
        let input = format!("{}🍄咕咕", &valid);
        assert!(matches!(crate::decode(input.as_bytes()), Err(GugaError::UnknownCode(code)) if code == "🍄咕咕"));
    }

    #[test]
    fn test_base64_decode_failure() {
        // One Base64 character cannot form a byte
        let err = crate::decode("咕咕咕".as_bytes()).unwrap_err();
        assert!(matches!(err, GugaError::Base64Decode(_)));
        assert_eq!(err.stage(), Some(DecodeStage::Base64Decode));
    }

    #[test]
    fn test_trailing_bits_accepted() {
        let translator = Translator::default();
        let input = emoji_for_base64(&translator, "AB");
        assert_eq!(translator.decode_text(&input).unwrap(), "\0");
    }

    #[test]
    fn test_invalid_utf8_payload() {
        let translator = Translator::default();
        let input = emoji_for_base64(&translator, &STANDARD.encode([0xffu8, 0xfe]));
        let err = translator.decode_text(&input).unwrap_err();
        assert!(matches!(err, GugaError::Utf8Decode(_)));
        assert_eq!(err.stage(), Some(DecodeStage::Utf8Decode));
    }

    #[test]
    fn test_greedy_alphabet_segmentation() {
        let alphabet = Alphabet::new(["a", "ab", "c", "d", "e"]).unwrap();
        let translator = Translator::new(alphabet).unwrap();
        let encoded = translator.encode_text("penguin");
        let tokens = tokenize(translator.alphabet(), &encoded).unwrap();
        assert_eq!(tokens.len() % CODE_WIDTH, 0);
        assert_eq!(translator.decode_text(&encoded).unwrap(), "penguin");
    }

    #[test]
    fn test_concurrent_use() {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = format!("thread {} 你好", i);
                    let encoded = crate::encode(text.as_bytes()).unwrap();
                    assert_eq!(crate::decode(&encoded).unwrap(), text.as_bytes());
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
