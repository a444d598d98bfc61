use crate::error::UnknownConfigMethod;
use bitflags::bitflags;

bitflags! {
    /// WPS enrollment capability flags with their on-wire bit values.
    ///
    /// `VIRT_PUSHBUTTON`, `PHY_PUSHBUTTON`, `VIRT_DISPLAY` and
    /// `PHY_DISPLAY` refine a base capability and include its bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WpsConfigMethods: u16 {
        const USBA = 0x0001;
        const ETHERNET = 0x0002;
        const LABEL = 0x0004;
        const DISPLAY = 0x0008;
        const EXT_NFC_TOKEN = 0x0010;
        const INT_NFC_TOKEN = 0x0020;
        const NFC_INTERFACE = 0x0040;
        const PUSHBUTTON = 0x0080;
        const KEYPAD = 0x0100;
        const VIRT_PUSHBUTTON = 0x0280;
        const PHY_PUSHBUTTON = 0x0480;
        const P2PS = 0x1000;
        const VIRT_DISPLAY = 0x2008;
        const PHY_DISPLAY = 0x4008;
    }
}

// Encoding iterates this table, so equal sets always produce
// byte-identical strings regardless of how the caller built the mask.
const METHOD_TOKENS: [(WpsConfigMethods, &str); 14] = [
    (WpsConfigMethods::USBA, "usba"),
    (WpsConfigMethods::ETHERNET, "ethernet"),
    (WpsConfigMethods::LABEL, "label"),
    (WpsConfigMethods::DISPLAY, "display"),
    (WpsConfigMethods::INT_NFC_TOKEN, "int_nfc_token"),
    (WpsConfigMethods::EXT_NFC_TOKEN, "ext_nfc_token"),
    (WpsConfigMethods::NFC_INTERFACE, "nfc_interface"),
    (WpsConfigMethods::PUSHBUTTON, "pushbutton"),
    (WpsConfigMethods::KEYPAD, "keypad"),
    (WpsConfigMethods::VIRT_PUSHBUTTON, "virt_pushbutton"),
    (WpsConfigMethods::PHY_PUSHBUTTON, "phy_pushbutton"),
    (WpsConfigMethods::P2PS, "p2ps"),
    (WpsConfigMethods::VIRT_DISPLAY, "virt_display"),
    (WpsConfigMethods::PHY_DISPLAY, "phy_display"),
];

/// Encodes a capability set as its storage string: one token per
/// contained flag in table order, each terminated by a space.
pub fn encode_config_methods(methods: WpsConfigMethods) -> String {
    let mut encoded = String::new();
    for (flag, token) in METHOD_TOKENS {
        if methods.contains(flag) {
            encoded.push_str(token);
            encoded.push(' ');
        }
    }
    encoded
}

/// Parses a whitespace-separated token list back into a capability set.
pub fn parse_config_methods(input: &str) -> Result<WpsConfigMethods, UnknownConfigMethod> {
    let mut methods = WpsConfigMethods::empty();
    for token in input.split_whitespace() {
        let Some((flag, _)) = METHOD_TOKENS.iter().copied().find(|(_, name)| *name == token)
        else {
            return Err(UnknownConfigMethod(token.to_string()));
        };
        methods |= flag;
    }
    Ok(methods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_tokens_in_table_order_with_trailing_space() {
        let methods = WpsConfigMethods::DISPLAY | WpsConfigMethods::KEYPAD;
        assert_eq!(encode_config_methods(methods), "display keypad ");
    }

    #[test]
    fn encodes_the_empty_set_to_the_empty_string() {
        assert_eq!(encode_config_methods(WpsConfigMethods::empty()), "");
    }

    #[test]
    fn encodes_every_method_in_declaration_order() {
        assert_eq!(
            encode_config_methods(WpsConfigMethods::all()),
            "usba ethernet label display int_nfc_token ext_nfc_token nfc_interface \
             pushbutton keypad virt_pushbutton phy_pushbutton p2ps virt_display phy_display "
        );
    }

    #[test]
    fn composite_flags_emit_their_base_token() {
        assert_eq!(
            encode_config_methods(WpsConfigMethods::VIRT_PUSHBUTTON),
            "pushbutton virt_pushbutton "
        );
    }

    #[test]
    fn round_trips_subsets_up_to_set_equality() {
        let subsets = [
            WpsConfigMethods::empty(),
            WpsConfigMethods::USBA,
            WpsConfigMethods::DISPLAY | WpsConfigMethods::KEYPAD,
            WpsConfigMethods::VIRT_PUSHBUTTON,
            WpsConfigMethods::VIRT_PUSHBUTTON | WpsConfigMethods::PHY_PUSHBUTTON,
            WpsConfigMethods::P2PS | WpsConfigMethods::NFC_INTERFACE,
            WpsConfigMethods::all(),
        ];
        for methods in subsets {
            let encoded = encode_config_methods(methods);
            let parsed = parse_config_methods(&encoded).expect("canonical output parses");
            assert_eq!(parsed, methods, "unstable round trip for {methods:?}");
        }
    }

    #[test]
    fn parses_ignoring_surrounding_whitespace() {
        let parsed = parse_config_methods("  display\tkeypad ").expect("parse");
        assert_eq!(parsed, WpsConfigMethods::DISPLAY | WpsConfigMethods::KEYPAD);
    }

    #[test]
    fn rejects_unknown_tokens() {
        let err = parse_config_methods("display telepathy").expect_err("unknown token must fail");
        assert_eq!(err, UnknownConfigMethod("telepathy".to_string()));
    }
}
